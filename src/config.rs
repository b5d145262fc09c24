use std::path::PathBuf;
use crate::errors::ImporterError;

/// Default file locations when nothing is configured
pub const DEFAULT_IMPORT_FILE: &str = "import_file.csv";
pub const DEFAULT_ARTIST_FILE: &str = "artist_ids.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "output.json";

/// Wrapper over env::var that falls back to a default when unset but
/// rejects a variable that is set to a blank value
fn env_path(s: &str, default: &str) -> Result<PathBuf, ImporterError> {
    match std::env::var(s) {
        Ok(v) if !v.trim().is_empty() => Ok(PathBuf::from(v)),
        Ok(_) => Err(ImporterError::Config(format!("{s} is set but blank"))),
        Err(_) => Ok(PathBuf::from(default)),
    }
}

///
/// Configuration for the three file locations the importer touches
///
#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub import_file: PathBuf,
    pub artist_file: PathBuf,
    pub output_file: PathBuf,
}

fn build_paths() -> Result<PathsConfig, ImporterError> {
    let import_file = env_path("IMPORT_FILE", DEFAULT_IMPORT_FILE)?;
    let artist_file = env_path("ARTIST_FILE", DEFAULT_ARTIST_FILE)?;
    let output_file = env_path("OUTPUT_FILE", DEFAULT_OUTPUT_FILE)?;

    Ok( PathsConfig { import_file, artist_file, output_file } )
}

///
/// Configuration for Logger
///

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter_directives: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub include_file_line: bool,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        // console one-shot defaults to pretty output
        let format = match std::env::var("LOG_FORMAT").ok().as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Self {
            filter_directives: "info,rs_importer=debug".to_string(),
            format,
            with_ansi: true,
            include_file_line: false,
            include_target: false,
        }
    }
}

///
/// AppConfig which holds everything the run needs
///
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub logging: LoggingConfig,
}

///
/// Return all environment variables to caller at program start.
///
pub fn load_config() -> Result<AppConfig, ImporterError> {
    dotenvy::dotenv().ok();

    let paths   = build_paths()?;
    let logging = LoggingConfig::default();

    Ok( AppConfig { paths, logging } )
}
