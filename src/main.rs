//!
//! src/main.rs  Andrew Belles  Sept 19th, 2025
//!
//! One shot import: joins the denormalized track export with the
//! artist id lookup, regroups tracks into albums, and writes the
//! result as formatted json
//!
//!

mod config;
mod errors;
mod logging;

mod load;
mod sink;
mod transform;
mod types;

use crate::errors::ImporterError;
use crate::types::{ArtistRecord, RawTrackRow};

fn main() -> Result<(), ImporterError> {
    let cfgs   = config::load_config()?;
    let _guard = logging::init_logging(&cfgs.logging)?;

    tracing::info!(
        service="rs-importer",
        version=%env!("CARGO_PKG_VERSION"),
        "starting"
    );

    run(&cfgs.paths)
}

/// The whole pipeline: both reads, the grouping pass, the single write.
/// Re-running with the same inputs fully recomputes and overwrites the
/// output, so a failed run can simply be retried.
fn run(paths: &config::PathsConfig) -> Result<(), ImporterError> {
    let artists: Vec<ArtistRecord> = load::read_csv(&paths.artist_file)?;
    let artist_ids = load::artist_map(&artists);
    tracing::info!(artists = artist_ids.len(), "import.artists");

    let rows: Vec<RawTrackRow> = load::read_csv(&paths.import_file)?;
    tracing::info!(rows = rows.len(), "import.loaded");

    let albums = transform::group_albums(&rows, &artist_ids);
    let tracks: usize = albums.iter().map(|a| a.tracks.len()).sum();

    let written = sink::JsonSink::new(&paths.output_file).write(&albums)?;
    tracing::info!(
        albums = albums.len(),
        tracks,
        path = %written.display(),
        "import.done"
    );

    Ok(())
}
