//!
//! src/load.rs  Andrew Belles  Sept 18th, 2025
//!
//! Defines methods for reading the two csv inputs into typed rows
//! and building the artist name to id lookup
//!

use std::{collections::HashMap, fs, path::Path};

use csv::ReaderBuilder;
use serde::de::DeserializeOwned;

use crate::errors::ImporterError;
use crate::types::ArtistRecord;

/// Reads a whole csv file (header row expected) into typed rows.
/// The file must decode as utf-8; blank lines are skipped by the reader.
pub fn read_csv<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ImporterError> {
    let text = fs::read_to_string(path).map_err(|e|
        ImporterError::Read(format!("{}: {e}", path.display()))
    )?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize::<T>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// name -> id; on duplicate names the later row overwrites the earlier
pub fn artist_map(artists: &[ArtistRecord]) -> HashMap<String, String> {
    artists.iter().fold(HashMap::new(), |mut map, row| {
        map.insert(row.name.clone(), row.id.clone());
        map
    })
}
