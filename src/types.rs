use serde::{Deserialize, Serialize};

/// One row of the artist lookup file
#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub id: String,
}

/// One row of the denormalized track export. Every field is a plain
/// string at this stage; absent columns deserialize as empty strings
/// and extra columns are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrackRow {
    #[serde(default, rename = "Artist")]
    pub artist: String,
    #[serde(default, rename = "CDTitle")]
    pub cd_title: String,
    #[serde(default)]
    pub year_released: String,
    #[serde(default, rename = "Library")]
    pub library: String,
    #[serde(default, rename = "TrackTitle")]
    pub track_title: String,
    #[serde(default, rename = "Duration")]
    pub duration: String,
    #[serde(default, rename = "BPM")]
    pub bpm: String,
    #[serde(default, rename = "Notes")]
    pub notes: String,
    #[serde(default, rename = "CDDescription")]
    pub cd_description: String,
    #[serde(default, rename = "Tape")]
    pub tape: String,
    #[serde(default, rename = "Description")]
    pub description: String,
    #[serde(default, rename = "Keywords")]
    pub keywords: String,
}

/// Output track. Field order here is the key order in the emitted json.
#[derive(Debug, Clone, Serialize)]
pub struct Track {
    pub title: String,
    pub year: Option<String>,
    pub length: Option<String>,
    pub scotts_picks: Vec<String>,
    pub gregs_picks: Vec<String>,
    pub master: String,
    pub description: String,
    pub bpm: Option<u32>,
    pub tags: Vec<String>,
}

/// Output album, grouped by CDTitle. Header fields come from the first
/// export row seen for the title.
#[derive(Debug, Clone, Serialize)]
pub struct Album {
    pub status: String,
    pub library: String,
    pub artist: Option<String>,
    pub title: String,
    pub year_released: Option<String>,
    pub tracks: Vec<Track>,
}
