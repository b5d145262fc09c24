//!
//! src/transform.rs  Andrew Belles  Sept 19th, 2025
//!
//! Normalizes raw export rows and regroups them into albums keyed
//! by cd title. Every per-field transform is total; malformed input
//! degrades to a default instead of failing the run
//!
//!

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::types::{Album, RawTrackRow, Track};

/// Placeholder strings the source dataset uses to mean "no data".
/// Compared against the whole trimmed field, never per piece.
pub const NO_DATA_SENTINELS: [&str; 3] = ["None", "notes", "keywords, keyword"];

/// The export writes track lengths as minutes:seconds.fraction with an
/// optional leading zero on the minutes
static DURATION_PATTERN: Lazy<Regex> = Lazy::new(||
    Regex::new(r"^0?(\d+):(\d+)\.\d+$").unwrap()
);

/// "03:45.120" -> "3:45". Empty or off-pattern input yields None.
pub fn format_duration(raw: &str) -> Option<String> {
    let caps = DURATION_PATTERN.captures(raw)?;
    Some(format!("{}:{}", &caps[1], &caps[2]))
}

/// Splits a comma separated field into trimmed, non-empty pieces,
/// dropping known placeholder artifacts wholesale
pub fn parse_list_field(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || NO_DATA_SENTINELS.contains(&trimmed) {
        return Vec::new();
    }
    trimmed.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Leading ascii digits only; "128bpm" -> 128, "fast" -> None
pub fn parse_bpm(raw: &str) -> Option<u32> {
    let digits: String = raw.trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// Builds one output track from a raw export row
pub fn normalize_track(row: &RawTrackRow) -> Track {
    Track {
        title: row.track_title.clone(),
        // the export carries no per-track year
        year: None,
        length: format_duration(&row.duration),
        scotts_picks: parse_list_field(&row.notes),
        gregs_picks: parse_list_field(&row.cd_description),
        master: if row.tape.is_empty() {
            "NULL".to_string()
        } else {
            row.tape.clone()
        },
        description: row.description.clone(),
        bpm: parse_bpm(&row.bpm),
        tags: parse_list_field(&row.keywords),
    }
}

/// Single linear pass over the export. The album header is frozen from
/// the first row seen for a title; later rows with the same title only
/// append their track. Output order is first-seen order of titles.
pub fn group_albums(
    rows: &[RawTrackRow],
    artists: &HashMap<String, String>
) -> Vec<Album> {

    let mut albums: Vec<Album> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let slot = match index.get(&row.cd_title) {
            Some(&i) => i,
            None => {
                debug!(title = %row.cd_title, "album.new");
                albums.push(Album {
                    status: "draft".to_string(),
                    library: row.library.to_lowercase(),
                    artist: artists.get(&row.artist).cloned(),
                    title: row.cd_title.clone(),
                    year_released: if row.year_released.is_empty() {
                        None
                    } else {
                        Some(row.year_released.clone())
                    },
                    tracks: Vec::new(),
                });
                index.insert(row.cd_title.clone(), albums.len() - 1);
                albums.len() - 1
            }
        };
        albums[slot].tracks.push(normalize_track(row));
    }
    albums
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cd_title: &str, track_title: &str) -> RawTrackRow {
        RawTrackRow {
            cd_title: cd_title.to_string(),
            track_title: track_title.to_string(),
            ..RawTrackRow::default()
        }
    }

    #[test]
    fn duration_strips_fraction_and_leading_zero() {
        assert_eq!(format_duration("03:45.120"), Some("3:45".to_string()));
        assert_eq!(format_duration("10:05.000"), Some("10:05".to_string()));
        assert_eq!(format_duration("1:02.5"), Some("1:02".to_string()));
    }

    #[test]
    fn duration_off_pattern_is_none() {
        assert_eq!(format_duration(""), None);
        assert_eq!(format_duration("3:45"), None);
        assert_eq!(format_duration("fast"), None);
        assert_eq!(format_duration("03:45.120 "), None);
    }

    #[test]
    fn list_field_splits_and_trims() {
        assert_eq!(parse_list_field("a, b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_list_field("solo"), vec!["solo"]);
        assert_eq!(parse_list_field("a,,b,"), vec!["a", "b"]);
    }

    #[test]
    fn list_field_sentinels_mean_no_data() {
        assert!(parse_list_field("").is_empty());
        assert!(parse_list_field("None").is_empty());
        assert!(parse_list_field("notes").is_empty());
        assert!(parse_list_field("keywords, keyword").is_empty());
        assert!(parse_list_field("  None  ").is_empty());
    }

    #[test]
    fn bpm_takes_leading_digits() {
        assert_eq!(parse_bpm("128"), Some(128));
        assert_eq!(parse_bpm("128bpm"), Some(128));
        assert_eq!(parse_bpm("fast"), None);
        assert_eq!(parse_bpm(""), None);
    }

    #[test]
    fn track_defaults_apply() {
        let raw = row("X", "T1");
        let track = normalize_track(&raw);
        assert_eq!(track.title, "T1");
        assert_eq!(track.year, None);
        assert_eq!(track.length, None);
        assert_eq!(track.master, "NULL");
        assert_eq!(track.description, "");
        assert_eq!(track.bpm, None);
        assert!(track.scotts_picks.is_empty());
        assert!(track.gregs_picks.is_empty());
        assert!(track.tags.is_empty());
    }

    #[test]
    fn tape_passes_through_when_present() {
        let mut raw = row("X", "T1");
        raw.tape = "T-104".to_string();
        assert_eq!(normalize_track(&raw).master, "T-104");
    }

    #[test]
    fn grouping_keeps_first_seen_order() {
        let rows = vec![
            row("A", "T1"),
            row("B", "T2"),
            row("A", "T3"),
            row("C", "T4"),
        ];
        let albums = group_albums(&rows, &HashMap::new());

        let titles: Vec<&str> = albums.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
        assert_eq!(albums[0].tracks.len(), 2);
        assert_eq!(albums[0].tracks[0].title, "T1");
        assert_eq!(albums[0].tracks[1].title, "T3");
        assert_eq!(albums[1].tracks.len(), 1);
        assert_eq!(albums[2].tracks.len(), 1);
    }

    #[test]
    fn album_header_comes_from_first_row() {
        let mut first = row("A", "T1");
        first.library = "East".to_string();
        first.year_released = "1998".to_string();
        let mut second = row("A", "T2");
        second.library = "West".to_string();
        second.year_released = "2004".to_string();

        let albums = group_albums(&[first, second], &HashMap::new());
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].library, "east");
        assert_eq!(albums[0].year_released, Some("1998".to_string()));
    }

    #[test]
    fn artist_id_resolves_or_stays_null() {
        let mut known = row("A", "T1");
        known.artist = "Bob".to_string();
        let mut unknown = row("B", "T2");
        unknown.artist = "Unknown".to_string();

        let mut artists = HashMap::new();
        artists.insert("Bob".to_string(), "A1".to_string());

        let albums = group_albums(&[known, unknown], &artists);
        assert_eq!(albums[0].artist, Some("A1".to_string()));
        assert_eq!(albums[1].artist, None);
    }

    #[test]
    fn empty_year_released_is_null() {
        let albums = group_albums(&[row("A", "T1")], &HashMap::new());
        assert_eq!(albums[0].year_released, None);
    }
}
