use anyhow::{Context, Result};
use mongodb::bson::Document;

/// Seed data shipped inside the binary; the collection is rebuilt from this
/// on every startup.
const SONGS_JSON: &str = include_str!("../data/songs.json");

pub fn bundled_songs() -> Result<Vec<Document>> {
    serde_json::from_str(SONGS_JSON).context("bundled songs.json is not a valid array of songs")
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::song::song_id;

    #[test]
    fn bundled_dataset_parses_and_is_non_empty() {
        let songs = bundled_songs().unwrap();
        assert!(!songs.is_empty());
    }

    #[test]
    fn every_bundled_song_has_a_unique_integer_id() {
        let songs = bundled_songs().unwrap();
        let mut seen = HashSet::new();
        for song in &songs {
            let id = song_id(song).expect("song without an integer id");
            assert!(seen.insert(id), "duplicate id {id} in bundled dataset");
        }
    }
}
