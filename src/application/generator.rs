use crate::application::state::AppState;
use crate::core::models::flatten_items;
use crate::modules::shuffle::interleaver::{Interleaver, ShuffleOptions};
use crate::modules::shuffle::registry::SourceRegistry;
use anyhow::{Result, bail};
use log::{debug, info, warn};
use rand::Rng;

/// Turns the saved pattern and library into a playback queue
pub struct QueueGenerator<'a> {
    state: &'a AppState,
    options: ShuffleOptions,
}

impl<'a> QueueGenerator<'a> {
    pub fn new(state: &'a AppState, options: ShuffleOptions) -> Self {
        Self { state, options }
    }

    /// Register every playlist the pattern uses.
    ///
    /// Playlists missing from the library are skipped here; the shuffle then
    /// fails on them as unknown sources.
    pub fn build_registry(&self) -> SourceRegistry {
        let mut registry = SourceRegistry::new();
        let mut pattern = self.state.pattern.clone();
        pattern.refresh_unique_playlists();

        for id in &pattern.unique_playlists {
            match self.state.library.find(id) {
                Some(playlist) => {
                    registry.register(id.clone(), playlist.available_video_ids.iter().cloned());
                }
                None => warn!("Pattern references playlist '{}' which is not in the library", id),
            }
        }

        debug!("Registry built with {} sources", registry.len());
        registry
    }

    pub fn generate(&self) -> Result<Vec<String>> {
        let mut rng = rand::rng();
        self.generate_with(&mut rng)
    }

    /// Expand, shuffle, and flatten conjoined groups into a flat id queue
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<String>> {
        if self.state.pattern.is_empty() {
            bail!("No pattern saved. Build one with 'pattern add' and 'pattern commit'.");
        }

        let registry = self.build_registry();
        let items = Interleaver::new(&registry)
            .with_options(self.options)
            .shuffle_pattern_with(&self.state.pattern.to_nodes(), rng)?;

        let queue = flatten_items(&items);
        info!("Generated queue of {} ids from {} pattern slots", queue.len(), items.len());
        Ok(queue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ShuffleError;
    use crate::core::models::{Item, PlaylistRecord};
    use crate::modules::shuffle::document::{PatternDocument, PatternEntry, PatternGroup};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn playlist(id: &str, ids: &[&str]) -> PlaylistRecord {
        PlaylistRecord::new(id, id, ids.iter().map(|&i| Item::from(i)).collect())
    }

    fn group(entries: &[(&str, u32)], count: u32) -> PatternGroup {
        PatternGroup {
            playlists: entries
                .iter()
                .map(|&(id, count)| PatternEntry { id: id.to_string(), count, title: None })
                .collect(),
            count,
        }
    }

    fn state(groups: Vec<PatternGroup>) -> AppState {
        let mut state = AppState::default();
        state.library.upsert(playlist("vibes", &["v1", "v2", "v3"]));
        state.library.upsert(playlist("boss", &["b1", "b2"]));
        state.pattern = PatternDocument::new(groups);
        state
    }

    #[test]
    fn generates_one_id_per_pattern_slot() {
        let state = state(vec![group(&[("vibes", 3), ("boss", 1)], 2)]);
        let mut rng = StdRng::seed_from_u64(17);
        let queue = QueueGenerator::new(&state, ShuffleOptions::default())
            .generate_with(&mut rng)
            .unwrap();

        assert_eq!(queue.len(), 8);
        assert!(queue[3].starts_with('b'));
        assert!(queue[7].starts_with('b'));
        assert!(queue[0..3].iter().all(|id| id.starts_with('v')));
    }

    #[test]
    fn conjoined_groups_are_flattened_in_place() {
        let mut state = state(vec![group(&[("pair", 1)], 2)]);
        let pair = state
            .library
            .conjoin(&["vibes".to_string(), "boss".to_string()], None)
            .unwrap();
        state.library.upsert(PlaylistRecord { id: "pair".to_string(), ..pair });

        // groups are [v1 b1], [v2 b2], [v3]; two distinct ones are drawn
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let queue = QueueGenerator::new(&state, ShuffleOptions::default())
                .generate_with(&mut rng)
                .unwrap();

            assert!(queue.len() == 3 || queue.len() == 4, "{:?}", queue);
            assert!(queue[0].starts_with('v'), "{:?}", queue);
            for (i, id) in queue.iter().enumerate() {
                match id.as_str() {
                    "v1" => assert_eq!(queue[i + 1], "b1", "{:?}", queue),
                    "v2" => assert_eq!(queue[i + 1], "b2", "{:?}", queue),
                    "b1" => assert_eq!(queue[i - 1], "v1", "{:?}", queue),
                    "b2" => assert_eq!(queue[i - 1], "v2", "{:?}", queue),
                    "v3" => {}
                    other => panic!("unexpected id {}", other),
                }
            }

            let mut sorted = queue.clone();
            sorted.sort();
            sorted.dedup();
            assert_eq!(sorted.len(), queue.len(), "a group was drawn twice: {:?}", queue);
        }
    }

    #[test]
    fn empty_pattern_is_an_error() {
        let state = state(Vec::new());
        assert!(QueueGenerator::new(&state, ShuffleOptions::default()).generate().is_err());
    }

    #[test]
    fn missing_playlist_surfaces_as_unknown_source() {
        let state = state(vec![group(&[("vibes", 1), ("gone", 1)], 1)]);
        let err = QueueGenerator::new(&state, ShuffleOptions::default())
            .generate()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ShuffleError>(),
            Some(&ShuffleError::UnknownSource("gone".to_string()))
        );
    }
}
