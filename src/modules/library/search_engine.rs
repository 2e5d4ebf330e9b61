use crate::core::models::PlaylistRecord;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Result of a fuzzy search operation
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// Original index in the library
    pub index: usize,
    /// The matched playlist
    pub playlist: &'a PlaylistRecord,
    /// Match score (higher is better)
    pub score: i64,
}

/// Search engine for finding playlists with fuzzy matching
pub struct SearchEngine {
    matcher: SkimMatcherV2,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Perform a fuzzy search across the stored playlists
    ///
    /// Returns results sorted by relevance (best matches first)
    ///
    /// # Arguments
    /// * `playlists` - Every playlist in the library
    /// * `query` - The search query string
    pub fn search<'a>(&self, playlists: &'a [PlaylistRecord], query: &str) -> Vec<SearchResult<'a>> {
        if query.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();

        let mut results: Vec<SearchResult> = playlists
            .iter()
            .enumerate()
            .filter_map(|(index, playlist)| {
                self.score_playlist(playlist, &query_lower).map(|score| SearchResult {
                    index,
                    playlist,
                    score,
                })
            })
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));

        results
    }

    /// Best score across title and id, or None if neither matches
    fn score_playlist(&self, playlist: &PlaylistRecord, query: &str) -> Option<i64> {
        let title_score = self.matcher.fuzzy_match(&playlist.title.to_lowercase(), query);
        let id_score = self.matcher.fuzzy_match(&playlist.id.to_lowercase(), query);

        [title_score, id_score].into_iter().flatten().max()
    }

    /// Converts SearchResult to (index, PlaylistRecord) tuples by cloning
    pub fn search_result_to_index(&self, search_results: Vec<SearchResult<'_>>) -> Vec<(usize, PlaylistRecord)> {
        search_results
            .into_iter()
            .map(|result| (result.index, result.playlist.clone()))
            .collect()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}
