pub const APP_NAME: &str = "playlist-mixer";

/// Joins the ids of conjoined playlists into the id of the result
pub const CONJOIN_ID_SEPARATOR: &str = "|~|";

/// Joins the titles of conjoined playlists when no name is given
pub const CONJOIN_TITLE_SEPARATOR: &str = "-";

pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "webm", "mov", "avi", "m4v", "mp3", "flac", "wav", "ogg", "m4a",
];

/// Privacy statuses of exported playlist entries that are still playable
pub const PLAYABLE_STATUSES: &[&str] = &["public", "unlisted"];

/// Append `count` copies of `item` to `target`
pub fn push_copies<T: Clone>(target: &mut Vec<T>, item: &T, count: usize) {
    target.extend(std::iter::repeat_n(item, count).cloned());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_copies_appends_exact_count() {
        let mut v = vec!["x".to_string()];
        push_copies(&mut v, &"a".to_string(), 3);
        assert_eq!(v, vec!["x", "a", "a", "a"]);
    }

    #[test]
    fn push_copies_zero_is_noop() {
        let mut v: Vec<u8> = Vec::new();
        push_copies(&mut v, &1, 0);
        assert!(v.is_empty());
    }
}
