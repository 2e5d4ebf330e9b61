use crate::core::error::{Result, ShuffleError};
use crate::core::models::Item;
use log::{debug, warn};
use std::collections::HashMap;

/// Named source sequences the shuffler draws from.
///
/// Entries are set once by [`register`](Self::register); only [`replace`](Self::replace)
/// and [`conjoin`](Self::conjoin) overwrite them. The shuffler never mutates
/// what is stored here, it works on copies.
#[derive(Debug, Clone, Default)]
pub struct SourceRegistry {
    sources: HashMap<String, Vec<Item>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a copy of `items` under `name`.
    ///
    /// Returns `false` and leaves the existing entry untouched if `name` is
    /// already registered.
    pub fn register<I>(&mut self, name: impl Into<String>, items: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let name = name.into();
        if self.sources.contains_key(&name) {
            warn!("Source '{}' is already registered, keeping the existing entry", name);
            return false;
        }

        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        debug!("Registered source '{}' with {} items", name, items.len());
        self.sources.insert(name, items);
        true
    }

    /// Store `items` under `name`, overwriting any previous entry
    pub fn replace<I>(&mut self, name: impl Into<String>, items: I)
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        self.sources.insert(name.into(), items);
    }

    /// Zip the named sources position by position.
    ///
    /// The result is stored under `name` when one is given, and returned
    /// either way. Fails if any source is unknown.
    pub fn conjoin(&mut self, name: Option<&str>, sources: &[&str]) -> Result<Vec<Item>> {
        let lists = sources
            .iter()
            .map(|source| self.get(source))
            .collect::<Result<Vec<_>>>()?;
        let conjoined = conjoin_lists(&lists);

        if let Some(name) = name {
            debug!("Conjoined {:?} into '{}' ({} groups)", sources, name, conjoined.len());
            self.sources.insert(name.to_string(), conjoined.clone());
        }

        Ok(conjoined)
    }

    pub fn get(&self, name: &str) -> Result<&[Item]> {
        self.sources
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ShuffleError::UnknownSource(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sources.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Group the i-th entry of every list into the i-th output group.
///
/// Keeps going while any list still has an entry at that index, so shorter
/// lists simply stop contributing. Entries that are already groups contribute
/// all their ids.
pub fn conjoin_lists<L: AsRef<[Item]>>(lists: &[L]) -> Vec<Item> {
    let longest = lists.iter().map(|list| list.as_ref().len()).max().unwrap_or(0);

    (0..longest)
        .map(|i| {
            let ids = lists
                .iter()
                .filter_map(|list| list.as_ref().get(i))
                .flat_map(|item| item.ids().iter().cloned())
                .collect();
            Item::Group(ids)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn items(ids: &[&str]) -> Vec<Item> {
        ids.iter().map(|&id| Item::from(id)).collect()
    }

    fn group(ids: &[&str]) -> Item {
        Item::Group(ids.iter().map(|s| s.to_string()).collect())
    }

    // ── register / get ────────────────────────────────────────────────────────

    #[test]
    fn register_then_get_returns_copy_in_order() {
        let mut registry = SourceRegistry::new();
        assert!(registry.register("A", ["a1", "a2", "a3"]));
        assert_eq!(registry.get("A").unwrap(), items(&["a1", "a2", "a3"]).as_slice());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn register_duplicate_name_is_noop() {
        let mut registry = SourceRegistry::new();
        registry.register("A", ["a1"]);
        assert!(!registry.register("A", ["other"]), "duplicate must be reported");
        assert_eq!(registry.get("A").unwrap(), items(&["a1"]).as_slice());
    }

    #[test]
    fn replace_overwrites_existing_entry() {
        let mut registry = SourceRegistry::new();
        registry.register("A", ["a1"]);
        registry.replace("A", ["a2", "a3"]);
        assert_eq!(registry.get("A").unwrap(), items(&["a2", "a3"]).as_slice());
    }

    #[test]
    fn get_unknown_name_fails() {
        let registry = SourceRegistry::new();
        assert_eq!(
            registry.get("missing"),
            Err(ShuffleError::UnknownSource("missing".to_string()))
        );
    }

    // ── conjoin ───────────────────────────────────────────────────────────────

    #[test]
    fn conjoin_lists_keeps_collecting_while_any_list_has_more() {
        let result = conjoin_lists(&[items(&["a1", "a2"]), items(&["b1", "b2", "b3"])]);
        assert_eq!(
            result,
            vec![group(&["a1", "b1"]), group(&["a2", "b2"]), group(&["b3"])]
        );
    }

    #[test]
    fn conjoin_lists_of_nothing_is_empty() {
        let none: [Vec<Item>; 0] = [];
        assert!(conjoin_lists(&none).is_empty());
    }

    #[test]
    fn conjoin_lists_flattens_nested_groups() {
        let first = vec![group(&["a1", "b1"])];
        let second = items(&["c1"]);
        assert_eq!(conjoin_lists(&[first, second]), vec![group(&["a1", "b1", "c1"])]);
    }

    #[test]
    fn conjoin_stores_under_name_when_given() {
        let mut registry = SourceRegistry::new();
        registry.register("A", ["a1", "a2"]);
        registry.register("B", ["b1"]);

        let result = registry.conjoin(Some("AB"), &["A", "B"]).unwrap();
        assert_eq!(result, vec![group(&["a1", "b1"]), group(&["a2"])]);
        assert_eq!(registry.get("AB").unwrap(), result.as_slice());
    }

    #[test]
    fn conjoin_without_name_does_not_store() {
        let mut registry = SourceRegistry::new();
        registry.register("A", ["a1"]);
        registry.conjoin(None, &["A"]).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn conjoin_unknown_source_fails_without_storing() {
        let mut registry = SourceRegistry::new();
        registry.register("A", ["a1"]);
        let err = registry.conjoin(Some("AX"), &["A", "X"]).unwrap_err();
        assert_eq!(err, ShuffleError::UnknownSource("X".to_string()));
        assert!(!registry.contains("AX"));
    }
}
