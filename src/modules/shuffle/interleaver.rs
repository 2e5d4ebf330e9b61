use crate::core::error::{Result, ShuffleError};
use crate::core::models::Item;
use crate::modules::shuffle::pattern::{self, PatternNode};
use crate::modules::shuffle::registry::SourceRegistry;
use log::{debug, trace};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};

/// Knobs for one shuffle run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleOptions {
    /// Shuffle each source once, then replay that same order on every refill
    pub consistent_order: bool,

    /// Reshuffle a refill whose first item equals the last emitted item
    pub avoid_immediate_repeat: bool,
}

impl Default for ShuffleOptions {
    fn default() -> Self {
        Self {
            consistent_order: false,
            avoid_immediate_repeat: true,
        }
    }
}

/// Interleaves per-source shuffled queues following a flat key sequence
///
/// Uses one "shuffle queue" per source:
/// - Each source starts as a randomized copy of its registered items
/// - Every key pulls the next item off that source's queue
/// - An exhausted queue is reshuffled and refilled, so no item repeats
///   within a single pass through its source
#[derive(Debug, Clone, Copy)]
pub struct Interleaver<'a> {
    registry: &'a SourceRegistry,
    options: ShuffleOptions,
}

impl<'a> Interleaver<'a> {
    pub fn new(registry: &'a SourceRegistry) -> Self {
        Self {
            registry,
            options: ShuffleOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ShuffleOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> ShuffleOptions {
        self.options
    }

    /// Shuffle the sources together in the order given by `flat_keys`
    pub fn shuffle_together(&self, flat_keys: &[String]) -> Result<Vec<Item>> {
        let mut rng = rand::rng();
        self.shuffle_together_with(flat_keys, &mut rng)
    }

    /// Same as [`shuffle_together`](Self::shuffle_together) with a caller supplied RNG
    ///
    /// Every key is checked against the registry before the first item is
    /// produced, so the result is either complete or an error.
    pub fn shuffle_together_with<R: Rng + ?Sized>(
        &self,
        flat_keys: &[String],
        rng: &mut R,
    ) -> Result<Vec<Item>> {
        let mut working = WorkingState::prepare(self.registry, flat_keys, rng)?;

        let mut output = Vec::with_capacity(flat_keys.len());
        for key in flat_keys {
            output.push(working.next_from(key, self.options, rng)?);
        }

        debug!(
            "Shuffled {} sources into {} items",
            working.queues.len(),
            output.len()
        );
        Ok(output)
    }

    /// Expand `nodes` and shuffle the result
    pub fn shuffle_pattern(&self, nodes: &[PatternNode]) -> Result<Vec<Item>> {
        let mut rng = rand::rng();
        self.shuffle_pattern_with(nodes, &mut rng)
    }

    pub fn shuffle_pattern_with<R: Rng + ?Sized>(
        &self,
        nodes: &[PatternNode],
        rng: &mut R,
    ) -> Result<Vec<Item>> {
        let flat_keys = pattern::expand(nodes)?;
        self.shuffle_together_with(&flat_keys, rng)
    }
}

/// One source's randomized copy plus the queue being consumed from it
#[derive(Debug)]
struct SourceQueue {
    base: Vec<Item>,
    queue: VecDeque<Item>,
}

impl SourceQueue {
    fn new<R: Rng + ?Sized>(items: &[Item], rng: &mut R) -> Self {
        let mut base = items.to_vec();
        base.shuffle(rng);
        let queue = base.iter().cloned().collect();
        Self { base, queue }
    }

    /// Refill an exhausted queue from `base`
    ///
    /// Unless the order is fixed, `base` is reshuffled first. With repeat
    /// avoidance on, it keeps reshuffling while the new front equals
    /// `last_emitted`. Sources of one item, or whose items all equal
    /// `last_emitted`, cannot avoid the repeat and are left as shuffled.
    fn refill<R: Rng + ?Sized>(
        &mut self,
        last_emitted: Option<&Item>,
        options: ShuffleOptions,
        rng: &mut R,
    ) {
        if !options.consistent_order {
            self.base.shuffle(rng);

            if options.avoid_immediate_repeat {
                if let Some(last) = last_emitted {
                    let avoidable =
                        self.base.len() > 1 && self.base.iter().any(|item| item != last);
                    while avoidable && self.base.first() == Some(last) {
                        trace!("Refill would repeat {}, reshuffling", last);
                        self.base.shuffle(rng);
                    }
                }
            }
        }

        self.queue = self.base.iter().cloned().collect();
    }
}

/// Per-call state, discarded when the shuffle returns
#[derive(Debug)]
struct WorkingState {
    queues: HashMap<String, SourceQueue>,

    /// Last item emitted from any source
    last_emitted: Option<Item>,
}

impl WorkingState {
    /// Build a queue for every distinct key, in order of first appearance.
    /// Fails on unknown or empty sources.
    fn prepare<R: Rng + ?Sized>(
        registry: &SourceRegistry,
        flat_keys: &[String],
        rng: &mut R,
    ) -> Result<Self> {
        let mut queues = HashMap::new();

        for key in flat_keys {
            if queues.contains_key(key) {
                continue;
            }
            let items = registry.get(key)?;
            if items.is_empty() {
                return Err(ShuffleError::EmptySource(key.clone()));
            }
            queues.insert(key.clone(), SourceQueue::new(items, rng));
        }

        Ok(Self {
            queues,
            last_emitted: None,
        })
    }

    fn next_from<R: Rng + ?Sized>(
        &mut self,
        key: &str,
        options: ShuffleOptions,
        rng: &mut R,
    ) -> Result<Item> {
        let source = self
            .queues
            .get_mut(key)
            .ok_or_else(|| ShuffleError::UnknownSource(key.to_string()))?;

        if source.queue.is_empty() {
            trace!("Source '{}' exhausted, refilling", key);
            source.refill(self.last_emitted.as_ref(), options, rng);
        }

        let item = source
            .queue
            .pop_front()
            .ok_or_else(|| ShuffleError::EmptySource(key.to_string()))?;
        self.last_emitted = Some(item.clone());
        Ok(item)
    }
}
