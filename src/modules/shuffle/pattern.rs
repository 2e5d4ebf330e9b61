use crate::core::error::{Result, ShuffleError};
use crate::utils::push_copies;

/// Upper bound on the number of keys a pattern may expand to
pub const MAX_EXPANDED_KEYS: usize = 1_000_000;

/// A node of a user-authored repeating pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternNode {
    /// Emit `name` `repeat` times in a row
    Leaf { name: String, repeat: u32 },

    /// Expand `children` once, then repeat that whole block `repeat` times
    Group { children: Vec<PatternNode>, repeat: u32 },
}

impl PatternNode {
    pub fn leaf(name: impl Into<String>, repeat: u32) -> Self {
        PatternNode::Leaf { name: name.into(), repeat }
    }

    pub fn group(children: Vec<PatternNode>, repeat: u32) -> Self {
        PatternNode::Group { children, repeat }
    }

    pub fn repeat(&self) -> u32 {
        match self {
            PatternNode::Leaf { repeat, .. } | PatternNode::Group { repeat, .. } => *repeat,
        }
    }

    /// Number of keys this node contributes once expanded, `None` on overflow
    pub fn expanded_len(&self) -> Option<usize> {
        match self {
            PatternNode::Leaf { repeat, .. } => Some(*repeat as usize),
            PatternNode::Group { children, repeat } => {
                total_len(children)?.checked_mul(*repeat as usize)
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            PatternNode::Leaf { name, .. } => format!("source '{}'", name),
            PatternNode::Group { children, .. } => format!("group of {} nodes", children.len()),
        }
    }
}

/// Reject any node, at any depth, that repeats fewer than once
pub fn validate(nodes: &[PatternNode]) -> Result<()> {
    for node in nodes {
        if node.repeat() == 0 {
            return Err(ShuffleError::InvalidRepeat {
                node: node.describe(),
                count: node.repeat(),
            });
        }
        if let PatternNode::Group { children, .. } = node {
            validate(children)?;
        }
    }
    Ok(())
}

/// Number of keys `nodes` expand to, `None` on overflow
pub fn total_len(nodes: &[PatternNode]) -> Option<usize> {
    nodes
        .iter()
        .try_fold(0usize, |total, node| total.checked_add(node.expanded_len()?))
}

/// Flatten a pattern into the ordered sequence of source names.
///
/// Depth-first, left to right, no randomness. The whole pattern is validated,
/// and its length checked against [`MAX_EXPANDED_KEYS`], before anything is
/// expanded.
pub fn expand(nodes: &[PatternNode]) -> Result<Vec<String>> {
    validate(nodes)?;

    let len = total_len(nodes)
        .filter(|&len| len <= MAX_EXPANDED_KEYS)
        .ok_or(ShuffleError::PatternTooLarge { limit: MAX_EXPANDED_KEYS })?;

    let mut keys = Vec::with_capacity(len);
    expand_into(nodes, &mut keys);
    Ok(keys)
}

fn expand_into(nodes: &[PatternNode], keys: &mut Vec<String>) {
    for node in nodes {
        match node {
            PatternNode::Leaf { name, repeat } => push_copies(keys, name, *repeat as usize),
            PatternNode::Group { children, repeat } => {
                let mut block = Vec::new();
                expand_into(children, &mut block);
                for _ in 0..*repeat {
                    keys.extend(block.iter().cloned());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ── expand ────────────────────────────────────────────────────────────────

    #[test]
    fn leaf_repeats_its_name() {
        let keys = expand(&[PatternNode::leaf("A", 2)]).unwrap();
        assert_eq!(keys, vec!["A", "A"]);
    }

    #[test]
    fn group_repeats_whole_block_not_each_element() {
        let pattern = [PatternNode::group(
            vec![PatternNode::leaf("A", 1), PatternNode::leaf("B", 1)],
            2,
        )];
        assert_eq!(expand(&pattern).unwrap(), vec!["A", "B", "A", "B"]);
    }

    #[test]
    fn nested_groups_expand_depth_first_left_to_right() {
        let pattern = [
            PatternNode::leaf("intro", 1),
            PatternNode::group(
                vec![
                    PatternNode::leaf("vibes", 2),
                    PatternNode::group(vec![PatternNode::leaf("boss", 1)], 2),
                ],
                2,
            ),
        ];
        assert_eq!(
            expand(&pattern).unwrap(),
            vec!["intro", "vibes", "vibes", "boss", "boss", "vibes", "vibes", "boss", "boss"]
        );
    }

    #[test]
    fn empty_pattern_expands_to_nothing() {
        assert!(expand(&[]).unwrap().is_empty());
    }

    // ── validation ────────────────────────────────────────────────────────────

    #[test]
    fn zero_repeat_leaf_is_rejected() {
        let err = expand(&[PatternNode::leaf("A", 1), PatternNode::leaf("B", 0)]).unwrap_err();
        assert_eq!(
            err,
            ShuffleError::InvalidRepeat { node: "source 'B'".to_string(), count: 0 }
        );
    }

    #[test]
    fn zero_repeat_deep_inside_group_is_rejected() {
        let pattern = [PatternNode::group(
            vec![PatternNode::group(vec![PatternNode::leaf("A", 0)], 1)],
            3,
        )];
        assert!(matches!(expand(&pattern), Err(ShuffleError::InvalidRepeat { .. })));
    }

    #[test]
    fn zero_repeat_group_is_rejected() {
        let pattern = [PatternNode::group(vec![PatternNode::leaf("A", 1)], 0)];
        assert!(matches!(expand(&pattern), Err(ShuffleError::InvalidRepeat { count: 0, .. })));
    }

    // ── Size limit ────────────────────────────────────────────────────────────

    #[test]
    fn nested_max_repeats_are_rejected_instead_of_overflowing() {
        let pattern = [PatternNode::group(
            vec![PatternNode::group(vec![PatternNode::leaf("A", u32::MAX)], u32::MAX)],
            u32::MAX,
        )];
        assert_eq!(total_len(&pattern), None);
        assert_eq!(
            expand(&pattern),
            Err(ShuffleError::PatternTooLarge { limit: MAX_EXPANDED_KEYS })
        );
    }

    #[test]
    fn pattern_just_over_limit_is_rejected() {
        let over = (MAX_EXPANDED_KEYS / 2 + 1) as u32;
        let pattern = [PatternNode::group(vec![PatternNode::leaf("A", over)], 2)];
        assert_eq!(total_len(&pattern), Some(MAX_EXPANDED_KEYS + 2));
        assert!(matches!(expand(&pattern), Err(ShuffleError::PatternTooLarge { .. })));
    }

    #[test]
    fn invalid_repeat_is_reported_before_size() {
        let pattern = [
            PatternNode::leaf("A", u32::MAX),
            PatternNode::leaf("B", u32::MAX),
            PatternNode::leaf("C", 0),
        ];
        assert!(matches!(expand(&pattern), Err(ShuffleError::InvalidRepeat { .. })));
    }

    // ── Properties ────────────────────────────────────────────────────────────

    fn node_strategy() -> impl Strategy<Value = PatternNode> {
        let leaf = ("[a-c]", 1u32..4).prop_map(|(name, repeat)| PatternNode::leaf(name, repeat));
        leaf.prop_recursive(3, 24, 4, |inner| {
            (prop::collection::vec(inner, 0..4), 1u32..4)
                .prop_map(|(children, repeat)| PatternNode::group(children, repeat))
        })
    }

    proptest! {
        #[test]
        fn expansion_length_is_sum_of_node_lengths(
            nodes in prop::collection::vec(node_strategy(), 0..5)
        ) {
            let keys = expand(&nodes).unwrap();
            let expected: usize = nodes.iter().map(|n| n.expanded_len().unwrap()).sum();
            prop_assert_eq!(keys.len(), expected);
        }

        #[test]
        fn expansion_is_deterministic(nodes in prop::collection::vec(node_strategy(), 0..5)) {
            prop_assert_eq!(expand(&nodes).unwrap(), expand(&nodes).unwrap());
        }
    }
}
