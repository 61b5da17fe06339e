//! Greedy Huffman tree construction.
//!
//! Leaves start sorted ascending by frequency (ties keep frequency table order). The two
//! lightest nodes are merged, first one on the left, and the parent goes back in front of
//! the first node that is at least as heavy. The exact reinsertion point decides which of
//! several equally short codes each symbol gets, so it must not change.

use log::debug;

use crate::error::{Error, Result};
use crate::tools::freq_count::FrequencyTable;
use std::fmt::Debug;
use std::hash::Hash;

/// A Huffman tree node. Internal nodes own exactly two children, leaves own none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    Leaf {
        symbol: S,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<Node<S>>,
        right: Box<Node<S>>,
    },
}

impl<S> Node<S> {
    pub fn leaf(symbol: S, frequency: u64) -> Self {
        Node::Leaf { symbol, frequency }
    }

    /// Join two subtrees under a new parent carrying their combined frequency.
    pub fn merge(left: Self, right: Self) -> Self {
        Node::Internal {
            frequency: left.frequency().saturating_add(right.frequency()),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    pub fn children(&self) -> Option<(&Node<S>, &Node<S>)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((left, right)),
        }
    }

    /// Edges on the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf { .. } => 0,
            Node::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// Build the Huffman tree for a frequency table and return its root.
///
/// Fails with `InvalidInput` when the table is empty or a symbol has a zero count.
/// A single-symbol table yields a lone leaf as root.
pub fn build_tree<S>(frequencies: &FrequencyTable<S>) -> Result<Node<S>>
where
    S: Eq + Hash + Clone + Debug,
{
    if frequencies.is_empty() {
        return Err(Error::InvalidInput("empty frequency table".to_string()));
    }
    if let Some((symbol, _)) = frequencies.iter().find(|(_, f)| *f == 0) {
        return Err(Error::InvalidInput(format!(
            "symbol {:?} has a frequency of zero",
            symbol
        )));
    }

    let mut tree: Vec<Node<S>> = frequencies
        .iter()
        .map(|(symbol, f)| Node::leaf(symbol.clone(), f))
        .collect();

    // Stable ascending sort, then reverse so the lightest nodes can be popped off the end.
    tree.sort_by_key(|node| node.frequency());
    tree.reverse();

    while tree.len() > 1 {
        let (Some(left), Some(right)) = (tree.pop(), tree.pop()) else {
            break;
        };
        let parent = Node::merge(left, right);
        // Nodes at least as heavy as the parent form the front of the (descending) vec.
        // Landing right behind them puts the parent before all of them in ascending order.
        let at = tree.partition_point(|node| node.frequency() >= parent.frequency());
        tree.insert(at, parent);
    }

    let root = tree
        .pop()
        .ok_or_else(|| Error::InvalidInput("empty frequency table".to_string()))?;
    debug!(
        "Built Huffman tree: {} symbols, total weight {}, depth {}.",
        frequencies.len(),
        frequencies.total(),
        root.depth()
    );
    Ok(root)
}

#[cfg(test)]
mod test {
    use super::{build_tree, Node};
    use crate::error::Error;
    use crate::tools::freq_count::FrequencyTable;

    #[test]
    fn empty_table_test() {
        let table: FrequencyTable<char> = FrequencyTable::new();
        assert!(matches!(build_tree(&table), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn zero_frequency_test() {
        let table: FrequencyTable<char> = [('a', 3), ('b', 0)].into_iter().collect();
        assert!(matches!(build_tree(&table), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn single_symbol_test() {
        let table = FrequencyTable::from_text("AAAAA");
        let root = build_tree(&table).unwrap();
        assert_eq!(root, Node::leaf('A', 5));
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn two_symbol_test() {
        let table: FrequencyTable<char> = [('x', 4), ('y', 1)].into_iter().collect();
        let root = build_tree(&table).unwrap();
        assert_eq!(root, Node::merge(Node::leaf('y', 1), Node::leaf('x', 4)));
    }

    #[test]
    fn parent_goes_before_equal_frequency_test() {
        // a+b = 2 lands in front of c (also 2), so it is merged with c next and
        // d ends up alone on the right of the root.
        let table: FrequencyTable<char> =
            [('a', 1), ('b', 1), ('c', 2), ('d', 3)].into_iter().collect();
        let root = build_tree(&table).unwrap();
        let expected = Node::merge(
            Node::leaf('d', 3),
            Node::merge(
                Node::merge(Node::leaf('a', 1), Node::leaf('b', 1)),
                Node::leaf('c', 2),
            ),
        );
        assert_eq!(root, expected);
    }

    #[test]
    fn huffman_word_shape_test() {
        let root = build_tree(&FrequencyTable::from_text("Huffman")).unwrap();
        let expected = Node::merge(
            Node::merge(
                Node::leaf('n', 1),
                Node::merge(Node::leaf('m', 1), Node::leaf('a', 1)),
            ),
            Node::merge(
                Node::merge(Node::leaf('H', 1), Node::leaf('u', 1)),
                Node::leaf('f', 2),
            ),
        );
        assert_eq!(root, expected);
        assert_eq!(root.frequency(), 7);
        assert_eq!(root.leaf_count(), 6);
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn node_accessors_test() {
        let node = Node::merge(Node::leaf(1_u8, 2), Node::leaf(2_u8, 5));
        assert!(!node.is_leaf());
        assert_eq!(node.symbol(), None);
        let (l, r) = node.children().unwrap();
        assert_eq!(l.symbol(), Some(&1));
        assert_eq!(r.frequency(), 5);
        assert!(l.children().is_none());
    }
}
