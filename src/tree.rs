use derivative::Derivative;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::table::Code;

/// Index of a node inside a [`CodeTree`].
pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        left: NodeId,
        right: NodeId,
        weight: u64,
    },
}

impl<Symbol> Node<Symbol> {
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }
}

/// Entry of the builder's priority queue.
///
/// Ordered by weight, then by the order entries were pushed, so that equal
/// weights leave the queue first-in first-out.
#[derive(Debug, Clone, Copy, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    weight: u64,
    seq: u64,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: NodeId,
}

/// A full binary tree whose leaves are symbols. The path from the root to a
/// leaf, `0` for left and `1` for right, is that symbol's code.
///
/// Nodes live in an arena; children always precede their parent and the
/// root is the last node built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "RawTree<Symbol>",
    bound(deserialize = "Symbol: Deserialize<'de> + Eq + Hash")
)]
pub struct CodeTree<Symbol> {
    nodes: Vec<Node<Symbol>>,
    root: NodeId,
}

impl<Symbol> CodeTree<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn from_frequencies(frequencies: &FrequencyTable<Symbol>) -> Result<Self> {
        Self::from_weights(frequencies.iter().map(|(s, n)| (s.clone(), n)))
    }

    /// Builds the tree with the greedy Huffman construction: repeatedly
    /// merge the two lightest subtrees, the first one removed becoming the
    /// left child.
    ///
    /// Ties between equal weights go to whichever entry entered the queue
    /// first; leaves enter in the order given.
    pub fn from_weights(pairs: impl IntoIterator<Item = (Symbol, u64)>) -> Result<Self> {
        let mut nodes: Vec<Node<Symbol>> = pairs
            .into_iter()
            .map(|(symbol, weight)| Node::Leaf { symbol, weight })
            .collect();

        if nodes.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        check_unique_symbols(&nodes)?;
        debug!("building code tree from {} symbols", nodes.len());

        let mut queue: BinaryHeap<_> = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| {
                Reverse(Pending {
                    weight: n.weight(),
                    seq: i as u64,
                    node: i,
                })
            })
            .collect();
        let mut seq = nodes.len() as u64;

        while let Some(Reverse(left)) = queue.pop() {
            let Some(Reverse(right)) = queue.pop() else {
                let tree = Self {
                    nodes,
                    root: left.node,
                };
                debug!(
                    "code tree built: {} nodes, weight {}",
                    tree.nodes.len(),
                    tree.weight()
                );
                return Ok(tree);
            };

            let weight = left.weight.saturating_add(right.weight);
            let node = nodes.len();
            trace!(
                "merge #{} ({}) + #{} ({}) -> #{} ({})",
                left.node,
                left.weight,
                right.node,
                right.weight,
                node,
                weight
            );
            nodes.push(Node::Internal {
                left: left.node,
                right: right.node,
                weight,
            });
            queue.push(Reverse(Pending { weight, seq, node }));
            seq += 1;
        }

        // the queue held at least one leaf, so the loop always returns
        Err(Error::EmptyAlphabet)
    }

    /// Code of `symbol`, found by walking the tree.
    pub fn code_of(&self, symbol: &Symbol) -> Result<Code> {
        self.leaves()
            .find(|(s, _)| *s == symbol)
            .map(|(_, code)| code)
            .ok_or(Error::NotFound)
    }
}

impl<Symbol> CodeTree<Symbol> {
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<Symbol>> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node<Symbol>] {
        &self.nodes
    }

    /// Weight of the root, i.e. the sum of all symbol weights.
    pub fn weight(&self) -> u64 {
        self.nodes[self.root].weight()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.symbol().is_some()).count()
    }

    pub fn internal_count(&self) -> usize {
        self.nodes.len() - self.leaf_count()
    }

    /// True if the tree is a lone leaf. Its only code is empty, so it can
    /// encode but never decode.
    pub fn is_single_leaf(&self) -> bool {
        matches!(self.nodes[self.root], Node::Leaf { .. })
    }

    /// Length of the longest code.
    pub fn depth(&self) -> usize {
        self.leaves().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    /// Every leaf with its code, left to right.
    pub fn leaves(&self) -> Leaves<'_, Symbol> {
        Leaves {
            tree: self,
            stack: vec![(self.root, Code::new())],
        }
    }
}

/// Iterator over the leaves of a [`CodeTree`] and their codes.
pub struct Leaves<'a, Symbol> {
    tree: &'a CodeTree<Symbol>,
    stack: Vec<(NodeId, Code)>,
}

impl<'a, Symbol> Iterator for Leaves<'a, Symbol> {
    type Item = (&'a Symbol, Code);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, code)) = self.stack.pop() {
            match &self.tree.nodes[id] {
                Node::Leaf { symbol, .. } => return Some((symbol, code)),
                Node::Internal { left, right, .. } => {
                    // right first so the left subtree is popped next
                    let mut right_code = code.clone();
                    right_code.push(true);
                    self.stack.push((*right, right_code));

                    let mut left_code = code;
                    left_code.push(false);
                    self.stack.push((*left, left_code));
                }
            }
        }
        None
    }
}

fn check_unique_symbols<Symbol: Eq + Hash>(nodes: &[Node<Symbol>]) -> Result<()> {
    let mut seen = HashSet::new();
    for symbol in nodes.iter().filter_map(Node::symbol) {
        if !seen.insert(symbol) {
            return Err(Error::InvalidTree("duplicate symbol".into()));
        }
    }
    Ok(())
}

/// Unchecked shape of a deserialized tree.
#[derive(Deserialize)]
struct RawTree<Symbol> {
    nodes: Vec<Node<Symbol>>,
    root: NodeId,
}

impl<Symbol> TryFrom<RawTree<Symbol>> for CodeTree<Symbol>
where
    Symbol: Eq + Hash,
{
    type Error = Error;

    fn try_from(raw: RawTree<Symbol>) -> Result<Self> {
        let RawTree { nodes, root } = raw;
        if nodes.is_empty() {
            return Err(Error::EmptyAlphabet);
        }
        if root >= nodes.len() {
            return Err(Error::InvalidTree(format!("root #{} out of range", root)));
        }
        check_unique_symbols(&nodes)?;

        // every node must be reached exactly once from the root
        let mut visited = vec![false; nodes.len()];
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if std::mem::replace(&mut visited[id], true) {
                return Err(Error::InvalidTree(format!("node #{} is shared", id)));
            }
            if let Node::Internal {
                left,
                right,
                weight,
            } = &nodes[id]
            {
                for &child in [left, right] {
                    if child >= nodes.len() {
                        return Err(Error::InvalidTree(format!(
                            "child #{} of node #{} out of range",
                            child, id
                        )));
                    }
                    stack.push(child);
                }
                let sum = nodes[*left].weight().saturating_add(nodes[*right].weight());
                if sum != *weight {
                    return Err(Error::InvalidTree(format!(
                        "node #{} weighs {} but its children sum to {}",
                        id, weight, sum
                    )));
                }
            }
        }
        if let Some(id) = visited.iter().position(|v| !v) {
            return Err(Error::InvalidTree(format!("node #{} is unreachable", id)));
        }

        Ok(Self { nodes, root })
    }
}
