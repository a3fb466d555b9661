//! Arena-allocated FP-tree.
//!
//! Nodes live in a flat `Vec` and refer to each other by index, so the
//! parent pointers and the per-item header lists never form ownership
//! cycles; dropping the tree drops the arena. Child lookup is a linear
//! scan of a small vector, which beats a map at the fan-outs left after
//! frequency sorting.

use crate::itemizer::{Item, ItemCounts};
use rustc_hash::FxHashMap;

pub type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Debug)]
struct FpNode {
    item: Option<Item>,
    count: u64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Prefix tree over frequency-sorted transactions, with per-item header
/// lists threading every node that carries a given item.
#[derive(Debug)]
pub struct FpTree {
    nodes: Vec<FpNode>,
    header: FxHashMap<Item, Vec<NodeId>>,
    counts: ItemCounts,
}

impl Default for FpTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FpTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FpNode {
                item: None,
                count: 0,
                parent: None,
                children: Vec::new(),
            }],
            header: FxHashMap::default(),
            counts: ItemCounts::new(),
        }
    }

    /// Inserts one shaped transaction, weighted by `count`.
    ///
    /// Walks from the root following matching children, creating new nodes
    /// from the first mismatch onward. Every traversed node's count grows
    /// by `count`; the root accumulates the total of all insertions.
    pub fn insert(&mut self, transaction: &[Item], count: u64) {
        self.nodes[ROOT].count += count;
        let mut parent = ROOT;
        for &item in transaction {
            let existing = self.nodes[parent]
                .children
                .iter()
                .copied()
                .find(|&child| self.nodes[child].item == Some(item));
            let node = match existing {
                Some(node) => node,
                None => {
                    let node = self.nodes.len();
                    self.nodes.push(FpNode {
                        item: Some(item),
                        count: 0,
                        parent: Some(parent),
                        children: Vec::new(),
                    });
                    self.nodes[parent].children.push(node);
                    self.header.entry(item).or_default().push(node);
                    node
                }
            };
            self.counts.add(item, count);
            self.nodes[node].count += count;
            parent = node;
        }
    }

    /// Total count inserted into this tree. For a conditional tree this is
    /// the support of the empty prefix in that sub-problem.
    pub fn root_count(&self) -> u64 {
        self.nodes[ROOT].count
    }

    /// Total count carried by `item` across the whole tree.
    pub fn item_count(&self, item: Item) -> u64 {
        self.counts.get(item)
    }

    /// All items present in the tree, in no particular order.
    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.header.keys().copied()
    }

    /// Items whose tree count meets `min_count`.
    pub fn frequent_items(&self, min_count: u64) -> Vec<Item> {
        self.items()
            .filter(|&item| self.item_count(item) >= min_count)
            .collect()
    }

    /// Number of nodes in the arena, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the tree holds no item nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The item sequence from the root down to `node`, excluding `node`
    /// itself. The order matches the main tree's root-to-leaf discipline.
    fn path_to_root_excluding(&self, node: NodeId) -> Vec<Item> {
        let mut path = Vec::new();
        let mut current = self.nodes[node].parent;
        while let Some(id) = current {
            if let Some(item) = self.nodes[id].item {
                path.push(item);
            }
            current = self.nodes[id].parent;
        }
        path.reverse();
        path
    }

    /// Builds the conditional tree for `item`: every prefix path ending at
    /// a node carrying `item`, weighted by that node's count.
    pub fn conditional_tree(&self, item: Item) -> FpTree {
        let mut conditional = FpTree::new();
        if let Some(nodes) = self.header.get(&item) {
            for &node in nodes {
                let path = self.path_to_root_excluding(node);
                conditional.insert(&path, self.nodes[node].count);
            }
        }
        conditional
    }
}
