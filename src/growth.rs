//! FP-Growth mining over an [`FpTree`].
//!
//! The recursion walks the tree's header items, builds a conditional tree
//! per item, emits the extended prefix with the conditional root count,
//! and descends. Termination holds because a conditional tree never
//! contains the item it was conditioned on.

use crate::itemizer::Item;
use crate::itemset::{insert_sorted, ItemsetWithCount};
use crate::tree::FpTree;
use rayon::prelude::*;

/// Mines every frequent itemset of `tree` extending `prefix`.
///
/// `prefix` must be in canonical ascending form; emitted itemsets are too.
pub fn fp_growth(tree: &FpTree, prefix: &[Item], min_count: u64) -> Vec<ItemsetWithCount> {
    let mut itemsets = Vec::new();
    fp_growth_into(tree, prefix, min_count, &mut itemsets);
    itemsets
}

fn fp_growth_into(
    tree: &FpTree,
    prefix: &[Item],
    min_count: u64,
    itemsets: &mut Vec<ItemsetWithCount>,
) {
    for item in tree.items() {
        if tree.item_count(item) < min_count {
            continue;
        }
        let conditional = tree.conditional_tree(item);
        let itemset = insert_sorted(prefix, item);
        itemsets.push(ItemsetWithCount::new(itemset.clone(), conditional.root_count()));
        fp_growth_into(&conditional, &itemset, min_count, itemsets);
    }
}

/// Data-parallel FP-Growth, partitioned by header item.
///
/// Each frequent item of the main tree becomes one independent task that
/// builds the item's conditional tree and mines it sequentially with
/// prefix `[item]`. Tasks share only the immutable main tree; the result
/// set equals the sequential one, in unspecified order.
pub fn parallel_fp_growth(tree: &FpTree, min_count: u64) -> Vec<ItemsetWithCount> {
    tree.frequent_items(min_count)
        .into_par_iter()
        .flat_map_iter(|item| {
            let conditional = tree.conditional_tree(item);
            let prefix = vec![item];
            let mut itemsets = vec![ItemsetWithCount::new(
                prefix.clone(),
                conditional.root_count(),
            )];
            fp_growth_into(&conditional, &prefix, min_count, &mut itemsets);
            itemsets
        })
        .collect()
}
