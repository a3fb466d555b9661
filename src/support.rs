//! Exact support lookup over the mined frequent itemsets.

use crate::itemizer::Item;
use crate::itemset::{cmp_itemsets, ItemsetWithCount};

/// Sorted-array index answering `support(itemset)` by binary search.
///
/// Itemsets are ordered first by length, then element-wise. Every lookup
/// verifies exact equality; querying an itemset that was never recorded is
/// a caller bug (rule generation only ever asks for antecedents,
/// consequents, and their unions, all of which are frequent by
/// anti-monotonicity) and panics.
pub struct SupportIndex {
    itemsets: Vec<(Vec<Item>, f64)>,
}

impl SupportIndex {
    pub fn build(itemsets: &[ItemsetWithCount], num_transactions: u64) -> Self {
        let n = num_transactions as f64;
        let mut indexed: Vec<(Vec<Item>, f64)> = itemsets
            .iter()
            .map(|iwc| (iwc.itemset.clone(), iwc.count as f64 / n))
            .collect();
        indexed.sort_unstable_by(|a, b| cmp_itemsets(&a.0, &b.0));
        Self { itemsets: indexed }
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }

    /// The support of a recorded itemset.
    pub fn support(&self, itemset: &[Item]) -> f64 {
        match self
            .itemsets
            .binary_search_by(|(probe, _)| cmp_itemsets(probe, itemset))
        {
            Ok(idx) => self.itemsets[idx].1,
            Err(_) => panic!("support queried for an itemset that was never recorded"),
        }
    }
}
