//! Operations on canonical itemsets.
//!
//! An itemset is a strictly ascending sequence of [`Item`] ids. Every set
//! operation here assumes and preserves that form, so all of them run as
//! linear merges.

use crate::itemizer::Item;
use std::cmp::Ordering;

/// A frequent itemset together with its absolute occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsetWithCount {
    pub itemset: Vec<Item>,
    pub count: u64,
}

impl ItemsetWithCount {
    pub fn new(itemset: Vec<Item>, count: u64) -> Self {
        Self { itemset, count }
    }
}

/// Merges two canonical itemsets into their canonical union.
pub fn union(a: &[Item], b: &[Item]) -> Vec<Item> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut ai, mut bi) = (0, 0);
    while ai < a.len() && bi < b.len() {
        match a[ai].cmp(&b[bi]) {
            Ordering::Less => {
                out.push(a[ai]);
                ai += 1;
            }
            Ordering::Greater => {
                out.push(b[bi]);
                bi += 1;
            }
            Ordering::Equal => {
                out.push(a[ai]);
                ai += 1;
                bi += 1;
            }
        }
    }
    out.extend_from_slice(&a[ai..]);
    out.extend_from_slice(&b[bi..]);
    out
}

/// Returns the items of `a` that are not in `b`.
///
/// Panics if `b` contains an item missing from `a`; removal of a
/// non-member indicates a caller bug.
pub fn set_minus(a: &[Item], b: &[Item]) -> Vec<Item> {
    let mut out = Vec::with_capacity(a.len());
    let (mut ai, mut bi) = (0, 0);
    while ai < a.len() && bi < b.len() {
        match a[ai].cmp(&b[bi]) {
            Ordering::Less => {
                out.push(a[ai]);
                ai += 1;
            }
            Ordering::Greater => {
                panic!("tried to remove item {} that is not in the set", b[bi].id());
            }
            Ordering::Equal => {
                ai += 1;
                bi += 1;
            }
        }
    }
    assert!(bi == b.len(), "tried to remove items that are not in the set");
    out.extend_from_slice(&a[ai..]);
    out
}

/// Inserts `item` into a canonical itemset, returning a new itemset.
pub fn insert_sorted(itemset: &[Item], item: Item) -> Vec<Item> {
    let mut out = Vec::with_capacity(itemset.len() + 1);
    let split = itemset.partition_point(|&x| x < item);
    out.extend_from_slice(&itemset[..split]);
    out.push(item);
    out.extend_from_slice(&itemset[split..]);
    out
}

/// Total order over canonical itemsets: shorter first, then element-wise.
pub fn cmp_itemsets(a: &[Item], b: &[Item]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Length of the common prefix of two equal-length itemsets.
pub fn prefix_match_len(a: &[Item], b: &[Item]) -> usize {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
