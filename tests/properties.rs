//! Property-based tests for the mining core.
//!
//! Random small baskets are shaped exactly as the pipeline shapes them
//! (dedup, frequency floor, sort by descending frequency with ascending
//! id tie-break) and mined; the results are checked against a brute-force
//! subset enumeration, so completeness, counts, and threshold obedience
//! are all covered by construction.

use arbor::growth::{fp_growth, parallel_fp_growth};
use arbor::itemizer::Item;
use arbor::itemset::ItemsetWithCount;
use arbor::rules::generate_rules;
use arbor::tree::FpTree;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap, HashSet};

fn to_items(ids: &[u32]) -> Vec<Item> {
    ids.iter().map(|&id| Item::new(id)).collect()
}

fn dedup_first_occurrence(transaction: &[u32]) -> Vec<u32> {
    let mut out = Vec::new();
    for &id in transaction {
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

/// Shapes transactions the way the pipeline does and builds the tree.
fn build_tree(transactions: &[Vec<u32>], min_count: u64) -> FpTree {
    let mut frequency: HashMap<u32, u64> = HashMap::new();
    for transaction in transactions {
        for id in dedup_first_occurrence(transaction) {
            *frequency.entry(id).or_default() += 1;
        }
    }

    let mut tree = FpTree::new();
    for transaction in transactions {
        let mut ids = dedup_first_occurrence(transaction);
        ids.retain(|id| frequency[id] >= min_count);
        ids.sort_by(|a, b| frequency[b].cmp(&frequency[a]).then(a.cmp(b)));
        if !ids.is_empty() {
            tree.insert(&to_items(&ids), 1);
        }
    }
    tree
}

/// Occurrences of `itemset` across the raw transactions.
fn count_of(transactions: &[Vec<u32>], itemset: &[u32]) -> u64 {
    transactions
        .iter()
        .filter(|transaction| {
            let present: BTreeSet<u32> = transaction.iter().copied().collect();
            itemset.iter().all(|id| present.contains(id))
        })
        .count() as u64
}

/// Every frequent itemset by exhaustive subset enumeration.
fn brute_force(transactions: &[Vec<u32>], min_count: u64) -> HashSet<(Vec<u32>, u64)> {
    let universe: Vec<u32> = transactions
        .iter()
        .flatten()
        .copied()
        .collect::<BTreeSet<u32>>()
        .into_iter()
        .collect();

    let mut frequent = HashSet::new();
    for mask in 1u32..(1 << universe.len()) {
        let subset: Vec<u32> = universe
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, &id)| id)
            .collect();
        let count = count_of(transactions, &subset);
        if count >= min_count {
            frequent.insert((subset, count));
        }
    }
    frequent
}

fn as_id_set(itemsets: &[ItemsetWithCount]) -> HashSet<(Vec<u32>, u64)> {
    itemsets
        .iter()
        .map(|iwc| {
            (
                iwc.itemset.iter().map(|item| item.id()).collect(),
                iwc.count,
            )
        })
        .collect()
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u32>>> {
    prop::collection::vec(prop::collection::vec(1u32..=6, 1..=6), 1..=14)
}

proptest! {
    /// The miner finds exactly the brute-force frequent itemsets, with
    /// the correct counts.
    #[test]
    fn mining_matches_brute_force(
        transactions in transactions_strategy(),
        min_count in 1u64..=3,
    ) {
        let tree = build_tree(&transactions, min_count);
        let mined = fp_growth(&tree, &[], min_count);
        prop_assert_eq!(as_id_set(&mined), brute_force(&transactions, min_count));
    }

    /// Parallel mining produces the same set as sequential mining.
    #[test]
    fn parallel_agrees_with_sequential(
        transactions in transactions_strategy(),
        min_count in 1u64..=3,
    ) {
        let tree = build_tree(&transactions, min_count);
        let sequential = as_id_set(&fp_growth(&tree, &[], min_count));
        let parallel = as_id_set(&parallel_fp_growth(&tree, min_count));
        prop_assert_eq!(sequential, parallel);
    }

    /// Every mined itemset is strictly ascending.
    #[test]
    fn mined_itemsets_are_canonical(
        transactions in transactions_strategy(),
        min_count in 1u64..=3,
    ) {
        let tree = build_tree(&transactions, min_count);
        for iwc in fp_growth(&tree, &[], min_count) {
            prop_assert!(iwc.itemset.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Support never grows when an itemset is extended: for mined S and
    /// mined S' with S' a subset of S, count(S') >= count(S).
    #[test]
    fn support_is_monotone_under_subsets(
        transactions in transactions_strategy(),
        min_count in 1u64..=3,
    ) {
        let tree = build_tree(&transactions, min_count);
        let mined = fp_growth(&tree, &[], min_count);
        for a in &mined {
            for b in &mined {
                let a_ids: BTreeSet<Item> = a.itemset.iter().copied().collect();
                let b_ids: BTreeSet<Item> = b.itemset.iter().copied().collect();
                if a_ids.is_subset(&b_ids) {
                    prop_assert!(a.count >= b.count);
                }
            }
        }
    }

    /// Every generated rule partitions a frequent itemset and carries
    /// exact support, confidence, and lift arithmetic.
    #[test]
    fn rule_arithmetic_holds(
        transactions in transactions_strategy(),
        min_count in 1u64..=2,
        min_confidence in 0.0..1.0f64,
        min_lift in 0.5..1.5f64,
    ) {
        let n = transactions.len() as u64;
        let tree = build_tree(&transactions, min_count);
        let mined = fp_growth(&tree, &[], min_count);
        let rules = generate_rules(&mined, n, min_confidence, min_lift);

        for rule in &rules {
            let antecedent: Vec<u32> = rule.antecedent.iter().map(|i| i.id()).collect();
            let consequent: Vec<u32> = rule.consequent.iter().map(|i| i.id()).collect();
            prop_assert!(!antecedent.is_empty());
            prop_assert!(!consequent.is_empty());
            prop_assert!(antecedent.iter().all(|id| !consequent.contains(id)));

            let mut union: Vec<u32> = antecedent.iter().chain(&consequent).copied().collect();
            union.sort_unstable();
            let union_support = count_of(&transactions, &union) as f64 / n as f64;
            let antecedent_support = count_of(&transactions, &antecedent) as f64 / n as f64;
            let consequent_support = count_of(&transactions, &consequent) as f64 / n as f64;

            prop_assert!((rule.support - union_support).abs() <= 1e-9);
            prop_assert!((rule.confidence - union_support / antecedent_support).abs() <= 1e-9);
            prop_assert!((rule.lift - rule.confidence / consequent_support).abs() <= 1e-9);
            prop_assert!(rule.confidence >= min_confidence);
            prop_assert!(rule.lift >= min_lift);
        }
    }

    /// Mining and rule generation are deterministic across repeat runs.
    #[test]
    fn repeat_runs_agree(
        transactions in transactions_strategy(),
        min_count in 1u64..=3,
    ) {
        let tree = build_tree(&transactions, min_count);
        let first = fp_growth(&tree, &[], min_count);
        let second = fp_growth(&tree, &[], min_count);
        prop_assert_eq!(as_id_set(&first), as_id_set(&second));

        let n = transactions.len() as u64;
        let rules_first = generate_rules(&first, n, 0.3, 1.0);
        let rules_second = generate_rules(&second, n, 0.3, 1.0);
        prop_assert_eq!(rules_first.len(), rules_second.len());
    }
}
