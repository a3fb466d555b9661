//! Association rule generation from frequent itemsets.
//!
//! For each frequent itemset the generator grows consequents generation by
//! generation, the way Apriori grows candidates: generation 1 holds all
//! single-item consequents that pass the confidence floor, and generation
//! k+1 merges pairs of surviving size-k consequents sharing a (k-1)-item
//! prefix. Confidence pruning is downward-closed on consequent growth
//! (growing the consequent cannot raise support(S)/support(A)), so a
//! failed consequent is dropped for good. A lift failure only suppresses
//! emission; the consequent stays live as a seed.

use crate::config::RULE_CHUNK_SIZE;
use crate::itemizer::Item;
use crate::itemset::{cmp_itemsets, prefix_match_len, set_minus, union, ItemsetWithCount};
use crate::support::SupportIndex;
use std::mem;

/// An antecedent-implies-consequent rule with its support, confidence,
/// and lift.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub antecedent: Vec<Item>,
    pub consequent: Vec<Item>,
    pub support: f64,
    pub confidence: f64,
    pub lift: f64,
}

fn confidence_and_lift(
    antecedent: &[Item],
    consequent: &[Item],
    ac_support: f64,
    index: &SupportIndex,
) -> (f64, f64) {
    let a_support = index.support(antecedent);
    let confidence = ac_support / a_support;
    let c_support = index.support(consequent);
    (confidence, confidence / c_support)
}

// Rules accumulate in capped chunks so a huge result never forces a
// single monolithic reallocation mid-generation.
fn push_rule(chunks: &mut Vec<Vec<Rule>>, rules: &mut Vec<Rule>, rule: Rule) {
    rules.push(rule);
    if rules.len() == RULE_CHUNK_SIZE {
        chunks.push(mem::replace(rules, Vec::with_capacity(RULE_CHUNK_SIZE)));
    }
}

/// Enumerates every rule over `itemsets` meeting the confidence and lift
/// floors. The order of the returned rules is unspecified.
pub fn generate_rules(
    itemsets: &[ItemsetWithCount],
    num_transactions: u64,
    min_confidence: f64,
    min_lift: f64,
) -> Vec<Rule> {
    let index = SupportIndex::build(itemsets, num_transactions);
    let mut chunks: Vec<Vec<Rule>> = Vec::new();
    let mut rules: Vec<Rule> = Vec::with_capacity(RULE_CHUNK_SIZE);

    for iwc in itemsets {
        if iwc.itemset.len() < 2 {
            continue;
        }
        let support = iwc.count as f64 / num_transactions as f64;

        // Generation 1: all single-item consequents. The itemset is
        // canonical, so the surviving candidates come out sorted.
        let mut candidates: Vec<Vec<Item>> = Vec::new();
        for &item in &iwc.itemset {
            let consequent = vec![item];
            let antecedent = set_minus(&iwc.itemset, &consequent);
            let (confidence, lift) =
                confidence_and_lift(&antecedent, &consequent, support, &index);
            if confidence < min_confidence {
                continue;
            }
            if lift >= min_lift {
                push_rule(
                    &mut chunks,
                    &mut rules,
                    Rule {
                        antecedent,
                        consequent: consequent.clone(),
                        support,
                        confidence,
                        lift,
                    },
                );
            }
            candidates.push(consequent);
        }

        // Subsequent generations merge consequent pairs that differ only
        // in their last element, while the merged consequent still leaves
        // room for a non-empty antecedent.
        let k = iwc.itemset.len();
        while !candidates.is_empty() && candidates[0].len() + 1 < k {
            let mut next_gen: Vec<Vec<Item>> = Vec::new();
            for idx1 in 0..candidates.len() {
                let m = candidates[idx1].len();
                for idx2 in idx1 + 1..candidates.len() {
                    if prefix_match_len(&candidates[idx1], &candidates[idx2]) != m - 1 {
                        // The candidate list is sorted, so once the
                        // (m-1)-prefix stops matching no later pair for
                        // this idx1 can match either.
                        break;
                    }
                    let consequent = union(&candidates[idx1], &candidates[idx2]);
                    let antecedent = set_minus(&iwc.itemset, &consequent);
                    let (confidence, lift) =
                        confidence_and_lift(&antecedent, &consequent, support, &index);
                    if confidence < min_confidence {
                        continue;
                    }
                    next_gen.push(consequent.clone());
                    if lift >= min_lift {
                        push_rule(
                            &mut chunks,
                            &mut rules,
                            Rule {
                                antecedent,
                                consequent,
                                support,
                                confidence,
                                lift,
                            },
                        );
                    }
                }
            }
            next_gen.sort_unstable_by(|a, b| cmp_itemsets(a, b));
            candidates = next_gen;
        }
    }

    if !rules.is_empty() {
        chunks.push(rules);
    }
    chunks.into_iter().flatten().collect()
}
