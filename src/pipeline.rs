//! Two-pass mining pipeline.
//!
//! Pass 1 streams the input once to intern tokens, count per-item
//! frequencies, and count transactions. Pass 2 re-reads the input, shapes
//! each transaction (drop infrequent items, sort by descending global
//! frequency with ties broken by token order), and inserts it into the
//! FP-tree, which is then mined in parallel. The transaction total used
//! everywhere downstream is the one observed by pass 1.

use crate::config::{MiningOptions, PROGRESS_INTERVAL};
use crate::growth::parallel_fp_growth;
use crate::itemizer::{ItemCounts, Itemizer};
use crate::itemset::ItemsetWithCount;
use crate::reader::TransactionReader;
use crate::rules::{self, Rule};
use crate::stats::MiningStats;
use crate::tree::FpTree;
use crate::writer;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Mining context built by the first pass over the input.
pub struct Miner {
    input: PathBuf,
    itemizer: Itemizer,
    frequency: ItemCounts,
    num_transactions: u64,
    stats: MiningStats,
}

impl Miner {
    /// First pass: counts item frequencies and the transaction total.
    pub fn init(input: &Path) -> Result<Self> {
        let reader = TransactionReader::open(input)?;
        let mut itemizer = Itemizer::new();
        let mut frequency = ItemCounts::new();
        let stats = MiningStats::new();
        let progress = ProgressBar::new_spinner();

        for transaction in reader {
            let tokens = transaction.context("Failed to read input transaction")?;
            stats.inc_transactions();
            let items = itemizer.itemize(tokens.iter().map(String::as_str));
            if items.is_empty() {
                stats.inc_empty_transactions();
            }
            for item in items {
                frequency.add(item, 1);
            }
            if stats.transactions() % PROGRESS_INTERVAL == 0 {
                progress.tick();
            }
        }
        progress.finish_and_clear();

        let num_transactions = stats.transactions();
        info!(
            transactions = num_transactions,
            distinct_items = itemizer.len(),
            "First pass complete"
        );
        Ok(Self {
            input: input.to_path_buf(),
            itemizer,
            frequency,
            num_transactions,
            stats,
        })
    }

    pub fn num_transactions(&self) -> u64 {
        self.num_transactions
    }

    pub fn itemizer(&self) -> &Itemizer {
        &self.itemizer
    }

    pub fn stats(&self) -> &MiningStats {
        &self.stats
    }

    /// The absolute count floor for `min_support`, clamped to at least 1.
    pub fn min_count(&self, min_support: f64) -> u64 {
        ((min_support * self.num_transactions as f64).ceil() as u64).max(1)
    }

    /// Second pass: builds the FP-tree from shaped transactions and mines
    /// every frequent itemset.
    pub fn mine_itemsets(&mut self, min_support: f64) -> Result<Vec<ItemsetWithCount>> {
        let min_count = self.min_count(min_support);
        let reader = TransactionReader::open(&self.input)?;
        let mut tree = FpTree::new();

        for transaction in reader {
            let tokens = transaction.context("Failed to read input transaction")?;
            let mut items = self.itemizer.filter_frequent(
                tokens.iter().map(String::as_str),
                &self.frequency,
                min_count,
            );
            if items.is_empty() {
                continue;
            }
            // Decreasing frequency, ties broken lexicographically by
            // token, so equal-frequency items share paths deterministically.
            items.sort_by(|&a, &b| {
                self.frequency
                    .get(b)
                    .cmp(&self.frequency.get(a))
                    .then_with(|| self.itemizer.cmp_tokens(a, b))
            });
            tree.insert(&items, 1);
        }

        debug!(
            min_count,
            tree_nodes = tree.node_count(),
            "FP-tree built, mining itemsets"
        );
        let itemsets = parallel_fp_growth(&tree, min_count);
        self.stats.add_itemsets(itemsets.len() as u64);
        Ok(itemsets)
    }

    /// Enumerates rules over the mined itemsets meeting the confidence and
    /// lift floors.
    pub fn generate_rules(
        &self,
        itemsets: &[ItemsetWithCount],
        options: &MiningOptions,
    ) -> Vec<Rule> {
        let rules = rules::generate_rules(
            itemsets,
            self.num_transactions,
            options.min_confidence,
            options.min_lift,
        );
        self.stats.add_rules(rules.len() as u64);
        rules
    }

    pub fn write_itemsets(&self, path: &Path, itemsets: &[ItemsetWithCount]) -> Result<()> {
        writer::write_itemsets(path, itemsets, &self.itemizer, self.num_transactions)
    }

    pub fn write_rules(&self, path: &Path, rules: &[Rule]) -> Result<()> {
        writer::write_rules(path, rules, &self.itemizer)
    }
}
