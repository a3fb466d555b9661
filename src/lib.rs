//! Arbor: association rule mining over transaction baskets via FP-Growth
//!
//! This crate provides a two-pass pipeline that turns a CSV-like file of
//! transactions (one basket of comma-separated tokens per line) into
//! frequent itemsets and association rules:
//!
//! 1. **Counting Pass** -- Stream through the input once to intern tokens
//!    as dense integer items, count per-item frequencies, and count
//!    transactions
//! 2. **Mining Pass** -- Re-read the input, drop infrequent items, sort
//!    each transaction by descending global frequency, insert it into an
//!    FP-tree, and mine every frequent itemset from the tree
//! 3. **Rule Generation** -- Grow rule consequents generation by
//!    generation over the mined itemsets, pruning on confidence and
//!    filtering on lift; emit CSV rule and itemset files
//!
//! # Architecture
//!
//! The pipeline is designed for performance and memory efficiency:
//!
//! - **Arena-allocated FP-tree** -- Nodes live in a flat vector addressed
//!   by index; parent links, child lists, and header lists never form
//!   ownership cycles
//! - **Parallel mining** -- The search is partitioned by header item and
//!   runs one rayon task per frequent item of the main tree
//! - **FxHashMap** instead of SipHash for trusted input (token interning
//!   and header lists)
//! - **Sorted support index** -- Rule generation resolves every support
//!   query with a binary search over the canonical itemsets
//! - **Chunked rule output** -- Rules accumulate in capped chunks so an
//!   unknown-size result never forces monolithic reallocation
//!
//! # Key Modules
//!
//! - [`reader`] -- Streaming transaction reader
//! - [`itemizer`] -- Token interning and dense frequency counts
//! - [`itemset`] -- Canonical itemset set operations
//! - [`tree`] -- Arena-allocated FP-tree with per-item header lists
//! - [`growth`] -- Sequential and data-parallel FP-Growth
//! - [`support`] -- Exact support lookup over mined itemsets
//! - [`rules`] -- Generation-wise association rule enumeration
//! - [`pipeline`] -- Two-pass orchestration ([`pipeline::Miner`])
//! - [`writer`] -- Legacy-compatible CSV output
//! - [`config`] -- Thresholds, validation, and tuning constants
//! - [`stats`] -- Atomic counters for the completion summary
//!
//! # Example Usage
//!
//! ```bash
//! arbor --input baskets.csv --output rules.csv \
//!       --min-support 0.05 --min-confidence 0.05 --min-lift 1.5 \
//!       --itemsets itemsets.csv
//! ```

pub mod config;
pub mod growth;
pub mod itemizer;
pub mod itemset;
pub mod pipeline;
pub mod reader;
pub mod rules;
pub mod stats;
pub mod support;
pub mod tree;
pub mod writer;
