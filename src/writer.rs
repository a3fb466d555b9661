//! CSV output for frequent itemsets and rules.
//!
//! Both formats are legacy-compatible down to the byte: item tokens are
//! joined by single spaces, the itemsets file keeps a leading space before
//! the support value, the rules file separates the sides with ` => `, and
//! every ratio is printed with six fractional digits. Quoting is disabled
//! on the writers so the fields land exactly as formatted.

use crate::itemizer::{Item, Itemizer};
use crate::itemset::ItemsetWithCount;
use crate::rules::Rule;
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn join_tokens(items: &[Item], itemizer: &Itemizer) -> String {
    let mut out = String::new();
    for (i, &item) in items.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(itemizer.token(item));
    }
    out
}

/// Writes `Itemset,Support` records, one frequent itemset per line.
pub fn write_itemsets(
    path: &Path,
    itemsets: &[ItemsetWithCount],
    itemizer: &Itemizer,
    num_transactions: u64,
) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create itemsets file: {}", path.display()))?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .flexible(true)
        .from_writer(BufWriter::new(file));
    writer.write_record(["Itemset", "Support"])?;

    let n = num_transactions as f64;
    for iwc in itemsets {
        let mut record = join_tokens(&iwc.itemset, itemizer);
        // The space before the support value is part of the format.
        record.push(' ');
        record.push_str(&format!("{:.6}", iwc.count as f64 / n));
        writer.write_record([record.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `Antecedent => Consequent,Confidence,Lift,Support` records.
pub fn write_rules(path: &Path, rules: &[Rule], itemizer: &Itemizer) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create rules file: {}", path.display()))?;
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .from_writer(BufWriter::new(file));
    writer.write_record(["Antecedent => Consequent", "Confidence", "Lift", "Support"])?;

    for rule in rules {
        writer.write_record([
            format!(
                "{} => {}",
                join_tokens(&rule.antecedent, itemizer),
                join_tokens(&rule.consequent, itemizer)
            ),
            format!("{:.6}", rule.confidence),
            format!("{:.6}", rule.lift),
            format!("{:.6}", rule.support),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
