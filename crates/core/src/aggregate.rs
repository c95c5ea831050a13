//! Monthly aggregation
//!
//! Reduces raw order records to one row per (month, category) pair,
//! labeled with the supplier that fulfilled the most orders in that
//! group.

use std::collections::BTreeMap;

use crate::errors::{CoreError, Result};
use crate::orders::OrderRecord;

/// The winning supplier for one (month, category) pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AggregatedLabel {
    pub month: u32,
    pub category: String,
    pub supplier: String,
}

/// Reduce order records to per-(month, category) winning suppliers.
///
/// Output rows come back in ascending (month, category) order. Within
/// a group, a tie on order count goes to the first supplier in
/// iteration order, which is the lexicographically smallest name.
pub fn aggregate(records: &[OrderRecord]) -> Result<Vec<AggregatedLabel>> {
    if records.is_empty() {
        return Err(CoreError::EmptyDataset);
    }

    // Count orders per (month, category, supplier); BTreeMap keeps
    // group iteration order stable across runs.
    let mut counts: BTreeMap<(u32, &str), BTreeMap<&str, u64>> = BTreeMap::new();
    for record in records {
        *counts
            .entry((record.month(), record.category.as_str()))
            .or_default()
            .entry(record.supplier.as_str())
            .or_default() += 1;
    }

    let mut labels = Vec::with_capacity(counts.len());
    for ((month, category), suppliers) in counts {
        let mut best: Option<(&str, u64)> = None;
        for (supplier, count) in suppliers {
            let replace = match best {
                None => true,
                Some((_, best_count)) => count > best_count,
            };
            if replace {
                best = Some((supplier, count));
            }
        }

        // Every group holds at least one supplier by construction.
        if let Some((supplier, count)) = best {
            tracing::trace!(
                "month {} category '{}': '{}' wins with {} orders",
                month,
                category,
                supplier,
                count
            );
            labels.push(AggregatedLabel {
                month,
                category: category.to_string(),
                supplier: supplier.to_string(),
            });
        }
    }

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn order(month: u32, day: u32, category: &str, supplier: &str) -> OrderRecord {
        OrderRecord {
            order_date: NaiveDate::from_ymd_opt(2024, month, day).unwrap(),
            category: category.to_string(),
            supplier: supplier.to_string(),
        }
    }

    #[test]
    fn test_highest_count_wins() -> Result<()> {
        let mut records = Vec::new();
        for day in 1..=3 {
            records.push(order(1, day, "Food", "SupplierA"));
        }
        for day in 1..=5 {
            records.push(order(1, day, "Food", "SupplierB"));
        }

        let labels = aggregate(&records)?;

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].month, 1);
        assert_eq!(labels[0].category, "Food");
        assert_eq!(labels[0].supplier, "SupplierB");

        Ok(())
    }

    #[test]
    fn test_tie_goes_to_first_in_iteration_order() -> Result<()> {
        let records = vec![
            order(2, 1, "Food", "Zeta"),
            order(2, 2, "Food", "Alpha"),
        ];

        let labels = aggregate(&records)?;

        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].supplier, "Alpha");

        Ok(())
    }

    #[test]
    fn test_one_label_per_group() -> Result<()> {
        let records = vec![
            order(1, 1, "Food", "SupplierA"),
            order(1, 2, "Toys", "SupplierB"),
            order(2, 3, "Food", "SupplierC"),
        ];

        let labels = aggregate(&records)?;

        assert_eq!(labels.len(), 3);
        // Ascending (month, category) ordering.
        assert_eq!(
            labels
                .iter()
                .map(|l| (l.month, l.category.as_str()))
                .collect::<Vec<_>>(),
            vec![(1, "Food"), (1, "Toys"), (2, "Food")]
        );

        Ok(())
    }

    #[test]
    fn test_empty_input_is_fatal() {
        let err = aggregate(&[]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyDataset));
    }
}
