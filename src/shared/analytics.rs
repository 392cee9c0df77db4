//! Derived views over the in-memory collections.
//!
//! Everything here is recomputed from the collections on demand; nothing is
//! cached, so adding or removing a receipt is reflected on the next call.

use crate::shared::records::{Amount, Receipt, Supplier};
use std::collections::HashMap;

/// Category shown for receipts whose supplier name has no supplier record
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Number of ranked suppliers shown on the dashboard
pub const TOP_SUPPLIERS: usize = 5;

/// Number of recent receipts shown on the dashboard
pub const RECENT_RECEIPTS: usize = 6;

/// Aggregated spending for one supplier name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierStat {
    pub name: String,
    pub category: String,
    pub total: Amount,
    pub count: usize,
}

/// Dashboard summary
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard<'a> {
    pub receipt_count: usize,
    pub total_spending: Amount,
    pub supplier_count: usize,
    pub top_suppliers: Vec<SupplierStat>,
    /// Leading receipts in collection order (the backend returns newest first)
    pub recent_receipts: &'a [Receipt],
}

pub fn total_spending(receipts: &[Receipt]) -> Amount {
    receipts.iter().map(|r| r.amount).sum()
}

/// Group receipts by supplier name and rank the groups by total, highest
/// first. Equal totals keep the order in which the names first appear.
pub fn supplier_ranking(receipts: &[Receipt], suppliers: &[Supplier]) -> Vec<SupplierStat> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut stats: Vec<SupplierStat> = Vec::new();

    for receipt in receipts {
        let slot = *index.entry(receipt.supplier.as_str()).or_insert_with(|| {
            let category = suppliers
                .iter()
                .find(|s| s.name == receipt.supplier)
                .map(|s| s.category.clone())
                .unwrap_or_else(|| UNKNOWN_CATEGORY.to_string());
            stats.push(SupplierStat {
                name: receipt.supplier.clone(),
                category,
                total: Amount::ZERO,
                count: 0,
            });
            stats.len() - 1
        });
        let stat = &mut stats[slot];
        stat.total += receipt.amount;
        stat.count += 1;
    }

    // sort_by is stable
    stats.sort_by(|a, b| b.total.cmp(&a.total));
    stats
}

/// Receipt count per supplier name
pub fn receipt_counts(receipts: &[Receipt]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for receipt in receipts {
        *counts.entry(receipt.supplier.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Whether any receipt refers to this supplier name
pub fn has_receipts(receipts: &[Receipt], supplier_name: &str) -> bool {
    receipts.iter().any(|r| r.supplier == supplier_name)
}

pub fn dashboard<'a>(receipts: &'a [Receipt], suppliers: &[Supplier]) -> Dashboard<'a> {
    let mut top_suppliers = supplier_ranking(receipts, suppliers);
    top_suppliers.truncate(TOP_SUPPLIERS);
    Dashboard {
        receipt_count: receipts.len(),
        total_spending: total_spending(receipts),
        supplier_count: suppliers.len(),
        top_suppliers,
        recent_receipts: &receipts[..receipts.len().min(RECENT_RECEIPTS)],
    }
}
