//! Case-insensitive substring search and supplier autocomplete.
//!
//! Filters borrow from the full collection and never reorder or mutate it.

use crate::shared::records::{Receipt, Supplier};

pub const NO_SUPPLIERS_HINT: &str = "No suppliers found. Type to add new.";
pub const NO_MATCHES_HINT: &str = "No matches. Press Enter to use this name.";

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Match on supplier, receipt number, date (`YYYY-MM-DD`) or notes
pub fn filter_receipts<'a>(receipts: &'a [Receipt], query: &str) -> Vec<&'a Receipt> {
    let needle = query.to_lowercase();
    receipts
        .iter()
        .filter(|r| {
            contains(&r.supplier, &needle)
                || contains(&r.receipt_number, &needle)
                || r.date
                    .is_some_and(|d| d.format("%Y-%m-%d").to_string().contains(&needle))
                || r.notes.as_deref().is_some_and(|n| contains(n, &needle))
        })
        .collect()
}

/// Match on name, category or contact
pub fn filter_suppliers<'a>(suppliers: &'a [Supplier], query: &str) -> Vec<&'a Supplier> {
    let needle = query.to_lowercase();
    suppliers
        .iter()
        .filter(|s| {
            contains(&s.name, &needle)
                || contains(&s.category, &needle)
                || s.contact.as_deref().is_some_and(|c| contains(c, &needle))
        })
        .collect()
}

/// Autocomplete suggestions for the supplier name field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestions<'a> {
    pub items: Vec<&'a Supplier>,
    /// Shown in place of an empty list
    pub hint: Option<&'static str>,
}

/// Empty input lists every supplier; otherwise match on name or category
pub fn suggest_suppliers<'a>(suppliers: &'a [Supplier], input: &str) -> Suggestions<'a> {
    if input.is_empty() {
        let items: Vec<&Supplier> = suppliers.iter().collect();
        let hint = items.is_empty().then_some(NO_SUPPLIERS_HINT);
        return Suggestions { items, hint };
    }

    let needle = input.to_lowercase();
    let items: Vec<&Supplier> = suppliers
        .iter()
        .filter(|s| contains(&s.name, &needle) || contains(&s.category, &needle))
        .collect();
    let hint = items.is_empty().then_some(NO_MATCHES_HINT);
    Suggestions { items, hint }
}
