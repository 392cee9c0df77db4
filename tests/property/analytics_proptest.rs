//! Property-based tests for totals and supplier ranking

use chrono::NaiveDate;
use proptest::prelude::*;
use receipt_manager::shared::analytics::{
    dashboard, supplier_ranking, total_spending, TOP_SUPPLIERS, UNKNOWN_CATEGORY,
};
use receipt_manager::shared::records::{Amount, Receipt, Supplier};

const NAMES: [&str; 4] = ["Lagos Market", "Fresh Fish Co", "Palm Oil Depot", "Pepper Stall"];

fn receipt(index: usize, supplier: &str, cents: i64) -> Receipt {
    Receipt {
        id: format!("r{}", index),
        supplier: supplier.to_string(),
        receipt_number: index.to_string(),
        amount: Amount::from_cents(cents),
        date: NaiveDate::from_ymd_opt(2025, 1, 5),
        notes: None,
        image: None,
    }
}

fn receipts() -> impl Strategy<Value = Vec<Receipt>> {
    prop::collection::vec((0..NAMES.len(), 0i64..1_000_000), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, cents))| receipt(i, NAMES[name], cents))
            .collect()
    })
}

fn known_suppliers() -> Vec<Supplier> {
    // Pepper Stall deliberately has no record
    NAMES[..3]
        .iter()
        .enumerate()
        .map(|(i, name)| Supplier {
            id: format!("s{}", i),
            name: name.to_string(),
            category: "Produce".to_string(),
            contact: None,
        })
        .collect()
}

proptest! {
    #[test]
    fn test_total_is_sum_of_cents(receipts in receipts()) {
        let expected: i64 = receipts.iter().map(|r| r.amount.cents()).sum();
        prop_assert_eq!(total_spending(&receipts).cents(), expected);
    }

    #[test]
    fn test_add_then_remove_restores_total(receipts in receipts(), cents in 0i64..1_000_000) {
        let before = total_spending(&receipts);

        let mut grown = receipts.clone();
        grown.insert(0, receipt(999, "Lagos Market", cents));
        prop_assert_eq!(total_spending(&grown), before + Amount::from_cents(cents));

        grown.retain(|r| r.id != "r999");
        prop_assert_eq!(total_spending(&grown), before);
    }

    #[test]
    fn test_ranking_is_sorted_and_complete(receipts in receipts()) {
        let ranking = supplier_ranking(&receipts, &known_suppliers());

        for pair in ranking.windows(2) {
            prop_assert!(pair[0].total >= pair[1].total);
        }
        let ranked: i64 = ranking.iter().map(|s| s.total.cents()).sum();
        prop_assert_eq!(ranked, total_spending(&receipts).cents());
        let counted: usize = ranking.iter().map(|s| s.count).sum();
        prop_assert_eq!(counted, receipts.len());
    }

    #[test]
    fn test_ties_keep_first_appearance(order in Just(NAMES.to_vec()).prop_shuffle(), cents in 1i64..10_000) {
        let receipts: Vec<Receipt> = order
            .iter()
            .enumerate()
            .map(|(i, name)| receipt(i, name, cents))
            .collect();

        let ranked: Vec<String> = supplier_ranking(&receipts, &[])
            .into_iter()
            .map(|s| s.name)
            .collect();
        prop_assert_eq!(ranked, order.iter().map(|n| n.to_string()).collect::<Vec<_>>());
    }

    #[test]
    fn test_unmatched_supplier_is_unknown(receipts in receipts()) {
        for stat in supplier_ranking(&receipts, &known_suppliers()) {
            if stat.name == "Pepper Stall" {
                prop_assert_eq!(stat.category.as_str(), UNKNOWN_CATEGORY);
            } else {
                prop_assert_eq!(stat.category.as_str(), "Produce");
            }
        }
    }

    #[test]
    fn test_dashboard_bounds(receipts in receipts()) {
        let summary = dashboard(&receipts, &known_suppliers());
        prop_assert_eq!(summary.receipt_count, receipts.len());
        prop_assert!(summary.top_suppliers.len() <= TOP_SUPPLIERS);
        prop_assert_eq!(summary.supplier_count, 3);
    }
}

#[test]
fn test_two_receipts_total_display() {
    let receipts = vec![receipt(0, "Lagos Market", 1250), receipt(1, "Fresh Fish Co", 725)];
    assert_eq!(total_spending(&receipts).to_string(), "$19.75");
}
