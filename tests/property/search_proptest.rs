//! Property-based tests for search filters

use chrono::NaiveDate;
use proptest::prelude::*;
use receipt_manager::shared::records::{Amount, Receipt, Supplier};
use receipt_manager::shared::search::{filter_receipts, filter_suppliers, suggest_suppliers};

fn receipts() -> impl Strategy<Value = Vec<Receipt>> {
    prop::collection::vec(("[A-Za-z ]{1,12}", "[0-9]{1,6}", prop::option::of("[a-z ]{0,16}")), 0..20)
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (supplier, number, notes))| Receipt {
                    id: format!("r{}", i),
                    supplier,
                    receipt_number: number,
                    amount: Amount::from_cents(100),
                    date: NaiveDate::from_ymd_opt(2025, 3, 9),
                    notes,
                    image: None,
                })
                .collect()
        })
}

fn suppliers() -> impl Strategy<Value = Vec<Supplier>> {
    prop::collection::vec(("[A-Za-z ]{1,12}", "[A-Za-z]{1,8}"), 0..20).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category))| Supplier {
                id: format!("s{}", i),
                name,
                category,
                contact: None,
            })
            .collect()
    })
}

fn ids(receipts: &[&Receipt]) -> Vec<String> {
    receipts.iter().map(|r| r.id.clone()).collect()
}

proptest! {
    #[test]
    fn test_empty_query_keeps_everything_in_order(receipts in receipts(), suppliers in suppliers()) {
        let all = filter_receipts(&receipts, "");
        prop_assert_eq!(all.len(), receipts.len());
        prop_assert!(all.iter().zip(&receipts).all(|(a, b)| std::ptr::eq(*a, b)));

        prop_assert_eq!(filter_suppliers(&suppliers, "").len(), suppliers.len());
        prop_assert_eq!(suggest_suppliers(&suppliers, "").items.len(), suppliers.len());
    }

    #[test]
    fn test_query_case_does_not_matter(receipts in receipts(), query in "[A-Za-z]{1,3}") {
        let lower = ids(&filter_receipts(&receipts, &query.to_lowercase()));
        let upper = ids(&filter_receipts(&receipts, &query.to_uppercase()));
        prop_assert_eq!(lower, upper);
    }

    #[test]
    fn test_filter_is_an_ordered_subset(receipts in receipts(), query in "[a-z0-9]{0,3}") {
        let matched = filter_receipts(&receipts, &query);
        let positions: Vec<usize> = matched
            .iter()
            .map(|m| receipts.iter().position(|r| std::ptr::eq(r, *m)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_supplier_name_always_finds_itself(suppliers in suppliers()) {
        for supplier in &suppliers {
            let found = filter_suppliers(&suppliers, &supplier.name.to_uppercase());
            prop_assert!(found.iter().any(|s| s.id == supplier.id));
        }
    }
}

#[test]
fn test_date_query_matches_iso_date() {
    let receipt = Receipt {
        id: "r1".to_string(),
        supplier: "Lagos Market".to_string(),
        receipt_number: "1042".to_string(),
        amount: Amount::from_cents(1250),
        date: NaiveDate::from_ymd_opt(2025, 3, 9),
        notes: None,
        image: None,
    };
    let receipts = [receipt];
    assert_eq!(filter_receipts(&receipts, "2025-03").len(), 1);
    assert!(filter_receipts(&receipts, "2025-04").is_empty());
}
