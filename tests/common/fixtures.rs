//! Record fixtures

use chrono::NaiveDate;
use receipt_manager::shared::records::{Amount, Receipt, Supplier, User};
use serde_json::{json, Value};

pub fn receipt(id: &str, supplier: &str, cents: i64) -> Receipt {
    Receipt {
        id: id.to_string(),
        supplier: supplier.to_string(),
        receipt_number: format!("R-{}", id),
        amount: Amount::from_cents(cents),
        date: NaiveDate::from_ymd_opt(2025, 1, 5),
        notes: None,
        image: None,
    }
}

pub fn supplier(id: &str, name: &str, category: &str) -> Supplier {
    Supplier {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        contact: None,
    }
}

pub fn user(role: &str) -> User {
    User {
        email: "staff@potofjollof.test".to_string(),
        name: "Staff".to_string(),
        role: role.to_string(),
        id: Some("u-1".to_string()),
    }
}

/// `login` answer carrying `user`
pub fn login_body(user: &User) -> Value {
    json!({ "user": user })
}

/// Receipt row as the script host returns it
pub fn receipt_row(id: &str, supplier: &str, amount: f64) -> Value {
    json!({
        "id": id,
        "supplier": supplier,
        "receiptNumber": format!("R-{}", id),
        "amount": amount,
        "date": "2025-01-05T12:00:00.000Z",
        "notes": "",
        "image": ""
    })
}

pub fn supplier_row(id: &str, name: &str, category: &str) -> Value {
    json!({ "id": id, "name": name, "category": category, "contact": "" })
}
