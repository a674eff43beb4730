//! Checks applied after a document parses but before it is accepted.

use tracing::warn;

use crate::core::errors::{InventoryError, Result};
use crate::domain::InventoryDocument;

/// Lists every constraint violation found in `document`, each prefixed with
/// the JSON path of the offending value.
pub fn document_issues(document: &InventoryDocument) -> Vec<String> {
    let mut issues = Vec::new();

    for (category_name, category) in document.catalog().iter() {
        if category_name.trim().is_empty() {
            issues.push("categories: category name must not be blank".to_string());
        }
        for (item_name, record) in category.iter() {
            if item_name.trim().is_empty() {
                issues.push(format!(
                    "categories.{category_name}: item name must not be blank"
                ));
            }
            if !is_valid_amount(record.price) {
                issues.push(format!(
                    "categories.{category_name}.{item_name}.price: expected a non-negative number, found {}",
                    record.price
                ));
            }
        }
    }

    for (index, txn) in document.transactions().iter().enumerate() {
        if txn.quantity == 0 {
            issues.push(format!("transactions[{index}].quantity: must be positive"));
        }
        if !is_valid_amount(txn.price) {
            issues.push(format!(
                "transactions[{index}].price: expected a non-negative number, found {}",
                txn.price
            ));
        }
        if !is_valid_amount(txn.total_value) {
            issues.push(format!(
                "transactions[{index}].total_value: expected a non-negative number, found {}",
                txn.total_value
            ));
        }
    }

    issues
}

/// Rejects the document with [`InventoryError::MalformedData`] if any issue is found.
pub fn validate_document(document: &InventoryDocument) -> Result<()> {
    let issues = document_issues(document);
    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        warn!(%issue, "inventory document failed validation");
    }
    Err(InventoryError::MalformedData(issues.join("; ")))
}

fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> InventoryDocument {
        serde_json::from_str(raw).expect("structurally valid document")
    }

    #[test]
    fn clean_document_passes() {
        let doc = parse(
            r#"{"categories": {"Fruit": {"Apple": {"quantity": 10, "price": 2.0}}},
                "transactions": [], "low_stock_threshold": 5}"#,
        );
        assert!(validate_document(&doc).is_ok());
    }

    #[test]
    fn negative_price_names_its_path() {
        let doc = parse(
            r#"{"categories": {"Fruit": {"Apple": {"quantity": 10, "price": -2.0}}},
                "low_stock_threshold": 5}"#,
        );
        let err = validate_document(&doc).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, InventoryError::MalformedData(_)));
        assert!(message.contains("categories.Fruit.Apple.price"), "{message}");
    }

    #[test]
    fn zero_quantity_transaction_is_reported() {
        let doc = parse(
            r#"{"categories": {}, "low_stock_threshold": 0, "transactions": [
                {"user": "x", "action": "removed", "category": "A", "item": "b",
                 "quantity": 0, "remaining_quantity": 1, "price": 1.0, "total_value": 0.0}]}"#,
        );
        let issues = document_issues(&doc);
        assert_eq!(issues, vec!["transactions[0].quantity: must be positive"]);
    }

    #[test]
    fn blank_names_are_reported() {
        let doc = parse(
            r#"{"categories": {" ": {"": {"quantity": 1, "price": 1.0}}}, "low_stock_threshold": 0}"#,
        );
        assert_eq!(document_issues(&doc).len(), 2);
    }
}
