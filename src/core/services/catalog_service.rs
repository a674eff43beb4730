//! Lookups over the category -> item -> record structure.

use crate::core::errors::{InventoryError, Result};
use crate::domain::{Category, InventoryDocument, ItemRecord};

/// Read-only, existence-checked access to the catalog.
pub struct CatalogService;

impl CatalogService {
    /// Category names in the order they appear in the document.
    pub fn list_categories(document: &InventoryDocument) -> Vec<String> {
        document
            .catalog()
            .category_names()
            .map(str::to_string)
            .collect()
    }

    /// Item names of `category` in document order.
    pub fn list_items(document: &InventoryDocument, category: &str) -> Result<Vec<String>> {
        let category = Self::category(document, category)?;
        Ok(category.item_names().map(str::to_string).collect())
    }

    pub fn category<'a>(document: &'a InventoryDocument, name: &str) -> Result<&'a Category> {
        document
            .catalog()
            .category(name)
            .ok_or_else(|| InventoryError::CategoryNotFound(name.to_string()))
    }

    pub fn item<'a>(
        document: &'a InventoryDocument,
        category: &str,
        item: &str,
    ) -> Result<&'a ItemRecord> {
        Self::category(document, category)?
            .item(item)
            .ok_or_else(|| InventoryError::ItemNotFound {
                category: category.to_string(),
                item: item.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    fn document() -> InventoryDocument {
        let catalog = Catalog::new()
            .with_category(
                "Fruit",
                Category::new()
                    .with_item("Pear", ItemRecord::new(4, 1.0))
                    .with_item("Apple", ItemRecord::new(10, 2.0)),
            )
            .with_category("Dairy", Category::new());
        InventoryDocument::new(catalog, 5)
    }

    #[test]
    fn lists_categories_in_document_order() {
        assert_eq!(
            CatalogService::list_categories(&document()),
            vec!["Fruit", "Dairy"]
        );
    }

    #[test]
    fn lists_items_in_document_order() {
        let items = CatalogService::list_items(&document(), "Fruit").unwrap();
        assert_eq!(items, vec!["Pear", "Apple"]);
        assert!(CatalogService::list_items(&document(), "Dairy")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn unknown_category_is_not_found() {
        let err = CatalogService::list_items(&document(), "Bakery").unwrap_err();
        assert!(matches!(err, InventoryError::CategoryNotFound(ref name) if name == "Bakery"));
    }

    #[test]
    fn unknown_item_is_not_found() {
        let err = CatalogService::item(&document(), "Fruit", "Kiwi").unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Kiwi"));
    }
}
