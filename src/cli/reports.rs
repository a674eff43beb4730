//! Text rendering of the read-only inventory reports.

use crate::domain::{LowStockReport, RecentTransactions, StockReport, ValuationReport};

use super::ui::formatting::{format_money, format_timestamp};
use super::ui::table::{Table, TableColumn, TableRenderer};

const NO_CATEGORIES: &str = "No categories in inventory.";

pub fn render_stock(report: &StockReport) -> Vec<String> {
    if report.is_empty() {
        return vec![NO_CATEGORIES.to_string()];
    }
    let mut lines = Vec::new();
    for category in &report.categories {
        lines.push(format!("{}:", category.name));
        if category.items.is_empty() {
            lines.push("  (no items)".to_string());
            continue;
        }
        let mut table = Table::new(vec![
            TableColumn::left("Item"),
            TableColumn::right("Quantity"),
            TableColumn::right("Price"),
        ]);
        for item in &category.items {
            table.add_row(vec![
                item.name.clone(),
                item.quantity.to_string(),
                format_money(item.price),
            ]);
        }
        lines.extend(TableRenderer::render(&table, 2));
    }
    lines
}

pub fn render_recent(report: &RecentTransactions) -> Vec<String> {
    if report.is_empty() {
        return vec!["No transactions recorded.".to_string()];
    }
    let mut lines = vec![format!(
        "Showing {} of {} transactions, newest first.",
        report.entries.len(),
        report.total_recorded
    )];
    if report.entries.is_empty() {
        return lines;
    }

    let mut table = Table::new(vec![
        TableColumn::left("When"),
        TableColumn::left("User"),
        TableColumn::left("Category"),
        TableColumn::left("Item"),
        TableColumn::right("Qty"),
        TableColumn::right("Left"),
        TableColumn::right("Value"),
    ]);
    for entry in &report.entries {
        table.add_row(vec![
            format_timestamp(entry.timestamp.as_ref()),
            entry.user.clone(),
            entry.category.clone(),
            entry.item.clone(),
            entry.quantity.to_string(),
            entry.remaining_quantity.to_string(),
            format_money(entry.total_value),
        ]);
    }
    lines.extend(TableRenderer::render(&table, 0));
    lines
}

pub fn render_low_stock(report: &LowStockReport) -> Vec<String> {
    if report.is_empty() {
        return vec![format!(
            "No items at or below the low-stock threshold of {}.",
            report.threshold
        )];
    }
    let mut lines = vec![format!(
        "{} item(s) at or below {} units:",
        report.item_count(),
        report.threshold
    )];
    for category in &report.categories {
        lines.push(format!("{}:", category.name));
        lines.extend(
            category
                .items
                .iter()
                .map(|item| format!("  - {}: {} left", item.name, item.quantity)),
        );
    }
    lines
}

pub fn render_valuation(report: &ValuationReport) -> Vec<String> {
    let mut lines = Vec::new();
    if report.is_empty() {
        lines.push(NO_CATEGORIES.to_string());
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Category"),
            TableColumn::right("Items"),
            TableColumn::right("Value"),
        ]);
        for category in &report.categories {
            table.add_row(vec![
                category.name.clone(),
                category.item_count.to_string(),
                format_money(category.subtotal),
            ]);
        }
        lines.extend(TableRenderer::render(&table, 0));
    }
    lines.push(format!("Grand total: {}", format_money(report.grand_total)));
    lines
}
