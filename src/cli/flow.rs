//! Menu state machine driving an [`InventoryStore`].

use tracing::debug;

use crate::core::InventoryStore;

use super::core::{CommandError, LoopControl};
use super::output::MessageKind;
use super::reports;
use super::selection::{parse_quantity, parse_selection, QuantityInput, Selection};
use super::ui::formatting::format_money;
use super::ui::menu_renderer::MenuView;

const MAIN_OPTIONS: [&str; 3] = ["Browse categories", "Reports", "Exit"];
const REPORT_OPTIONS: [&str; 5] = [
    "Stock levels",
    "Recent transactions",
    "Low-stock items",
    "Total inventory value",
    "Back",
];

/// Screen currently shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    CategoryPick,
    ItemPick { category: String },
    QuantityPick { category: String, item: String },
    ReportsMenu,
}

/// A line of feedback produced by a step, printed by the shell.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    fn new(kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Result of a successful step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub control: LoopControl,
    pub messages: Vec<Message>,
}

impl StepOutcome {
    fn proceed() -> Self {
        Self {
            control: LoopControl::Continue,
            messages: Vec::new(),
        }
    }

    fn exit() -> Self {
        Self {
            control: LoopControl::Exit,
            messages: Vec::new(),
        }
    }

    fn with(mut self, kind: MessageKind, text: impl Into<String>) -> Self {
        self.messages.push(Message::new(kind, text));
        self
    }

    fn with_lines(mut self, lines: Vec<String>) -> Self {
        self.messages.extend(
            lines
                .into_iter()
                .map(|line| Message::new(MessageKind::Plain, line)),
        );
        self
    }
}

pub struct Navigator {
    screen: Screen,
    recent_limit: usize,
}

impl Navigator {
    pub fn new(recent_limit: usize) -> Self {
        Self {
            screen: Screen::MainMenu,
            recent_limit,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Returns to the main menu.
    pub fn reset(&mut self) {
        self.go(Screen::MainMenu);
    }

    fn go(&mut self, screen: Screen) {
        debug!(from = ?self.screen, to = ?screen, "screen change");
        self.screen = screen;
    }

    /// Describes the current screen.
    pub fn render(&self, store: &InventoryStore) -> Result<MenuView, CommandError> {
        let view = match &self.screen {
            Screen::MainMenu => {
                MenuView::new("Main menu", "Choose an option").with_numbered(MAIN_OPTIONS)
            }
            Screen::CategoryPick => {
                let categories = store.list_categories()?;
                let view = MenuView::new("Categories", "Select a category");
                let view = if categories.is_empty() {
                    view.with_context("No categories available.")
                } else {
                    view.with_numbered(categories)
                };
                view.with_item("0", "Back")
            }
            Screen::ItemPick { category } => {
                let names = store.list_items(category)?;
                let mut labels = Vec::with_capacity(names.len());
                for name in names {
                    let record = store.item(category, &name)?;
                    labels.push(format!(
                        "{name} ({} in stock @ {})",
                        record.quantity,
                        format_money(record.price)
                    ));
                }
                let view = MenuView::new(category.clone(), "Select an item");
                let view = if labels.is_empty() {
                    view.with_context("No items in this category.")
                } else {
                    view.with_numbered(labels)
                };
                view.with_item("0", "Back")
            }
            Screen::QuantityPick { category, item } => {
                let record = store.item(category, item)?;
                MenuView::new(format!("{item} ({category})"), "Quantity to remove")
                    .with_context(format!("In stock: {}", record.quantity))
                    .with_context(format!("Unit price: {}", format_money(record.price)))
                    .with_item("0", "Back")
            }
            Screen::ReportsMenu => {
                MenuView::new("Reports", "Choose a report").with_numbered(REPORT_OPTIONS)
            }
        };
        Ok(view)
    }

    /// Applies one answer to the current screen.
    ///
    /// Rejected answers return an error and leave the screen unchanged.
    pub fn handle(
        &mut self,
        store: &mut InventoryStore,
        input: &str,
    ) -> Result<StepOutcome, CommandError> {
        match self.screen.clone() {
            Screen::MainMenu => self.handle_main(input),
            Screen::CategoryPick => self.handle_category(store, input),
            Screen::ItemPick { category } => self.handle_item(store, category, input),
            Screen::QuantityPick { category, item } => {
                self.handle_quantity(store, category, item, input)
            }
            Screen::ReportsMenu => self.handle_report(store, input),
        }
    }

    fn handle_main(&mut self, input: &str) -> Result<StepOutcome, CommandError> {
        let trimmed = input.trim();
        if ["q", "quit", "exit"]
            .iter()
            .any(|word| trimmed.eq_ignore_ascii_case(word))
        {
            return Ok(StepOutcome::exit());
        }
        match select(input, &owned(&MAIN_OPTIONS), false)? {
            Some(0) => self.go(Screen::CategoryPick),
            Some(1) => self.go(Screen::ReportsMenu),
            _ => return Ok(StepOutcome::exit()),
        }
        Ok(StepOutcome::proceed())
    }

    fn handle_category(
        &mut self,
        store: &InventoryStore,
        input: &str,
    ) -> Result<StepOutcome, CommandError> {
        let categories = store.list_categories()?;
        match select(input, &categories, true)? {
            Some(index) => self.go(Screen::ItemPick {
                category: categories[index].clone(),
            }),
            None => self.go(Screen::MainMenu),
        }
        Ok(StepOutcome::proceed())
    }

    fn handle_item(
        &mut self,
        store: &InventoryStore,
        category: String,
        input: &str,
    ) -> Result<StepOutcome, CommandError> {
        let items = store.list_items(&category)?;
        match select(input, &items, true)? {
            Some(index) => self.go(Screen::QuantityPick {
                category,
                item: items[index].clone(),
            }),
            None => self.go(Screen::CategoryPick),
        }
        Ok(StepOutcome::proceed())
    }

    fn handle_quantity(
        &mut self,
        store: &mut InventoryStore,
        category: String,
        item: String,
        input: &str,
    ) -> Result<StepOutcome, CommandError> {
        let quantity = match parse_quantity(input) {
            QuantityInput::Amount(quantity) => quantity,
            QuantityInput::Back => {
                self.go(Screen::ItemPick { category });
                return Ok(StepOutcome::proceed());
            }
            QuantityInput::Invalid(message) => return Err(CommandError::InvalidInput(message)),
        };

        let transaction = store.remove_item(&category, &item, quantity)?;
        let threshold = store.low_stock_threshold()?;

        let mut outcome = StepOutcome::proceed().with(
            MessageKind::Success,
            format!(
                "Removed {} x {} from {} (value {}). {} left.",
                transaction.quantity,
                transaction.item,
                transaction.category,
                format_money(transaction.total_value),
                transaction.remaining_quantity
            ),
        );
        if transaction.remaining_quantity <= threshold {
            outcome = outcome.with(
                MessageKind::Warning,
                format!(
                    "Low stock: only {} {} left (threshold {}).",
                    transaction.remaining_quantity, transaction.item, threshold
                ),
            );
        }
        self.go(Screen::ItemPick { category });
        Ok(outcome)
    }

    fn handle_report(
        &mut self,
        store: &InventoryStore,
        input: &str,
    ) -> Result<StepOutcome, CommandError> {
        let choice = match select(input, &owned(&REPORT_OPTIONS), true)? {
            Some(index) if index + 1 < REPORT_OPTIONS.len() => index,
            _ => {
                self.go(Screen::MainMenu);
                return Ok(StepOutcome::proceed());
            }
        };

        let lines = match choice {
            0 => reports::render_stock(&store.current_stock()?),
            1 => reports::render_recent(&store.recent_transactions(self.recent_limit)?),
            2 => {
                let threshold = store.low_stock_threshold()?;
                reports::render_low_stock(&store.low_stock_items(threshold)?)
            }
            _ => reports::render_valuation(&store.total_inventory_value()?),
        };
        Ok(StepOutcome::proceed()
            .with(MessageKind::Section, REPORT_OPTIONS[choice])
            .with_lines(lines))
    }
}

fn owned(options: &[&str]) -> Vec<String> {
    options.iter().map(|option| option.to_string()).collect()
}

/// `Some(index)` for a pick, `None` for back.
fn select(input: &str, options: &[String], allow_back: bool) -> Result<Option<usize>, CommandError> {
    match parse_selection(input, options, allow_back) {
        Selection::Index(index) => Ok(Some(index)),
        Selection::Back => Ok(None),
        Selection::Invalid(message) => Err(CommandError::InvalidInput(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::InventoryError;
    use crate::domain::{Catalog, Category, InventoryDocument, ItemRecord};
    use crate::storage::{save_document_to_path, JsonStorage};
    use tempfile::TempDir;

    fn fruit_store() -> (TempDir, InventoryStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("category.json");
        let catalog = Catalog::new().with_category(
            "Fruit",
            Category::new()
                .with_item("Apple", ItemRecord::new(10, 2.0))
                .with_item("Pear", ItemRecord::new(4, 1.5)),
        );
        save_document_to_path(&InventoryDocument::new(catalog, 5), &path).unwrap();
        let store = InventoryStore::open(Box::new(JsonStorage::without_backups(&path)), "sam")
            .unwrap();
        (dir, store)
    }

    fn step(nav: &mut Navigator, store: &mut InventoryStore, input: &str) -> StepOutcome {
        nav.handle(store, input).unwrap()
    }

    #[test]
    fn walks_down_to_quantity_and_back_up() {
        let (_dir, mut store) = fruit_store();
        let mut nav = Navigator::new(10);
        step(&mut nav, &mut store, "1");
        assert_eq!(nav.screen(), &Screen::CategoryPick);
        step(&mut nav, &mut store, "fruit");
        step(&mut nav, &mut store, "2");
        assert_eq!(
            nav.screen(),
            &Screen::QuantityPick {
                category: "Fruit".into(),
                item: "Pear".into()
            }
        );
        step(&mut nav, &mut store, "back");
        step(&mut nav, &mut store, "0");
        step(&mut nav, &mut store, "0");
        assert_eq!(nav.screen(), &Screen::MainMenu);
    }

    #[test]
    fn removal_returns_to_item_list_and_warns_when_low() {
        let (_dir, mut store) = fruit_store();
        let mut nav = Navigator::new(10);
        for input in ["1", "1", "1"] {
            step(&mut nav, &mut store, input);
        }
        let outcome = step(&mut nav, &mut store, "6");
        assert_eq!(
            nav.screen(),
            &Screen::ItemPick {
                category: "Fruit".into()
            }
        );
        assert_eq!(outcome.messages[0].kind, MessageKind::Success);
        assert!(outcome.messages[0].text.contains("4 left"));
        assert_eq!(outcome.messages[1].kind, MessageKind::Warning);
        assert_eq!(store.item("Fruit", "Apple").unwrap().quantity, 4);
    }

    #[test]
    fn insufficient_stock_stays_on_quantity_prompt() {
        let (_dir, mut store) = fruit_store();
        let mut nav = Navigator::new(10);
        for input in ["1", "1", "1"] {
            step(&mut nav, &mut store, input);
        }
        let err = nav.handle(&mut store, "100").unwrap_err();
        assert!(matches!(
            err,
            CommandError::Core(InventoryError::InsufficientStock { available: 10, .. })
        ));
        assert!(matches!(nav.screen(), Screen::QuantityPick { .. }));
        assert!(store.document().unwrap().transactions().is_empty());
    }

    #[test]
    fn invalid_answers_keep_the_screen() {
        let (_dir, mut store) = fruit_store();
        let mut nav = Navigator::new(10);
        step(&mut nav, &mut store, "1");
        let err = nav.handle(&mut store, "9").unwrap_err();
        assert!(matches!(err, CommandError::InvalidInput(_)));
        assert_eq!(nav.screen(), &Screen::CategoryPick);
    }

    #[test]
    fn reports_render_and_stay_in_menu() {
        let (_dir, mut store) = fruit_store();
        let mut nav = Navigator::new(10);
        step(&mut nav, &mut store, "2");
        let outcome = step(&mut nav, &mut store, "4");
        assert_eq!(nav.screen(), &Screen::ReportsMenu);
        assert_eq!(outcome.messages[0].kind, MessageKind::Section);
        assert!(outcome
            .messages
            .iter()
            .any(|message| message.text == "Grand total: 26.00"));

        step(&mut nav, &mut store, "5");
        assert_eq!(nav.screen(), &Screen::MainMenu);
    }

    #[test]
    fn main_menu_exit_words() {
        let (_dir, mut store) = fruit_store();
        let mut nav = Navigator::new(10);
        assert_eq!(step(&mut nav, &mut store, "3").control, LoopControl::Exit);
        assert_eq!(step(&mut nav, &mut store, "quit").control, LoopControl::Exit);
    }

    #[test]
    fn item_screen_shows_stock_and_price() {
        let (_dir, store) = fruit_store();
        let mut nav = Navigator::new(10);
        nav.go(Screen::ItemPick {
            category: "Fruit".into(),
        });
        let view = nav.render(&store).unwrap();
        assert_eq!(
            view.body_lines(),
            vec![
                "  1. Apple (10 in stock @ 2.00)",
                "  2. Pear (4 in stock @ 1.50)",
                "  0. Back"
            ]
        );
    }
}
