pub mod formatting;
pub mod menu_renderer;
pub mod table;
