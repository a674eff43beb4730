#![doc(test(attr(deny(warnings))))]

//! Inventory Core keeps a small JSON-backed stock catalog: categories of
//! priced items, an append-only log of removals, and the reports built on top
//! of them. The `inventory_core_cli` binary drives it from a console menu.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Inventory Core tracing initialized.");
    });
}
