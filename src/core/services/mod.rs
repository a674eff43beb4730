pub mod catalog_service;
pub mod report_service;
pub mod stock_service;

pub use catalog_service::CatalogService;
pub use report_service::{ReportService, DEFAULT_RECENT_LIMIT};
pub use stock_service::StockService;
