pub mod export_service;
pub mod summary_service;

pub use export_service::{ExportFile, ExportService};
pub use summary_service::{DashboardSummary, SummaryService};
