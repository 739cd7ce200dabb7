// Shared page sections

mod backdrop;
mod export_actions;
mod footer;
mod loading;

pub use backdrop::Backdrop;
pub use export_actions::ExportActions;
pub use footer::Footer;
pub use loading::{LoadingReport, ProgressNotice, Spinner};

/// Product name shown in headers and the page title.
pub const PRODUCT_NAME: &str = "AI Competitor Radar";
