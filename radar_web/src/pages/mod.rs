// Routed pages

mod intake;
mod not_found;
mod report;

pub use intake::{IntakePage, settle_submission};
pub use not_found::NotFoundPage;
pub use report::ReportPage;
