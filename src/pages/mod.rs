//! Page components for Subledger.

mod dashboard;

pub use dashboard::Dashboard;
