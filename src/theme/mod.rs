//! Visual theme for Subledger: stylesheet and card accent palette.

mod colors;
mod styles;

pub use colors::accent_gradient;
pub use styles::GLOBAL_STYLES;
