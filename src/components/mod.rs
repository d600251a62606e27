//! Dashboard components for Subledger.
//!
//! Each component reads what it needs from props; only the header talks to
//! the dashboard context directly.

mod card_detail;
mod card_face;
mod dashboard_header;
mod subscription_row;
mod trial_alert;

pub use card_detail::CardDetail;
pub use card_face::CardFace;
pub use dashboard_header::DashboardHeader;
pub use subscription_row::SubscriptionRow;
pub use trial_alert::TrialAlert;
