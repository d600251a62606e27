//! Reusable UI components
//!
//! All components are theme-agnostic: colors come from CSS custom properties
//! switched by the `light` / `dark` class on the dashboard root.

mod amount;
mod avatar;
mod button;
mod external_link;
mod toggles;

pub use amount::*;
pub use avatar::*;
pub use button::*;
pub use external_link::*;
pub use toggles::*;
