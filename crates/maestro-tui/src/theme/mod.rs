//! Theme for the maestro console.
//!
//! - `palette` holds the raw colors
//! - `styles` builds semantic styles from them

pub mod palette;
pub mod styles;
