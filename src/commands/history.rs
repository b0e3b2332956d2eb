//! Browser history buttons
//!
//! These move through history directly, bypassing the app's back action:
//! - back: go(-1)
//! - forward: go(1)

pub mod back;
pub mod forward;
