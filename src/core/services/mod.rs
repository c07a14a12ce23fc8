//! Core services
//!
//! - `classifier` - pure statistics, groupings and urgency classification
//! - `notifier` - lifecycle-event notification rules and periodic sweeps

pub mod classifier;
pub mod notifier;
