pub mod resolver;
pub mod types;

pub use resolver::{resolve, rules, CAPABILITY_SUMMARY};
pub use types::{IntentAction, IntentRule};
