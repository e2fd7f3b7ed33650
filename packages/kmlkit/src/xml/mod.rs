//! XML utilities.

mod utils;

pub use utils::{escape_attribute, escape_text, tag_parts};
