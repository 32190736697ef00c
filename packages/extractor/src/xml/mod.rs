//! XML utilities for navigating roxmltree DOM trees.

mod utils;

pub use utils::{get_text, in_scope_prefix, local_name, text_content};
