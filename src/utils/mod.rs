pub mod app_time;
pub mod json_utils;

pub use json_utils::{field_text, is_truthy, non_empty_str, scalar_text};
