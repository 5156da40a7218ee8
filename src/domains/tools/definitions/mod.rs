//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod find_line_numbers;

pub use find_line_numbers::{FindLineNumbersParams, FindLineNumbersTool};
