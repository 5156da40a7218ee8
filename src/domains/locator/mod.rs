//! Snippet locator domain.
//!
//! Given a file path and a code snippet, finds the inclusive 1-based line
//! range where the snippet occurs, after confining the path to the trust
//! boundary.
//!
//! ## Matching rules
//!
//! - Each line is compared after trimming leading and trailing whitespace;
//!   internal whitespace is significant.
//! - Lines must match in order and be contiguous.
//! - The first occurrence from the top of the file wins.

mod error;
mod index;
mod locate;
mod result;

pub use error::LocateError;
pub use index::LineIndex;
pub use locate::{locate, locate_in};
pub use result::{LineRange, MatchResult};
