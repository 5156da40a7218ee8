// Security module for path validation and access control
//
// This module confines file reads to the trust boundary (the process working
// directory), preventing path traversal and symlink escapes.

pub mod path_validator;

pub use path_validator::{PathSecurityError, current_boundary, validate_path};
