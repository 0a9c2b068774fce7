//! User interface output.
//!
//! There are no interactive prompts; a bump either runs to completion or
//! stops at the first error.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, display_status, display_success,
    display_version_change, format_boundary_warning, format_error, format_status, format_success,
    format_version_change,
};
