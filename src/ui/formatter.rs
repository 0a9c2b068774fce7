//! Pure formatting functions for UI output.
//!
//! Errors go to stderr; everything else goes to stdout. Styling comes from
//! `console`, which drops colors when the stream is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::VersionTriple;

/// Render an error line: `error: <message>`
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("error:").red().bold().for_stderr(), message)
}

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Render a success line with a green checkmark
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

/// Render a status line with a yellow arrow
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{}", format_status(message));
}

/// Render the version change of a project: `<project>: <previous> → <next>`
pub fn format_version_change(
    project: &str,
    previous: &VersionTriple,
    next: &VersionTriple,
) -> String {
    format!(
        "{} {}: {} → {}",
        style("→").yellow(),
        style(project).bold(),
        style(previous).red(),
        style(next).green()
    )
}

/// Display the version change of a project.
///
/// # Arguments
/// * `project` - Project name from the descriptor
/// * `previous` - Version before the bump
/// * `next` - Version after the bump
pub fn display_version_change(project: &str, previous: &VersionTriple, next: &VersionTriple) {
    println!("{}", format_version_change(project, previous, next));
}

/// Render a boundary warning line
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ warning:").yellow(), warning)
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{}", format_boundary_warning(warning));
}
