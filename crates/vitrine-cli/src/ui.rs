//! UI helpers for console display.

use console::style;

use vitrine_core::position::Position;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Style a position label the way the card would look.
#[must_use]
pub fn styled_position(label: &str, position: Position, color: bool) -> String {
    if !color {
        return label.to_string();
    }
    match position {
        Position::Center => style(label).bold().green().to_string(),
        Position::Left | Position::Right => style(label).cyan().to_string(),
        Position::Hidden => style(label).dim().to_string(),
    }
}

/// Print the page title as a styled header line.
pub fn print_header(text: &str) {
    if is_color_disabled() {
        println!("=== {text} ===");
    } else {
        println!("{}", style(format!("=== {text} ===")).bold().cyan());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
