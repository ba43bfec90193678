//! Notifier that prints to the terminal

use colored::Colorize;
use kv_provider::Notifier;

/// Prints user notifications to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show_error(&self, message: &str) {
        eprintln!("{}: {}", "error".red().bold(), message);
    }

    fn show_warning(&self, message: &str) {
        eprintln!("{}: {}", "warning".yellow().bold(), message);
    }
}
