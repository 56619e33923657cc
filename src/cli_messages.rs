//! CLI command messaging system
//!
//! This module provides consistent messaging for one-shot commands like
//! balance, airdrop, and other command-line operations.

/// Severity tag prefixed to a console message.
#[derive(Debug, Clone, Copy)]
enum Label {
    Info,
    Warn,
    Error,
    Success,
}

impl Label {
    fn tag(self) -> &'static str {
        match self {
            Label::Info => "\x1b[1;33m[INFO]\x1b[0m",
            Label::Warn => "\x1b[1;91m[WARN]\x1b[0m",
            Label::Error => "\x1b[1;31m[ERROR]\x1b[0m",
            Label::Success => "\x1b[1;32m[SUCCESS]\x1b[0m",
        }
    }
}

fn print_labeled(label: Label, title: &str, details: &str) {
    print!("{} {}", label.tag(), title);
    if !details.is_empty() {
        println!("\t {}", details);
    } else {
        println!();
    }
}

/// Print CLI command info message (for balance, logout, etc.)
pub fn print_info(title: &str, details: &str) {
    print_labeled(Label::Info, title, details);
}

/// Print CLI command warn message
pub fn print_warn(title: &str, details: &str) {
    print_labeled(Label::Warn, title, details);
}

/// Print CLI command error
pub fn print_error(title: &str, details: Option<&str>) {
    println!("{} {}", Label::Error.tag(), title);
    if let Some(details) = details {
        println!("{} Details: {}", Label::Error.tag(), details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    print_labeled(Label::Success, title, details);
}

/// Macro for print_cmd_info! usage
#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

/// Macro for print_cmd_warn! usage
#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

/// Macro for CLI errors
#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

/// Macro for CLI success messages
#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
