//! One-shot command messaging
//!
//! Tagged status lines for the headless commands. Data goes to stdout
//! untagged; these helpers only report what a command did.

use crossterm::style::{Color, Stylize};
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
    Success,
}

impl MessageKind {
    fn tag(&self) -> &'static str {
        match self {
            MessageKind::Info => "[INFO]",
            MessageKind::Error => "[ERROR]",
            MessageKind::Success => "[SUCCESS]",
        }
    }

    fn color(&self) -> Color {
        match self {
            MessageKind::Info => Color::Yellow,
            MessageKind::Error => Color::Red,
            MessageKind::Success => Color::Green,
        }
    }
}

/// `[TAG] title<TAB> details`, without a trailing tab when details are empty.
pub fn format_message(kind: MessageKind, title: &str, details: &str, colored: bool) -> String {
    let tag = if colored {
        kind.tag().with(kind.color()).bold().to_string()
    } else {
        kind.tag().to_string()
    };
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

fn emit(kind: MessageKind, title: &str, details: &str) {
    match kind {
        MessageKind::Error => {
            let colored = std::io::stderr().is_terminal();
            eprintln!("{}", format_message(kind, title, details, colored));
        }
        MessageKind::Info | MessageKind::Success => {
            let colored = std::io::stdout().is_terminal();
            println!("{}", format_message(kind, title, details, colored));
        }
    }
}

pub fn print_info(title: &str, details: &str) {
    emit(MessageKind::Info, title, details);
}

pub fn print_error(title: &str, details: Option<&str>) {
    emit(MessageKind::Error, title, details.unwrap_or_default());
}

pub fn print_success(title: &str, details: &str) {
    emit(MessageKind::Success, title, details);
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
