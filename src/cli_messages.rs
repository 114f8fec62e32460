//! Coloured status lines for the `configure` and `reset` commands.

const COLOR_INFO: &str = "\x1b[1;33m";
const COLOR_ERROR: &str = "\x1b[1;31m";
const COLOR_SUCCESS: &str = "\x1b[1;32m";
const COLOR_RESET: &str = "\x1b[0m";

/// `[TAG] title` followed by tab-separated details when there are any.
fn tagged_line(color: &str, tag: &str, title: &str, details: &str) -> String {
    let mut line = format!("{color}[{tag}]{COLOR_RESET} {title}");
    if !details.is_empty() {
        line.push_str("\t ");
        line.push_str(details);
    }
    line
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(COLOR_INFO, "INFO", title, details));
}

/// Errors go to stderr, with details on their own line.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", tagged_line(COLOR_ERROR, "ERROR", title, ""));
    if let Some(details) = details {
        eprintln!("{}", tagged_line(COLOR_ERROR, "ERROR", "Details:", details));
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(COLOR_SUCCESS, "SUCCESS", title, details));
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
