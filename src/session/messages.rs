//! Session start and exit lines printed around the TUI

use crate::ui::PageVariant;

const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
const COLOR_RESET: &str = "\x1b[0m";

fn starting_line(mode: &str, variant: PageVariant) -> String {
    format!("{COLOR_INFO}[INFO]{COLOR_RESET} Starting {mode} dashboard ({variant} layout)")
}

pub fn print_session_starting(mode: &str, variant: PageVariant) {
    println!("{}", starting_line(mode, variant));
}

pub fn print_session_exit_success() {
    println!("{COLOR_SUCCESS}[SUCCESS]{COLOR_RESET} Finance dashboard exited successfully");
}
