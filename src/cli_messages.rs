//! CLI command messaging system
//!
//! Consistent colored output for the headless subcommands (`summary`, `tasks`,
//! `task`, `config`).

const TAG_INFO: &str = "\x1b[1;36m[INFO]\x1b[0m";
const TAG_ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const TAG_SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

fn tagged_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

/// Print CLI command info message
pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_INFO, title, details));
}

/// Print CLI command error to stderr
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{} {}", TAG_ERROR, title);
    if let Some(details) = details {
        eprintln!("{} Details: {}", TAG_ERROR, details);
    }
}

/// Print CLI command success
pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(TAG_SUCCESS, title, details));
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
