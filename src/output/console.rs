//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print a yes/no answer on stdout.
pub fn print_answer(answer: bool) {
    if answer {
        println!("{}", style("true").green());
    } else {
        println!("{}", style("false").red());
    }
}
