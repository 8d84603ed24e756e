// SPDX-License-Identifier: Apache-2.0

use colored::Colorize;

/// Prints `message` (plus `key: value` detail lines) to stderr and exits
/// with status 1.
pub fn report_cli_error_and_exit(message: &str, details: Vec<(&str, &str)>) -> ! {
    eprintln!("ff-ratio: {}", message.red().bold());
    for (key, value) in details {
        eprintln!("  {}: {}", key, value);
    }
    std::process::exit(1);
}
