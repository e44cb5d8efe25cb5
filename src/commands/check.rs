//! Check command - Reports risky release values.

use crate::config::check::{self, Finding};
use crate::config::Settings;

/// Execute the check command.
///
/// Returns `false` when any finding is an error.
pub fn execute(settings: &Settings) -> bool {
    let findings = check::run(settings);

    if findings.is_empty() {
        println!("No issues found");
    }
    for finding in &findings {
        println!("{}", format_finding(finding));
    }

    !check::has_errors(&findings)
}

fn format_finding(finding: &Finding) -> String {
    let level = match finding.level {
        check::Level::Warning => "WARNING",
        check::Level::Error => "ERROR",
    };
    format!("[{}] {}: {}", level, finding.code, finding.message)
}
