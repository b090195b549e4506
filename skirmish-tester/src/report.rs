//! Scenario result reporting: colored console summary or JSON.

use colored::Colorize;
use serde::Serialize;

/// Outcome of one executed scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub game: String,
    pub passed: bool,
    pub detail: String,
}

impl ScenarioResult {
    #[must_use]
    pub fn passed(name: &str, game: &str, detail: String) -> Self {
        Self {
            name: name.to_string(),
            game: game.to_string(),
            passed: true,
            detail,
        }
    }

    #[must_use]
    pub fn failed(name: &str, game: &str, detail: String) -> Self {
        Self {
            name: name.to_string(),
            game: game.to_string(),
            passed: false,
            detail,
        }
    }
}

/// Print a human-readable summary to stdout.
pub fn print_console(results: &[ScenarioResult]) {
    println!("{}", "Skirmish QA report".bright_white().bold());
    for result in results {
        let status = if result.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        println!(
            "  {status} {} [{}] - {}",
            result.name.bright_white(),
            result.game,
            result.detail
        );
    }
    let failed = results.iter().filter(|r| !r.passed).count();
    let summary = format!("{} scenarios, {} failed", results.len(), failed);
    if failed == 0 {
        println!("{}", summary.green());
    } else {
        println!("{}", summary.red());
    }
}

/// Serialize results as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(results: &[ScenarioResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
