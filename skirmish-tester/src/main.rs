mod report;
mod scenarios;

use anyhow::bail;
use clap::{Parser, ValueEnum};
use log::info;

use report::{ScenarioResult, print_console, to_json};
use scenarios::{GameKind, Scenario, catalog};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum GameFilter {
    /// Run scenarios for both games
    All,
    /// Text adventure scenarios only
    Adventure,
    /// Tic-tac-toe scenarios only
    Tictactoe,
}

impl GameFilter {
    const fn matches(self, game: GameKind) -> bool {
        match self {
            Self::All => true,
            Self::Adventure => matches!(game, GameKind::Adventure),
            Self::Tictactoe => matches!(game, GameKind::TicTacToe),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "skirmish-tester", version)]
#[command(about = "Automated QA for the Skirmish console games")]
struct Args {
    /// Which game to exercise
    #[arg(long, value_enum, default_value_t = GameFilter::All)]
    game: GameFilter,

    /// Scenarios to run (comma-separated names, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["console", "json"])]
    report: String,

    /// Also run the exhaustive acceptance sweeps
    #[arg(long)]
    acceptance: bool,
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn select<'a>(args: &Args, all: &'a [Scenario]) -> anyhow::Result<Vec<&'a Scenario>> {
    let names = split_csv(&args.scenarios);
    let run_all = names.iter().any(|n| n == "all");
    for name in &names {
        if name != "all" && !all.iter().any(|s| s.name == name) {
            bail!("unknown scenario: {name}");
        }
    }
    Ok(all
        .iter()
        .filter(|s| args.game.matches(s.game))
        .filter(|s| !s.acceptance || args.acceptance)
        .filter(|s| run_all || names.iter().any(|n| n == s.name))
        .collect())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let all = catalog();

    if args.list_scenarios {
        for scenario in &all {
            let kind = if scenario.acceptance {
                " (acceptance)"
            } else {
                ""
            };
            println!("{} [{}]{kind} - {}", scenario.name, scenario.game, scenario.description);
        }
        return Ok(());
    }

    let selected = select(&args, &all)?;
    if selected.is_empty() {
        bail!("no scenarios selected");
    }

    let mut results: Vec<ScenarioResult> = Vec::with_capacity(selected.len());
    for scenario in selected {
        info!("running scenario {}", scenario.name);
        let game = scenario.game.to_string();
        let result = match (scenario.run)() {
            Ok(detail) => ScenarioResult::passed(scenario.name, &game, detail),
            Err(detail) => ScenarioResult::failed(scenario.name, &game, detail),
        };
        results.push(result);
    }

    match args.report.as_str() {
        "json" => println!("{}", to_json(&results)?),
        _ => print_console(&results),
    }

    let failed = results.iter().filter(|r| !r.passed).count();
    if failed > 0 {
        bail!("{failed} scenario(s) failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv("a, b,,c"), vec!["a", "b", "c"]);
        assert!(split_csv("").is_empty());
    }

    #[test]
    fn test_acceptance_sweeps_are_opt_in() {
        let all = catalog();
        let args = Args {
            game: GameFilter::All,
            scenarios: String::from("all"),
            list_scenarios: false,
            report: String::from("console"),
            acceptance: false,
        };
        let selected = select(&args, &all).unwrap();
        assert!(selected.iter().all(|s| !s.acceptance));
    }

    #[test]
    fn test_unknown_scenario_is_rejected() {
        let all = catalog();
        let args = Args {
            game: GameFilter::All,
            scenarios: String::from("nope"),
            list_scenarios: false,
            report: String::from("console"),
            acceptance: false,
        };
        assert!(select(&args, &all).is_err());
    }
}
