//! Scenario catalog: scripted transcripts plus exhaustive invariant sweeps.

use std::collections::HashMap;
use std::fmt;

use skirmish_console::{MatchResult, run_adventure, run_tictactoe};
use skirmish_game::{AdventureSession, Ending, Mark, MoveOutcome, StoryTree, TicTacToe};

/// Which game a scenario exercises
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Adventure,
    TicTacToe,
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adventure => f.write_str("adventure"),
            Self::TicTacToe => f.write_str("tictactoe"),
        }
    }
}

/// A single named check
pub struct Scenario {
    pub name: &'static str,
    pub game: GameKind,
    pub description: &'static str,
    /// Sweeps are opt-in via `--acceptance`; scripted checks always run.
    pub acceptance: bool,
    pub run: fn() -> Result<String, String>,
}

/// Full scenario catalog, scripted checks first.
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "adventure-endings",
            game: GameKind::Adventure,
            description: "every terminal path reaches its documented ending",
            acceptance: false,
            run: adventure_endings,
        },
        Scenario {
            name: "adventure-early-exit",
            game: GameKind::Adventure,
            description: "the fall-back path loses at depth two without a third prompt",
            acceptance: false,
            run: adventure_early_exit,
        },
        Scenario {
            name: "adventure-invalid-input",
            game: GameKind::Adventure,
            description: "garbage input reprompts and never advances the story",
            acceptance: false,
            run: adventure_invalid_input,
        },
        Scenario {
            name: "adventure-reused-ending",
            game: GameKind::Adventure,
            description: "the (1,2,2) defeat reuses the fall-back narrative verbatim",
            acceptance: false,
            run: adventure_reused_ending,
        },
        Scenario {
            name: "tictactoe-x-diagonal",
            game: GameKind::TicTacToe,
            description: "X wins on the main diagonal with move five",
            acceptance: false,
            run: tictactoe_x_diagonal,
        },
        Scenario {
            name: "tictactoe-draw",
            game: GameKind::TicTacToe,
            description: "a full board without a line is announced as a draw",
            acceptance: false,
            run: tictactoe_draw,
        },
        Scenario {
            name: "tictactoe-invalid-input",
            game: GameKind::TicTacToe,
            description: "out-of-range and occupied cells reprompt without moving",
            acceptance: false,
            run: tictactoe_invalid_input,
        },
        Scenario {
            name: "adventure-sweep",
            game: GameKind::Adventure,
            description: "exhaustive walk of every choice string",
            acceptance: true,
            run: adventure_sweep,
        },
        Scenario {
            name: "tictactoe-sweep",
            game: GameKind::TicTacToe,
            description: "exhaustive enumeration of every legal match",
            acceptance: true,
            run: tictactoe_sweep,
        },
    ]
}

// Transcript drivers -------------------------------------------------------

fn drive_adventure(script: &str) -> Result<(Ending, String), String> {
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    let ending = run_adventure(&mut input, &mut output)
        .map_err(|e| format!("adventure aborted: {e}"))?;
    let transcript =
        String::from_utf8(output).map_err(|e| format!("transcript not UTF-8: {e}"))?;
    Ok((ending, transcript))
}

fn drive_match(script: &str) -> Result<(MatchResult, String), String> {
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    let result =
        run_tictactoe(&mut input, &mut output).map_err(|e| format!("match aborted: {e}"))?;
    let transcript =
        String::from_utf8(output).map_err(|e| format!("transcript not UTF-8: {e}"))?;
    Ok((result, transcript))
}

fn expect(condition: bool, message: &str) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(String::from(message))
    }
}

// Adventure scenarios ------------------------------------------------------

fn adventure_endings() -> Result<String, String> {
    let cases: [(&str, Ending, &str); 7] = [
        ("2\n1\n", Ending::Overrun, "overwhelmed by the Orks"),
        ("1\n1\n1\n", Ending::TornApart, "torn apart by their choppas"),
        ("1\n1\n2\n", Ending::Victory, "Your order is the correct choice!"),
        ("1\n2\n1\n", Ending::Victory, "Your order is the correct choice!"),
        ("1\n2\n2\n", Ending::Overrun, "fails to regroup"),
        ("2\n2\n1\n", Ending::LibrarianLost, "Tiberius fails to hear your shout"),
        ("2\n2\n2\n", Ending::Victory, "held the flank"),
    ];
    for (script, ending, snippet) in cases {
        let (actual, transcript) = drive_adventure(script)?;
        expect(
            actual == ending,
            &format!("script {script:?}: expected {ending}, got {actual}"),
        )?;
        expect(
            transcript.contains(snippet),
            &format!("script {script:?}: transcript missing {snippet:?}"),
        )?;
    }
    Ok(String::from("7 endings verified"))
}

fn adventure_early_exit() -> Result<String, String> {
    let (ending, transcript) = drive_adventure("2\n1\n")?;
    expect(ending == Ending::Overrun, "expected the overrun ending")?;
    expect(
        transcript.contains("You have LOST."),
        "missing the defeat epilogue",
    )?;
    expect(
        transcript.matches("Enter your choice: ").count() == 2,
        "a third prompt was issued after the early terminal",
    )?;
    Ok(String::from("terminated at depth two"))
}

fn adventure_invalid_input() -> Result<String, String> {
    let (ending, transcript) = drive_adventure("0\nthree\n99\n1\n1\n2\n")?;
    expect(ending == Ending::Victory, "expected the victory ending")?;
    let reprompts = transcript
        .matches("Invalid choice, please enter a valid choice: ")
        .count();
    expect(reprompts == 3, &format!("expected 3 reprompts, saw {reprompts}"))?;
    expect(
        transcript.matches("Enter your choice: ").count() == 3,
        "rejected input advanced the story",
    )?;
    Ok(format!("{reprompts} rejections recovered"))
}

fn adventure_reused_ending() -> Result<String, String> {
    let (_, early) = drive_adventure("2\n1\n")?;
    let (_, deep) = drive_adventure("1\n2\n2\n")?;
    let narrative = "You order the squad to fall back in an attempt to regroup.";
    expect(early.contains(narrative), "early exit lost its narrative")?;
    expect(deep.contains(narrative), "(1,2,2) no longer reuses the narrative")?;
    expect(
        !deep.contains("You have LOST."),
        "(1,2,2) picked up the early-exit epilogue",
    )?;
    Ok(String::from("quirk preserved"))
}

// Tic-tac-toe scenarios ----------------------------------------------------

fn tictactoe_x_diagonal() -> Result<String, String> {
    let (result, transcript) = drive_match("1\n2\n5\n3\n9\n")?;
    expect(
        result == MatchResult::Win(Mark::X),
        &format!("expected an X win, got {result:?}"),
    )?;
    expect(
        transcript.contains("PLAYER X WINS!!"),
        "missing the win announcement",
    )?;
    let announce = transcript.find("PLAYER X WINS!!").unwrap_or(usize::MAX);
    let last_board = transcript.rfind("____ | ___ | ____").unwrap_or(0);
    expect(
        announce < last_board,
        "final board was rendered before the announcement",
    )?;
    Ok(String::from("won in five moves"))
}

fn tictactoe_draw() -> Result<String, String> {
    let (result, transcript) = drive_match("1\n2\n3\n5\n4\n6\n8\n7\n9\n")?;
    expect(result == MatchResult::Draw, "expected a draw")?;
    expect(
        transcript.contains("Game is a draw!"),
        "missing the draw announcement",
    )?;
    expect(!transcript.contains("WINS!!"), "a draw must not announce a win")?;
    Ok(String::from("nine moves, no line"))
}

fn tictactoe_invalid_input() -> Result<String, String> {
    let (result, transcript) = drive_match("0\n10\n5\n5\n1\n3\n2\n7\n")?;
    expect(
        result == MatchResult::Win(Mark::X),
        "expected an X win after recovery",
    )?;
    let reprompts = transcript
        .matches("Invalid input, please select another:  ")
        .count();
    expect(reprompts == 3, &format!("expected 3 reprompts, saw {reprompts}"))?;
    Ok(format!("{reprompts} rejections recovered"))
}

// Acceptance sweeps --------------------------------------------------------

fn adventure_sweep() -> Result<String, String> {
    let tree = StoryTree::load_from_static().map_err(|e| e.to_string())?;
    let mut endings: HashMap<Ending, u32> = HashMap::new();
    let mut terminals: Vec<Vec<u8>> = Vec::new();
    for bits in 0..8u32 {
        let mut session = AdventureSession::new(tree.clone());
        for depth in 0..3 {
            if session.is_finished() {
                break;
            }
            session
                .advance((bits >> depth & 1) + 1)
                .map_err(|e| format!("run {bits:03b}: {e}"))?;
        }
        let ending = session
            .outcome()
            .ok_or_else(|| format!("run {bits:03b} never terminated"))?;
        *endings.entry(ending).or_insert(0) += 1;
        let prefix = session.choices().to_vec();
        if !terminals.contains(&prefix) {
            terminals.push(prefix);
        }
    }
    expect(terminals.len() == 7, "expected exactly seven terminal nodes")?;
    // The early exit is reached by two of the eight choice strings.
    expect(
        endings.get(&Ending::Victory) == Some(&3),
        "expected three victorious runs",
    )?;
    expect(
        endings.get(&Ending::Overrun) == Some(&3),
        "expected three overrun runs (two share the early exit)",
    )?;
    expect(endings.get(&Ending::TornApart) == Some(&1), "expected one torn-apart run")?;
    expect(
        endings.get(&Ending::LibrarianLost) == Some(&1),
        "expected one librarian run",
    )?;
    Ok(String::from("8 choice strings, 7 terminal nodes"))
}

fn tictactoe_sweep() -> Result<String, String> {
    #[derive(Default)]
    struct Tally {
        x_wins: u64,
        o_wins: u64,
        draws: u64,
    }

    fn visit(game: &TicTacToe, tally: &mut Tally) -> Result<(), String> {
        for value in 1..=9 {
            if !game.is_legal(value) {
                continue;
            }
            let mut next = game.clone();
            let outcome = next.play(value).map_err(|e| e.to_string())?;
            if usize::from(next.rounds()) != next.board().occupied() {
                return Err(String::from("round counter diverged from occupancy"));
            }
            match outcome {
                MoveOutcome::Win(Mark::X) => tally.x_wins += 1,
                MoveOutcome::Win(Mark::O) => tally.o_wins += 1,
                MoveOutcome::Draw => tally.draws += 1,
                MoveOutcome::Continue => {
                    if next.rounds() >= 9 {
                        return Err(String::from("match failed to terminate in nine moves"));
                    }
                    visit(&next, tally)?;
                }
            }
        }
        Ok(())
    }

    let mut tally = Tally::default();
    visit(&TicTacToe::new(), &mut tally)?;
    let total = tally.x_wins + tally.o_wins + tally.draws;
    // Known totals for the complete game tree of distinct move sequences.
    expect(total == 255_168, &format!("expected 255168 games, saw {total}"))?;
    expect(
        tally.x_wins == 131_184,
        &format!("expected 131184 X wins, saw {}", tally.x_wins),
    )?;
    expect(
        tally.o_wins == 77_904,
        &format!("expected 77904 O wins, saw {}", tally.o_wins),
    )?;
    expect(
        tally.draws == 46_080,
        &format!("expected 46080 draws, saw {}", tally.draws),
    )?;
    Ok(format!("{total} games enumerated"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = catalog();
        for (i, scenario) in catalog.iter().enumerate() {
            assert!(
                catalog[i + 1..].iter().all(|s| s.name != scenario.name),
                "duplicate scenario name {}",
                scenario.name
            );
        }
    }

    #[test]
    fn test_scripted_scenarios_pass() {
        for scenario in catalog().into_iter().filter(|s| !s.acceptance) {
            (scenario.run)().unwrap_or_else(|e| panic!("{} failed: {e}", scenario.name));
        }
    }
}
