//! Console frontend loops for the Skirmish games.
//!
//! Both loops are generic over `BufRead`/`Write` so the tester and the
//! transcript tests can drive them with in-memory buffers; the binaries pass
//! locked stdin/stdout. All user-visible text comes from the game core's
//! string contract and the embedded story asset.

use std::io::{self, BufRead, Write};

use log::debug;
use thiserror::Error;

use skirmish_game::constants::{
    ADVENTURE_PROMPT, ADVENTURE_REPROMPT, ADVENTURE_WELCOME, SEPARATOR, STORY_BEGINS, TTT_DRAW,
    TTT_PROMPT_PREFIX, TTT_PROMPT_SUFFIX, TTT_REPROMPT, TTT_WIN_PREFIX, TTT_WIN_SUFFIX,
};
use skirmish_game::{
    AdventureSession, Ending, Mark, MoveOutcome, PlayError, StoryError, StoryTree, TicTacToe,
    read_choice,
};

/// Errors surfaced by the console loops
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Story(#[from] StoryError),
    #[error(transparent)]
    Play(#[from] PlayError),
}

/// Final result of a completed tic-tac-toe match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win(Mark),
    Draw,
}

fn write_separator<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "{SEPARATOR}\n\n")
}

/// Run the text adventure against the embedded story
///
/// # Errors
///
/// Propagates stream failures and story errors; `StoryError::UnmappedPrefix`
/// marks the defensive unreachable branch and should make the binary exit
/// non-zero.
pub fn run_adventure<R, W>(input: &mut R, output: &mut W) -> Result<Ending, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    let tree = StoryTree::load_from_static()?;
    run_adventure_with(tree, input, output)
}

/// Run the text adventure against a caller-supplied tree.
pub fn run_adventure_with<R, W>(
    tree: StoryTree,
    input: &mut R,
    output: &mut W,
) -> Result<Ending, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "\n{ADVENTURE_WELCOME}\n\n")?;
    write_separator(output)?;
    write!(output, "{STORY_BEGINS}\n\n")?;
    write!(output, "{}\n\n", tree.intro())?;
    write_separator(output)?;

    let mut session = AdventureSession::new(tree);
    loop {
        let node = session.current()?;
        writeln!(output, "{}", node.text)?;
        if let Some(ending) = node.outcome {
            if let Some(epilogue) = &node.epilogue {
                writeln!(output, "{epilogue}")?;
            }
            debug!("adventure ended after {} choices: {ending}", session.choices().len());
            return Ok(ending);
        }
        if let Some(question) = &node.question {
            writeln!(output, "{question}")?;
        }
        for (number, option) in (1..).zip(&node.options) {
            writeln!(output, "{number}. {}", option.label)?;
        }
        let limit = node.options.len() as u32;
        let choice = read_choice(input, output, ADVENTURE_PROMPT, ADVENTURE_REPROMPT, |v| {
            (1..=limit).contains(&v)
        })?;
        session.advance(choice)?;
        write_separator(output)?;
    }
}

/// Run one tic-tac-toe match between two players sharing the console
///
/// # Errors
///
/// Propagates stream failures; `PlayError` variants mark the defensive
/// unreachable branch (the reader only accepts legal cells).
pub fn run_tictactoe<R, W>(input: &mut R, output: &mut W) -> Result<MatchResult, ConsoleError>
where
    R: BufRead,
    W: Write,
{
    let mut game = TicTacToe::new();
    loop {
        let mark = game.to_move();
        output.write_all(game.board().render().as_bytes())?;
        let prompt = format!("{TTT_PROMPT_PREFIX}{mark}{TTT_PROMPT_SUFFIX}");
        let value = read_choice(input, output, &prompt, TTT_REPROMPT, |v| game.is_legal(v))?;
        writeln!(output)?;
        match game.play(value)? {
            MoveOutcome::Continue => {}
            MoveOutcome::Win(winner) => {
                writeln!(output, "{TTT_WIN_PREFIX}{winner}{TTT_WIN_SUFFIX}")?;
                output.write_all(game.board().render().as_bytes())?;
                debug!("match won by {winner} after {} rounds", game.rounds());
                return Ok(MatchResult::Win(winner));
            }
            MoveOutcome::Draw => {
                writeln!(output, "{TTT_DRAW}")?;
                output.write_all(game.board().render().as_bytes())?;
                debug!("match drawn after {} rounds", game.rounds());
                return Ok(MatchResult::Draw);
            }
        }
    }
}
