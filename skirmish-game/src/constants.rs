//! User-facing string contract shared by the console frontend and the tester.
//!
//! Every constant here is part of the observable output of one of the games.
//! Keeping them together ensures the transcript can only change via code
//! review, not by drift between the frontend and the QA harness.

// Console chrome -----------------------------------------------------------
pub const SEPARATOR: &str = "====================";

// Adventure ----------------------------------------------------------------
pub const ADVENTURE_WELCOME: &str = "Welcome to my text based adventure game! My story is based on WarHammer 40K where the Space Marines face off in a battle against the Orks.\nThe game will offer you a series of choices, to select a choice simply enter the corresponding number when prompted and press enter!\nI hope you enjoy!!!";
pub const STORY_BEGINS: &str = "The Story Begins!";
pub const ADVENTURE_PROMPT: &str = "Enter your choice: ";
pub const ADVENTURE_REPROMPT: &str = "Invalid choice, please enter a valid choice: ";

// Tic-tac-toe --------------------------------------------------------------
// The turn prompt and win banner embed the current player's mark. The two
// trailing prompt spaces are part of the transcript contract.
pub const TTT_PROMPT_PREFIX: &str = "Player ";
pub const TTT_PROMPT_SUFFIX: &str = " Enter a value from 1-9:  ";
pub const TTT_REPROMPT: &str = "Invalid input, please select another:  ";
pub const TTT_WIN_PREFIX: &str = "PLAYER ";
pub const TTT_WIN_SUFFIX: &str = " WINS!!";
pub const TTT_DRAW: &str = "Game is a draw!";
