use skirmish_game::{AdventureSession, Ending, StoryError, StoryTree};

fn tree() -> StoryTree {
    StoryTree::load_from_static().unwrap()
}

fn walk(choices: &[u32]) -> AdventureSession {
    let mut session = AdventureSession::new(tree());
    for &choice in choices {
        session.advance(choice).unwrap();
    }
    session
}

#[test]
fn default_tree_has_thirteen_nodes() {
    assert_eq!(tree().len(), 13);
}

#[test]
fn every_terminal_path_reaches_its_documented_ending() {
    let expected: [(&[u32], Ending); 7] = [
        (&[2, 1], Ending::Overrun),
        (&[1, 1, 1], Ending::TornApart),
        (&[1, 1, 2], Ending::Victory),
        (&[1, 2, 1], Ending::Victory),
        (&[1, 2, 2], Ending::Overrun),
        (&[2, 2, 1], Ending::LibrarianLost),
        (&[2, 2, 2], Ending::Victory),
    ];
    for (path, ending) in expected {
        let session = walk(path);
        assert_eq!(session.outcome(), Some(ending), "path {path:?}");
    }
}

#[test]
fn every_branch_offers_two_options_and_a_question() {
    let tree = tree();
    for prefix in [
        &[][..],
        &[1][..],
        &[2][..],
        &[1, 1][..],
        &[1, 2][..],
        &[2, 2][..],
    ] {
        let node = tree.node(prefix).unwrap();
        assert_eq!(node.question.as_deref(), Some("What do you do?"));
        assert_eq!(node.options.len(), 2, "prefix {prefix:?}");
    }
}

#[test]
fn fall_back_terminates_at_depth_two() {
    let session = walk(&[2, 1]);
    assert!(session.is_finished());
    let node = session.current().unwrap();
    assert_eq!(node.outcome, Some(Ending::Overrun));
    assert_eq!(node.epilogue.as_deref(), Some("You have LOST."));
    assert!(node.options.is_empty());
}

#[test]
fn third_loss_reuses_the_fall_back_narrative() {
    // Known quirk: the (1,2,2) defeat prints the same paragraph as the early
    // fall-back, minus the epilogue. Deliberate; do not "fix" silently.
    let tree = tree();
    let early = tree.node(&[2, 1]).unwrap();
    let reused = tree.node(&[1, 2, 2]).unwrap();
    assert_eq!(early.text, reused.text);
    assert!(reused.epilogue.is_none());
}

#[test]
fn depth_three_losses_have_distinct_narratives() {
    let tree = tree();
    let torn = tree.node(&[1, 1, 1]).unwrap();
    let librarian = tree.node(&[2, 2, 1]).unwrap();
    assert!(torn.text.contains("torn apart by their choppas"));
    assert!(librarian.text.contains("Tiberius fails to hear your shout"));
    assert_ne!(torn.text, librarian.text);
}

#[test]
fn winning_paths_share_the_victory_narrative() {
    let tree = tree();
    let text = &tree.node(&[1, 1, 2]).unwrap().text;
    assert!(text.starts_with("Your order is the correct choice!"));
    assert_eq!(text, &tree.node(&[1, 2, 1]).unwrap().text);
    assert_eq!(text, &tree.node(&[2, 2, 2]).unwrap().text);
}

#[test]
fn every_run_terminates_within_three_choices() {
    // Exhaustive: all binary choice strings, stopping at terminal nodes.
    for bits in 0..8u32 {
        let mut session = AdventureSession::new(tree());
        for depth in 0..3 {
            if session.is_finished() {
                break;
            }
            let choice = (bits >> depth & 1) + 1;
            session.advance(choice).unwrap();
        }
        assert!(
            session.is_finished(),
            "run {bits:03b} still open after three choices"
        );
        assert!(session.choices().len() <= 3);
    }
}

#[test]
fn rejected_choice_leaves_the_prefix_unchanged() {
    let mut session = walk(&[1]);
    assert!(matches!(
        session.advance(0),
        Err(StoryError::InvalidChoice { choice: 0 })
    ));
    assert!(matches!(
        session.advance(9),
        Err(StoryError::InvalidChoice { choice: 9 })
    ));
    assert_eq!(session.choices(), &[1]);
    assert!(!session.is_finished());
}

#[test]
fn intro_sets_the_scene() {
    let tree = tree();
    assert!(tree.intro().starts_with("In the grim darkness"));
    assert_eq!(tree.intro().lines().count(), 3);
}
