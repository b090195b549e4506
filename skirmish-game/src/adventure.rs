//! Session controller binding the story tree to the accumulated choices.

use crate::data::StoryNode;
use crate::story::{ChoicePrefix, Ending, MAX_CHOICES, StoryError, StoryTree};

/// A single adventure run: the tree plus the choices accepted so far.
///
/// The session owns no I/O. Frontends print the current node, collect a
/// validated choice, and call [`AdventureSession::advance`]; the session
/// enforces the tree's termination rules.
#[derive(Debug, Clone)]
pub struct AdventureSession {
    tree: StoryTree,
    prefix: ChoicePrefix,
}

impl AdventureSession {
    #[must_use]
    pub fn new(tree: StoryTree) -> Self {
        Self {
            tree,
            prefix: ChoicePrefix::new(),
        }
    }

    /// Node for the current choice prefix
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnmappedPrefix` on the defensive unreachable
    /// branch (a validated tree maps every reachable prefix).
    pub fn current(&self) -> Result<&StoryNode, StoryError> {
        self.tree.node(&self.prefix)
    }

    /// Accept one validated choice and move to the child node
    ///
    /// # Errors
    ///
    /// Rejects values outside 1-2 (`InvalidChoice`), attempts to move past a
    /// terminal node (`AdvancePastEnd`), and unmapped children
    /// (`UnmappedPrefix`). The prefix is unchanged on every error path.
    pub fn advance(&mut self, choice: u32) -> Result<(), StoryError> {
        let value: u8 = match choice {
            1 => 1,
            2 => 2,
            other => return Err(StoryError::InvalidChoice { choice: other }),
        };
        if self.current()?.is_terminal() || self.prefix.len() >= MAX_CHOICES {
            return Err(StoryError::AdvancePastEnd);
        }
        let mut next = self.prefix.clone();
        next.push(value);
        self.tree.node(&next)?;
        self.prefix = next;
        Ok(())
    }

    /// Choices accepted so far, oldest first.
    #[must_use]
    pub fn choices(&self) -> &[u8] {
        &self.prefix
    }

    /// Outcome of the current node, if it is terminal.
    #[must_use]
    pub fn outcome(&self) -> Option<Ending> {
        self.current().ok().and_then(|node| node.outcome)
    }

    /// True once a terminal node has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.outcome().is_some()
    }

    /// Borrow the underlying tree.
    #[must_use]
    pub const fn tree(&self) -> &StoryTree {
        &self.tree
    }
}
