//! Decision-tree lookup and validation for the text adventure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::data::{StoryData, StoryNode};

/// Maximum number of accepted choices in a single run.
pub const MAX_CHOICES: usize = 3;

/// Accepted choices so far, stored inline without heap allocation.
pub type ChoicePrefix = SmallVec<[u8; MAX_CHOICES]>;

/// Possible adventure ending types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// The flank held and the Orks broke.
    Victory,
    /// The squad fell back and was overwhelmed while regrouping.
    Overrun,
    /// Hand-to-hand combat continued one round too long.
    TornApart,
    /// Tiberius went unwarned and the line collapsed.
    LibrarianLost,
}

impl Ending {
    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory)
    }
}

impl fmt::Display for Ending {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Victory => f.write_str("victory"),
            Self::Overrun => f.write_str("overrun"),
            Self::TornApart => f.write_str("torn_apart"),
            Self::LibrarianLost => f.write_str("librarian_lost"),
        }
    }
}

/// Errors raised while loading the story asset or walking the tree
#[derive(Debug, Error)]
pub enum StoryError {
    #[error("story asset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("story tree has no root node")]
    MissingRoot,
    #[error("duplicate node for prefix {prefix:?}")]
    DuplicateNode { prefix: Vec<u8> },
    #[error("node {prefix:?} is deeper than {MAX_CHOICES} choices")]
    TooDeep { prefix: Vec<u8> },
    #[error("node {prefix:?} contains a choice value outside 1-2")]
    BadChoiceValue { prefix: Vec<u8> },
    #[error("branching node {prefix:?} must carry a question and exactly two options")]
    MalformedBranch { prefix: Vec<u8> },
    #[error("terminal node {prefix:?} must not offer options")]
    MalformedLeaf { prefix: Vec<u8> },
    #[error("choice {choice} from node {prefix:?} leads nowhere")]
    MissingChild { prefix: Vec<u8>, choice: u8 },
    #[error("no node mapped for prefix {prefix:?}")]
    UnmappedPrefix { prefix: Vec<u8> },
    #[error("choice {choice} is outside the valid range 1-2")]
    InvalidChoice { choice: u32 },
    #[error("cannot advance past a terminal node")]
    AdvancePastEnd,
}

/// Validated decision tree keyed by choice prefix
///
/// Construction checks the shape once so the walk itself can treat a missing
/// prefix as the defensive unreachable branch rather than a data problem.
#[derive(Debug, Clone)]
pub struct StoryTree {
    intro: String,
    nodes: HashMap<Vec<u8>, StoryNode>,
}

impl StoryTree {
    /// Build and validate a tree from parsed story data
    ///
    /// # Errors
    ///
    /// Returns an error when the data violates the tree shape: a missing
    /// root, duplicate or over-deep prefixes, choice values outside 1-2,
    /// branching nodes without a question and two options, terminal nodes
    /// that still offer options, or branches whose children are absent.
    pub fn from_data(data: StoryData) -> Result<Self, StoryError> {
        let mut nodes: HashMap<Vec<u8>, StoryNode> = HashMap::with_capacity(data.nodes.len());
        for node in data.nodes {
            if node.prefix.len() > MAX_CHOICES {
                return Err(StoryError::TooDeep {
                    prefix: node.prefix,
                });
            }
            if node.prefix.iter().any(|&c| c != 1 && c != 2) {
                return Err(StoryError::BadChoiceValue {
                    prefix: node.prefix,
                });
            }
            if nodes.contains_key(&node.prefix) {
                return Err(StoryError::DuplicateNode {
                    prefix: node.prefix,
                });
            }
            nodes.insert(node.prefix.clone(), node);
        }
        if !nodes.contains_key(&Vec::new()) {
            return Err(StoryError::MissingRoot);
        }
        for node in nodes.values() {
            if node.is_terminal() {
                if !node.options.is_empty() {
                    return Err(StoryError::MalformedLeaf {
                        prefix: node.prefix.clone(),
                    });
                }
                continue;
            }
            if node.question.is_none() || node.options.len() != 2 {
                return Err(StoryError::MalformedBranch {
                    prefix: node.prefix.clone(),
                });
            }
            for choice in 1..=2 {
                let mut child = node.prefix.clone();
                child.push(choice);
                if !nodes.contains_key(&child) {
                    return Err(StoryError::MissingChild {
                        prefix: node.prefix.clone(),
                        choice,
                    });
                }
            }
        }
        Ok(Self {
            intro: data.intro,
            nodes,
        })
    }

    /// Load and validate the embedded default story
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset fails to parse or validate.
    pub fn load_from_static() -> Result<Self, StoryError> {
        Self::from_data(StoryData::load_from_static()?)
    }

    /// Scene-setting paragraph printed before the first prompt.
    #[must_use]
    pub fn intro(&self) -> &str {
        &self.intro
    }

    /// Look up the node for a choice prefix
    ///
    /// # Errors
    ///
    /// Returns `StoryError::UnmappedPrefix` when no node is mapped. After a
    /// validated load this branch is unreachable from validated input; hitting
    /// it indicates an internal invariant violation.
    pub fn node(&self, prefix: &[u8]) -> Result<&StoryNode, StoryError> {
        self.nodes.get(prefix).ok_or_else(|| StoryError::UnmappedPrefix {
            prefix: prefix.to_vec(),
        })
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
