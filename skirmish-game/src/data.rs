use serde::{Deserialize, Serialize};

use crate::story::Ending;

const DEFAULT_STORY: &str = include_str!("../assets/story.json");

/// A selectable option offered by a story node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryOption {
    pub label: String,
}

/// A single node of the adventure decision tree
///
/// Non-terminal nodes carry a question and two options; terminal nodes carry
/// an outcome and, for the early fall-back defeat, an extra epilogue line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryNode {
    /// Choice prefix addressing this node; empty for the root.
    #[serde(default)]
    pub prefix: Vec<u8>,
    pub text: String,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub options: Vec<StoryOption>,
    #[serde(default)]
    pub outcome: Option<Ending>,
    #[serde(default)]
    pub epilogue: Option<String>,
}

impl StoryNode {
    /// True when reaching this node ends the game.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }
}

/// Container for the full decision-tree asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StoryData {
    /// Scene-setting paragraph printed once before the first prompt.
    #[serde(default)]
    pub intro: String,
    pub nodes: Vec<StoryNode>,
}

impl StoryData {
    /// Create empty story data (useful for tests)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            intro: String::new(),
            nodes: Vec::new(),
        }
    }

    /// Load story data from a JSON string
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into valid story data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the embedded default story asset
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded asset is malformed.
    pub fn load_from_static() -> Result<Self, serde_json::Error> {
        Self::from_json(DEFAULT_STORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_data_from_json() {
        let json = r#"{
            "intro": "A quiet evening.",
            "nodes": [
                {
                    "prefix": [],
                    "text": "A door stands before you.",
                    "question": "What do you do?",
                    "options": [
                        { "label": "Open it." },
                        { "label": "Walk away." }
                    ]
                },
                {
                    "prefix": [1],
                    "text": "It was unlocked all along.",
                    "outcome": "victory"
                }
            ]
        }"#;

        let data = StoryData::from_json(json).unwrap();
        assert_eq!(data.intro, "A quiet evening.");
        assert_eq!(data.nodes.len(), 2);
        assert_eq!(data.nodes[0].options.len(), 2);
        assert!(!data.nodes[0].is_terminal());
        assert_eq!(data.nodes[1].outcome, Some(Ending::Victory));
    }

    #[test]
    fn test_default_asset_parses() {
        let data = StoryData::load_from_static().unwrap();
        assert!(!data.nodes.is_empty());
        assert!(!data.intro.is_empty());
    }
}
