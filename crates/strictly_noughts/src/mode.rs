//! Game mode and computer difficulty selection.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Plays a uniformly random empty cell.
    #[default]
    Easy,
    /// Takes or blocks an open line, otherwise plays randomly.
    Medium,
    /// Plays perfectly using exhaustive search.
    Hard,
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Difficulty::iter()
            .find(|d| d.as_ref().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                GameError::invalid_configuration(format!(
                    "Unknown difficulty {:?} (expected easy, medium or hard)",
                    s
                ))
            })
    }
}

/// Who sits opposite the first (human) player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternate turns on the same board.
    #[default]
    HumanVsHuman,
    /// The human plays X, the computer replies as O.
    HumanVsAutomation(Difficulty),
}

impl GameMode {
    /// Builds a mode from loosely-typed selection strings.
    ///
    /// `mode` accepts `human`, `multiplayer` or `pvp` for two humans and
    /// `computer`, `cpu` or `ai` for play against the computer. A missing
    /// difficulty means [`Difficulty::Easy`]; a difficulty given for a
    /// two-human game must still be valid.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfiguration`] for unrecognised values.
    #[instrument]
    pub fn from_parts(mode: &str, difficulty: Option<&str>) -> Result<Self, GameError> {
        let difficulty = difficulty.map(str::parse::<Difficulty>).transpose()?;
        match mode.trim().to_ascii_lowercase().as_str() {
            "human" | "multiplayer" | "pvp" | "human-vs-human" => Ok(GameMode::HumanVsHuman),
            "computer" | "cpu" | "ai" | "human-vs-computer" => Ok(GameMode::HumanVsAutomation(
                difficulty.unwrap_or_default(),
            )),
            other => Err(GameError::invalid_configuration(format!(
                "Unknown game mode {:?} (expected human or computer)",
                other
            ))),
        }
    }

    /// The computer's difficulty, when playing against it.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsAutomation(difficulty) => Some(*difficulty),
        }
    }

    /// Whether the computer plays O.
    pub fn is_automated(&self) -> bool {
        matches!(self, GameMode::HumanVsAutomation(_))
    }

    /// Returns display name.
    pub fn name(&self) -> String {
        match self {
            GameMode::HumanVsHuman => "Multiplayer mode".to_string(),
            GameMode::HumanVsAutomation(difficulty) => {
                format!("Computer mode ({})", difficulty)
            }
        }
    }
}
