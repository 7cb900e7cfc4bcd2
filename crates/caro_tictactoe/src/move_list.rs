//! Time-travel move list entries and their display order.

use crate::Move;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the display label for this order.
    pub fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Ascending",
            Self::Descending => "Descending",
        }
    }

    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// One row of the move list: a history step the player can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct MoveEntry {
    /// History index this entry points at.
    step: usize,
    /// The move that produced this step; `None` for game start.
    mv: Option<Move>,
    /// Whether this is the step currently shown.
    is_current: bool,
}

impl MoveEntry {
    pub(crate) fn new(step: usize, mv: Option<Move>, is_current: bool) -> Self {
        Self {
            step,
            mv,
            is_current,
        }
    }

    fn detail(&self) -> String {
        match self.mv {
            Some(mv) => mv.coordinates_label(),
            None => "game start".to_string(),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_current {
            write!(f, "You are at move #{} ({})", self.step, self.detail())
        } else if self.step == 0 {
            write!(f, "Go to game start")
        } else {
            write!(f, "Go to move #{} ({})", self.step, self.detail())
        }
    }
}
