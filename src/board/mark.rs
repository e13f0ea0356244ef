use serde::Deserialize;
use serde::Serialize;

/// What a player writes into a cell. X always belongs to player 1
/// and always opens a round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn flip(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
    /// Seat of the player holding this mark: 0 for X, 1 for O.
    pub fn seat(self) -> usize {
        match self {
            Self::X => 0,
            Self::O => 1,
        }
    }
}

/// turn flag isomorphism: `true` means X moves next
impl From<bool> for Mark {
    fn from(x_is_next: bool) -> Self {
        if x_is_next { Self::X } else { Self::O }
    }
}
impl From<Mark> for bool {
    fn from(mark: Mark) -> Self {
        mark == Mark::X
    }
}

impl TryFrom<&str> for Mark {
    type Error = &'static str;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim() {
            "X" | "x" => Ok(Self::X),
            "O" | "o" => Ok(Self::O),
            _ => Err("invalid mark"),
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}
