use crate::board::Mark;
use crate::Index;

/// Outcome of a click on a cell.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Placement {
    /// nothing changed: start screen, finished round, full board,
    /// out-of-range index, or an occupied cell
    Rejected,
    /// the mark was written and the turn passed
    Moved(Index),
    /// the mark was written and completed a line; the round is over
    Won(Index, Mark),
    /// the current snapshot already held a line that was never scored;
    /// the click was swallowed and the round closed for that mark
    Resolved(Mark),
}

impl Placement {
    /// whether the state changed and should be saved
    pub fn changed(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Self::Won(_, mark) | Self::Resolved(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected => write!(f, "rejected"),
            Self::Moved(i) => write!(f, "moved {}", i),
            Self::Won(i, mark) => write!(f, "{} wins at {}", mark, i),
            Self::Resolved(mark) => write!(f, "{} wins (resolved)", mark),
        }
    }
}
