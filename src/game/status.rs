use crate::board::Mark;

/// What the status line announces, derived from the displayed snapshot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Status {
    /// no line yet; this mark moves next
    Next(Mark),
    /// this mark holds a complete line
    Winner(Mark),
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Next(mark) => write!(f, "next {}", mark),
            Self::Winner(mark) => write!(f, "winner {}", mark),
        }
    }
}
