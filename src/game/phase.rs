/// Where a round stands.
///
/// A draw is not a phase of its own: the board is full, nobody won,
/// and the round sits in `Playing` until reset.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Phase {
    StartScreen,
    Playing,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StartScreen => write!(f, "start screen"),
            Self::Playing => write!(f, "playing"),
            Self::Finished => write!(f, "finished"),
        }
    }
}
