use crate::Score;

/// A seat at the table: who they are and how many rounds they have won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: Score,
}

impl Player {
    pub fn new(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
    pub fn win(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.score)
    }
}
