use crate::CELLS;
use crate::Score;
use crate::board::Board;
use crate::game::Game;
use crate::game::Player;
use serde::Deserialize;
use serde::Serialize;

/// The saved form of a [`Game`]. Field names match the JSON that the
/// browser client has always written under `ticTacToeGame`, so saves
/// move freely between the browser and terminal shells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub history: Vec<Board>,
    pub step_number: usize,
    pub x_is_next: bool,
    pub finished: bool,
    pub player1_name: String,
    pub player2_name: String,
    pub player1_score: Score,
    pub player2_score: Score,
    pub start_screen: bool,
}

impl From<&Game> for Record {
    fn from(game: &Game) -> Self {
        let [p1, p2] = game.players();
        Self {
            history: game.history().to_vec(),
            step_number: game.step(),
            x_is_next: game.x_is_next(),
            finished: game.finished(),
            player1_name: p1.name().to_string(),
            player2_name: p2.name().to_string(),
            player1_score: p1.score(),
            player2_score: p2.score(),
            start_screen: game.start_screen(),
        }
    }
}

/// Only checks what the game needs to index safely; the contents of
/// each snapshot are taken as saved.
impl TryFrom<Record> for Game {
    type Error = anyhow::Error;
    fn try_from(record: Record) -> Result<Self, Self::Error> {
        anyhow::ensure!(!record.history.is_empty(), "empty history");
        anyhow::ensure!(
            record.history.len() <= CELLS + 1,
            "history of {} snapshots",
            record.history.len()
        );
        anyhow::ensure!(
            record.step_number < record.history.len(),
            "step {} past history of {}",
            record.step_number,
            record.history.len()
        );
        Ok(Game::from_parts(
            record.history,
            record.step_number,
            record.x_is_next,
            record.finished,
            [
                Player::new(record.player1_name, record.player1_score),
                Player::new(record.player2_name, record.player2_score),
            ],
            record.start_screen,
        ))
    }
}
