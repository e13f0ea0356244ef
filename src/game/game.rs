use super::phase::Phase;
use super::placement::Placement;
use super::player::Player;
use super::status::Status;
use crate::CELLS;
use crate::Index;
use crate::PLAYER_1_NAME;
use crate::PLAYER_2_NAME;
use crate::board::Board;
use crate::board::Mark;
use crate::board::winner;

/// The whole session: every snapshot of the current round, whose turn it
/// is, whether the round is over, both players, and the start screen gate.
///
/// All mutation goes through [`Game::start`], [`Game::rename`],
/// [`Game::place`] and [`Game::reset`]. Each reports whether anything
/// changed so the caller knows when to save. Everything the screen shows
/// (status line, scores, congratulations) is recomputed from the fields
/// on demand rather than stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
    x_is_next: bool,
    finished: bool,
    players: [Player; 2],
    start_screen: bool,
}

impl Default for Game {
    fn default() -> Self {
        Self {
            history: vec![Board::empty()],
            step: 0,
            x_is_next: true,
            finished: false,
            players: [
                Player::new(PLAYER_1_NAME, 0),
                Player::new(PLAYER_2_NAME, 0),
            ],
            start_screen: true,
        }
    }
}

impl Game {
    /// Assemble a game from saved fields. Callers guarantee a non-empty
    /// history and `step < history.len()`.
    pub(crate) fn from_parts(
        history: Vec<Board>,
        step: usize,
        x_is_next: bool,
        finished: bool,
        players: [Player; 2],
        start_screen: bool,
    ) -> Self {
        debug_assert!(step < history.len());
        Self {
            history,
            step,
            x_is_next,
            finished,
            players,
            start_screen,
        }
    }

    // accessors
    pub fn history(&self) -> &[Board] {
        &self.history
    }
    pub fn step(&self) -> usize {
        self.step
    }
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }
    pub fn finished(&self) -> bool {
        self.finished
    }
    pub fn start_screen(&self) -> bool {
        self.start_screen
    }
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[mark.seat()]
    }
    /// the snapshot at the step pointer
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }
    pub fn to_move(&self) -> Mark {
        Mark::from(self.x_is_next)
    }

    // transitions
    /// Leave the start screen and reveal the board.
    pub fn start(&mut self) -> bool {
        let changed = self.start_screen;
        self.start_screen = false;
        changed
    }
    /// Change the display name of whoever holds `mark`.
    pub fn rename(&mut self, mark: Mark, name: impl Into<String>) -> bool {
        let name = name.into();
        let player = &mut self.players[mark.seat()];
        if player.name() == name {
            return false;
        }
        player.rename(name);
        true
    }
    /// Try to write the current player's mark at `index`.
    pub fn place(&mut self, index: Index) -> Placement {
        if self.start_screen || self.finished || self.step >= CELLS {
            log::debug!("place {} ignored in {}", index, self.phase());
            return Placement::Rejected;
        }
        if !self.current().is_open(index) {
            log::debug!("place {} ignored on {}", index, self.current());
            return Placement::Rejected;
        }
        if let Some(mark) = winner(self.current()) {
            log::warn!("unscored line on {}, closing round", self.current());
            self.close(mark);
            return Placement::Resolved(mark);
        }
        let mark = self.to_move();
        let board = self.current().with(index, mark);
        self.history.truncate(self.step + 1);
        self.history.push(board);
        self.step = self.history.len() - 1;
        self.x_is_next = mark.flip().into();
        log::debug!("{} at {} -> {}", mark, index, board);
        match winner(&board) {
            Some(mark) => {
                self.close(mark);
                Placement::Won(index, mark)
            }
            None => Placement::Moved(index),
        }
    }
    /// Clear the board for a new round. Names, scores and the start
    /// screen flag carry over.
    pub fn reset(&mut self) {
        self.history = vec![Board::empty()];
        self.step = 0;
        self.x_is_next = true;
        self.finished = false;
        log::debug!("round reset");
    }
    fn close(&mut self, mark: Mark) {
        self.finished = true;
        self.players[mark.seat()].win();
        log::info!("{} wins as {}", self.player(mark).name(), mark);
    }

    // derived
    pub fn phase(&self) -> Phase {
        if self.start_screen {
            Phase::StartScreen
        } else if self.finished {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }
    pub fn winner(&self) -> Option<Mark> {
        winner(self.current())
    }
    /// full board, no line
    pub fn is_draw(&self) -> bool {
        self.current().is_full() && self.winner().is_none()
    }
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(mark) => Status::Winner(mark),
            None => Status::Next(self.to_move()),
        }
    }
    /// `Scores: Ann - 1, Bob - 0`
    pub fn scores(&self) -> String {
        format!("Scores: {}, {}", self.players[0], self.players[1])
    }
    /// `Winner: Ann. Scores: ...` or `Next player: Bob. Scores: ...`
    pub fn headline(&self) -> String {
        match self.status() {
            Status::Winner(mark) => {
                format!("Winner: {}. {}", self.player(mark).name(), self.scores())
            }
            Status::Next(mark) => {
                format!("Next player: {}. {}", self.player(mark).name(), self.scores())
            }
        }
    }
    /// `Congratulations, Ann!` once the round is won
    pub fn congratulations(&self) -> Option<String> {
        self.finished
            .then(|| self.winner())
            .flatten()
            .map(|mark| format!("Congratulations, {}!", self.player(mark).name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rand::seq::IteratorRandom;

    fn started() -> Game {
        let mut game = Game::default();
        game.start();
        game
    }

    fn play(game: &mut Game, moves: &[Index]) -> Vec<Placement> {
        moves.iter().map(|i| game.place(*i)).collect()
    }

    #[test]
    fn defaults() {
        let game = Game::default();
        assert_eq!(game.history(), &[Board::empty()]);
        assert_eq!(game.step(), 0);
        assert!(game.x_is_next());
        assert!(!game.finished());
        assert!(game.start_screen());
        assert_eq!(game.phase(), Phase::StartScreen);
        assert_eq!(game.player(Mark::X).name(), PLAYER_1_NAME);
        assert_eq!(game.player(Mark::O).name(), PLAYER_2_NAME);
    }

    #[test]
    fn start_reveals_board_once() {
        let mut game = Game::default();
        assert!(game.start());
        assert!(!game.start());
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn start_screen_blocks_placement() {
        let mut game = Game::default();
        assert_eq!(game.place(0), Placement::Rejected);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn rename_reports_change() {
        let mut game = Game::default();
        assert!(game.rename(Mark::X, "Ann"));
        assert!(!game.rename(Mark::X, "Ann"));
        assert!(game.rename(Mark::O, "Bob"));
        assert_eq!(game.player(Mark::X).name(), "Ann");
        assert_eq!(game.player(Mark::O).name(), "Bob");
    }

    #[test]
    fn top_row_scenario() {
        let mut game = started();
        let outcomes = play(&mut game, &[0, 4, 1, 3, 2]);
        assert_eq!(
            outcomes[..4],
            [
                Placement::Moved(0),
                Placement::Moved(4),
                Placement::Moved(1),
                Placement::Moved(3),
            ]
        );
        assert_eq!(outcomes[4], Placement::Won(2, Mark::X));
        assert_eq!(game.current().to_string(), "XXX/OO./...");
        assert!(game.finished());
        assert_eq!(game.phase(), Phase::Finished);
        assert_eq!(game.winner(), Some(Mark::X));
        assert_eq!(game.player(Mark::X).score(), 1);
        assert_eq!(game.player(Mark::O).score(), 0);
        let (len, step) = (game.history().len(), game.step());
        for i in [5, 6, 7, 8] {
            assert_eq!(game.place(i), Placement::Rejected);
        }
        assert_eq!(game.history().len(), len);
        assert_eq!(game.step(), step);
        assert_eq!(game.player(Mark::X).score(), 1);
    }

    #[test]
    fn occupied_cell_is_noop() {
        let mut game = started();
        game.place(4);
        let before = game.clone();
        assert_eq!(game.place(4), Placement::Rejected);
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_range_is_noop() {
        let mut game = started();
        assert_eq!(game.place(9), Placement::Rejected);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn draw_scores_nobody() {
        let mut game = started();
        // X O X / X O O / O X X
        let outcomes = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert!(outcomes.iter().all(|o| matches!(o, Placement::Moved(_))));
        assert!(game.is_draw());
        assert!(!game.finished());
        assert_eq!(game.phase(), Phase::Playing);
        assert_eq!(game.step(), CELLS);
        assert_eq!(game.player(Mark::X).score(), 0);
        assert_eq!(game.player(Mark::O).score(), 0);
        assert_eq!(game.congratulations(), None);
        assert_eq!(game.place(0), Placement::Rejected);
    }

    #[test]
    fn o_wins_column() {
        let mut game = started();
        let outcomes = play(&mut game, &[0, 1, 3, 4, 8, 7]);
        assert_eq!(outcomes.last(), Some(&Placement::Won(7, Mark::O)));
        assert_eq!(game.player(Mark::O).score(), 1);
        assert_eq!(game.player(Mark::X).score(), 0);
    }

    #[test]
    fn reset_clears_round_but_keeps_players() {
        let mut game = started();
        game.rename(Mark::O, "Bob");
        play(&mut game, &[0, 4, 1, 3, 2]);
        game.reset();
        assert_eq!(game.history(), &[Board::empty()]);
        assert_eq!(game.step(), 0);
        assert!(game.x_is_next());
        assert!(!game.finished());
        assert!(!game.start_screen());
        assert_eq!(game.player(Mark::X).score(), 1);
        assert_eq!(game.player(Mark::O).name(), "Bob");
        assert_eq!(game.phase(), Phase::Playing);
    }

    #[test]
    fn reset_from_start_screen_keeps_gate() {
        let mut game = Game::default();
        game.reset();
        assert!(game.start_screen());
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn scores_accumulate_across_rounds() {
        let mut game = started();
        play(&mut game, &[0, 4, 1, 3, 2]);
        game.reset();
        play(&mut game, &[0, 4, 1, 3, 2]);
        game.reset();
        play(&mut game, &[0, 1, 3, 4, 8, 7]);
        assert_eq!(game.player(Mark::X).score(), 2);
        assert_eq!(game.player(Mark::O).score(), 1);
    }

    #[test]
    fn random_play_keeps_history_consistent() {
        let ref mut rng = SmallRng::seed_from_u64(0x7ac7ac);
        for _ in 0..256 {
            let mut game = started();
            loop {
                let Some(index) = game.current().open().choose(rng) else {
                    break;
                };
                match game.place(index) {
                    Placement::Rejected => break,
                    _ => assert_eq!(game.history().len(), game.step() + 1),
                }
            }
            for pair in game.history().windows(2) {
                assert_eq!(pair[0].distance(&pair[1]), 1);
                assert!(pair[1].filled() == pair[0].filled() + 1);
            }
            let wins = game.players().iter().map(Player::score).sum::<u32>();
            assert_eq!(wins, game.winner().map_or(0, |_| 1));
            assert_eq!(game.finished(), game.winner().is_some());
        }
    }

    #[test]
    fn unscored_line_is_resolved_by_next_click() {
        // the shape an older client saved right after a winning move
        let won = Board::try_from("XXX/OO./...").unwrap();
        let mut game = Game::from_parts(
            vec![Board::empty(), won],
            1,
            false,
            false,
            [Player::new("Ann", 0), Player::new("Bob", 0)],
            false,
        );
        assert_eq!(game.place(8), Placement::Resolved(Mark::X));
        assert!(game.finished());
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.player(Mark::X).score(), 1);
        assert_eq!(game.place(8), Placement::Rejected);
        assert_eq!(game.player(Mark::X).score(), 1);
    }

    #[test]
    fn headline_names_next_player() {
        let mut game = started();
        game.rename(Mark::X, "Ann");
        game.rename(Mark::O, "Bob");
        assert_eq!(game.headline(), "Next player: Ann. Scores: Ann - 0, Bob - 0");
        game.place(0);
        assert_eq!(game.headline(), "Next player: Bob. Scores: Ann - 0, Bob - 0");
        assert_eq!(game.status(), Status::Next(Mark::O));
    }

    #[test]
    fn headline_names_winner() {
        let mut game = started();
        game.rename(Mark::X, "Ann");
        game.rename(Mark::O, "Bob");
        play(&mut game, &[0, 4, 1, 3, 2]);
        assert_eq!(game.status(), Status::Winner(Mark::X));
        assert_eq!(game.headline(), "Winner: Ann. Scores: Ann - 1, Bob - 0");
        assert_eq!(game.scores(), "Scores: Ann - 1, Bob - 0");
        assert_eq!(game.congratulations().as_deref(), Some("Congratulations, Ann!"));
    }
}
