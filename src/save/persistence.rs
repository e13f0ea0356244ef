use super::record::Record;
use super::store::Store;
use crate::STORAGE_KEY;
use crate::game::Game;
use anyhow::Context;

/// Moves the whole [`Game`] in and out of a [`Store`] under
/// [`STORAGE_KEY`].
///
/// Loading never fails: a missing, unreadable, or malformed record
/// means "no saved game" and yields the defaults. Writes report errors
/// so the shell can log them and carry on.
#[derive(Debug, Clone)]
pub struct Persistence<S: Store> {
    store: S,
}

impl<S: Store> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
    pub fn store(&self) -> &S {
        &self.store
    }
    /// the saved game, or a fresh one
    pub fn load(&self) -> Game {
        match self.fetch() {
            Ok(Some(game)) => {
                log::info!("restored saved game at step {}", game.step());
                game
            }
            Ok(None) => {
                log::info!("no saved game, starting fresh");
                Game::default()
            }
            Err(e) => {
                log::warn!("discarding saved game: {:#}", e);
                Game::default()
            }
        }
    }
    /// the saved game, distinguishing absence from corruption
    pub fn fetch(&self) -> anyhow::Result<Option<Game>> {
        let Some(json) = self.store.read(STORAGE_KEY)? else {
            return Ok(None);
        };
        let record = serde_json::from_str::<Record>(&json).context("decode saved game")?;
        Game::try_from(record).context("restore saved game").map(Some)
    }
    /// overwrite the saved game with `game`
    pub fn save(&mut self, game: &Game) -> anyhow::Result<()> {
        let json = serde_json::to_string(&Record::from(game)).context("encode game")?;
        self.store.write(STORAGE_KEY, &json)?;
        log::trace!("saved {}", json);
        Ok(())
    }
    /// delete the saved game
    pub fn clear(&mut self) -> anyhow::Result<()> {
        self.store.remove(STORAGE_KEY)?;
        log::debug!("cleared saved game");
        Ok(())
    }
    /// Delete the saved game, start a new round, and save that round.
    /// The round is reset in memory even when the store fails; the
    /// first store error is returned.
    pub fn reset(&mut self, game: &mut Game) -> anyhow::Result<()> {
        let cleared = self.clear();
        game.reset();
        let saved = self.save(game);
        cleared.and(saved)
    }
}
