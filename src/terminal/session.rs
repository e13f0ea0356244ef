use super::args::Args;
use super::grid::Grid;
use crate::Index;
use crate::board::Mark;
use crate::game::Game;
use crate::game::Phase;
use crate::render::Tiles;
use crate::save::Disk;
use crate::save::Persistence;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use dialoguer::Input;
use dialoguer::Select;

/// What the player picked from the move menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Cell(Index),
    Reset,
    Quit,
}

impl Choice {
    fn label(&self) -> String {
        match self {
            Self::Cell(i) => format!("Cell {}", i),
            Self::Reset => "Reset Game".to_string(),
            Self::Quit => "Quit".to_string(),
        }
    }
}

/// One sitting at the terminal. Owns the game and saves it to disk
/// after every change.
pub struct Session {
    game: Game,
    persistence: Persistence<Disk>,
}

impl Session {
    /// Parse arguments, restore any saved game, and play until quit.
    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        let mut persistence = Persistence::new(Disk::new(args.dir.clone()));
        if args.fresh {
            persistence.clear()?;
        }
        let game = persistence.load();
        Self { game, persistence }.play()
    }

    fn play(mut self) -> anyhow::Result<()> {
        loop {
            let proceed = match self.game.phase() {
                Phase::StartScreen => self.lobby()?,
                Phase::Playing | Phase::Finished => self.turn()?,
            };
            if !proceed {
                log::info!("leaving at step {}", self.game.step());
                return Ok(());
            }
        }
    }

    /// Name inputs and the start button.
    fn lobby(&mut self) -> anyhow::Result<bool> {
        for mark in [Mark::X, Mark::O] {
            let name = Input::<String>::new()
                .with_prompt(format!("Player {} Name", mark.seat() + 1))
                .with_initial_text(self.game.player(mark).name())
                .report(false)
                .interact_text()?;
            if self.game.rename(mark, name.trim()) {
                self.commit();
            }
        }
        let start = Confirm::new()
            .with_prompt("Start Game")
            .default(true)
            .report(false)
            .interact()?;
        if start && self.game.start() {
            self.commit();
        }
        Ok(start)
    }

    /// Board, status lines, and the move menu.
    fn turn(&mut self) -> anyhow::Result<bool> {
        let tiles = Tiles::from(&self.game);
        println!();
        print!("{}", Grid(&tiles));
        println!("{}", self.game.headline());
        if let Some(message) = self.game.congratulations() {
            println!("{}", message.green().bold());
        }
        if self.game.is_draw() {
            println!("{}", "Draw.".yellow());
        }
        println!("{}", self.game.scores());
        let choices = tiles
            .active()
            .map(Choice::Cell)
            .chain([Choice::Reset, Choice::Quit])
            .collect::<Vec<_>>();
        let labels = choices.iter().map(Choice::label).collect::<Vec<_>>();
        let selected = Select::new()
            .with_prompt(format!("{} to move", self.game.to_move()))
            .report(false)
            .items(&labels)
            .default(0)
            .interact()?;
        match choices[selected] {
            Choice::Cell(index) => self.click(&tiles, index),
            Choice::Reset => self.reset(),
            Choice::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn click(&mut self, tiles: &Tiles, index: Index) {
        if let Some(index) = tiles.click(index) {
            let placement = self.game.place(index);
            log::debug!("{}", placement);
            if let Some(mark) = placement.winner() {
                let name = self.game.player(mark).name();
                println!("{}", format!("{} takes the round as {}", name, mark).green());
            }
            if placement.changed() {
                self.commit();
            }
        }
    }

    fn reset(&mut self) {
        self.persistence
            .reset(&mut self.game)
            .inspect_err(|e| log::error!("failed to reset saved game: {:#}", e))
            .ok();
    }

    /// Write-after-mutate. A failed write is logged and play continues.
    fn commit(&mut self) {
        self.persistence
            .save(&self.game)
            .inspect_err(|e| log::error!("failed to save game: {:#}", e))
            .ok();
    }
}
