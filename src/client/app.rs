use crate::Index;
use crate::board::Mark;
use crate::game::Game;
use crate::render::Tiles;
use crate::save::Browser;
use crate::save::Persistence;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_meta::provide_meta_context;

fn storage() -> Option<Persistence<Browser>> {
    Browser::new()
        .inspect_err(|e| log::warn!("saving disabled: {:#}", e))
        .ok()
        .map(Persistence::new)
}

fn commit(game: &Game) {
    if let Some(mut persistence) = storage() {
        persistence
            .save(game)
            .inspect_err(|e| log::error!("failed to save game: {:#}", e))
            .ok();
    }
}

/// Run a transition and save if it reports a change.
fn apply(game: RwSignal<Game>, transition: impl FnOnce(&mut Game) -> bool) {
    if game.try_update(transition).unwrap_or(false) {
        game.with_untracked(commit);
    }
}

fn reset(game: RwSignal<Game>) {
    match storage() {
        Some(mut persistence) => game.update(|g| {
            persistence
                .reset(g)
                .inspect_err(|e| log::error!("failed to reset saved game: {:#}", e))
                .ok();
        }),
        None => game.update(Game::reset),
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let game = RwSignal::new(storage().map(|p| p.load()).unwrap_or_default());
    view! {
        <Title text="Tic-Tac-Toe" />
        <div class="game">
            <Show
                when=move || game.with(Game::start_screen)
                fallback=move || view! { <Play game=game /> }
            >
                <Lobby game=game />
            </Show>
        </div>
    }
}

/// Name inputs and the start button.
#[component]
fn Lobby(game: RwSignal<Game>) -> impl IntoView {
    let name = move |mark: Mark| move || game.with(|g| g.player(mark).name().to_string());
    let rename = move |mark: Mark| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            apply(game, |g| g.rename(mark, value))
        }
    };
    view! {
        <div>
            <div class="input-container">
                <label>
                    "Player 1 Name:"
                    <input type="text" prop:value=name(Mark::X) on:input=rename(Mark::X) />
                </label>
                <label>
                    "Player 2 Name:"
                    <input type="text" prop:value=name(Mark::O) on:input=rename(Mark::O) />
                </label>
            </div>
            <button class="start-button" on:click=move |_| apply(game, Game::start)>
                "Start Game"
            </button>
        </div>
    }
}

/// Grid, status, congratulations, scores, reset.
#[component]
fn Play(game: RwSignal<Game>) -> impl IntoView {
    let tiles = Signal::derive(move || game.with(|g| Tiles::from(g)));
    let click = Callback::new(move |index: Index| apply(game, |g| g.place(index).changed()));
    view! {
        <Squares tiles=tiles on_click=click />
        <div class="game-info">
            <div class="status">{move || game.with(Game::headline)}</div>
            {move || game.with(Game::congratulations).map(|message| view! { <p>{message}</p> })}
            <div class="scores">{move || game.with(Game::scores)}</div>
            <button on:click=move |_| reset(game)>"Reset Game"</button>
        </div>
    }
}

/// The nine tiles as buttons. Inert tiles are disabled; live ones
/// forward their index.
#[component]
fn Squares(tiles: Signal<Tiles>, on_click: Callback<Index>) -> impl IntoView {
    let rows = move || {
        let current = tiles.get();
        let rows = current
            .rows()
            .map(|row| {
                let squares = row
                    .iter()
                    .copied()
                    .map(|tile| {
                        let forward = move |_: leptos::ev::MouseEvent| {
                            if let Some(index) = tiles.get_untracked().click(tile.index) {
                                on_click.run(index);
                            }
                        };
                        view! {
                            <button
                                class="square"
                                class:winning={tile.highlight}
                                disabled={!tile.active}
                                on:click=forward
                            >
                                {tile.label()}
                            </button>
                        }
                    })
                    .collect_view();
                view! { <div class="board-row">{squares}</div> }
            })
            .collect_view();
        rows
    };
    view! { <div class="board">{rows}</div> }
}
