//! The synchronous game loop.

use anyhow::Result;
use log::{debug, info};

use crate::core::{GameState, PieceSource};
use crate::ports::{Display, InputSource};
use crate::types::{GameAction, GameStatus, TickOutcome, GAME_OVER_MESSAGE, VICTORY_MESSAGE};

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    Quit,
}

impl SessionOutcome {
    fn from_status(status: GameStatus) -> Option<Self> {
        match status {
            GameStatus::Playing => None,
            GameStatus::Won => Some(SessionOutcome::Won),
            GameStatus::Lost => Some(SessionOutcome::Lost),
        }
    }

    fn message(self) -> Option<&'static str> {
        match self {
            SessionOutcome::Won => Some(VICTORY_MESSAGE),
            SessionOutcome::Lost => Some(GAME_OVER_MESSAGE),
            SessionOutcome::Quit => None,
        }
    }
}

/// Run one session until the game is won, lost, or the player quits.
///
/// Every iteration renders, waits at most one drop interval for an action,
/// applies it, then applies exactly one gravity tick. A soft drop is an
/// extra tick on top of that one. Errors from either collaborator end the
/// session immediately.
pub fn run<S, D, I>(
    state: &mut GameState<S>,
    display: &mut D,
    input: &mut I,
) -> Result<SessionOutcome>
where
    S: PieceSource,
    D: Display + ?Sized,
    I: InputSource + ?Sized,
{
    input.set_pace_ms(state.drop_interval_ms());

    if let Some(outcome) = SessionOutcome::from_status(state.status()) {
        return finish(state, display, outcome);
    }

    loop {
        display.render(state.board(), state.active(), state.score(), state.win_score())?;

        let action = input.poll_key(state.drop_interval_ms())?;
        let outcome = match action {
            None => TickOutcome::Continuing,
            Some(GameAction::Quit) => {
                info!("quit at score {}", state.score());
                return Ok(SessionOutcome::Quit);
            }
            Some(GameAction::SoftDrop) => gravity(state, input),
            Some(action) => {
                debug!("action {:?}", action);
                state.apply_action(action);
                TickOutcome::Continuing
            }
        };

        let outcome = if outcome.is_terminal() {
            outcome
        } else {
            gravity(state, input)
        };

        match outcome {
            TickOutcome::GameOver => return finish(state, display, SessionOutcome::Lost),
            TickOutcome::Victory => return finish(state, display, SessionOutcome::Won),
            TickOutcome::Continuing | TickOutcome::Settled => {}
        }
    }
}

/// One tick, forwarding any pace change to the input layer.
fn gravity<S, I>(state: &mut GameState<S>, input: &mut I) -> TickOutcome
where
    S: PieceSource,
    I: InputSource + ?Sized,
{
    let outcome = state.tick();
    if let Some(ms) = state.take_last_event().and_then(|event| event.drop_interval_ms) {
        input.set_pace_ms(ms);
    }
    outcome
}

fn finish<S, D>(
    state: &GameState<S>,
    display: &mut D,
    outcome: SessionOutcome,
) -> Result<SessionOutcome>
where
    S: PieceSource,
    D: Display + ?Sized,
{
    display.render(state.board(), state.active(), state.score(), state.win_score())?;
    if let Some(text) = outcome.message() {
        display.show_message(text)?;
    }
    info!("session ended {:?} with score {}", outcome, state.score());
    Ok(outcome)
}
