//! Win detection

use crate::{EventQueue, GameEvent, SimState};

/// Check for the win condition and fire the one-time win event
///
/// Runs every tick after evaluation. Once the game is won the board stays
/// locked and every later call is a no-op.
pub(crate) fn run(state: &mut SimState, events: &EventQueue) {
    let round = &mut state.round;
    if round.is_won || round.total_cards == 0 || round.matched_count < round.total_cards {
        return;
    }

    round.is_locked = true;
    round.is_won = true;
    round.state_version += 1;

    events.push(GameEvent::GameWon {
        moves: round.moves,
        total_cards: round.total_cards,
        state_version: round.state_version,
    });
    log::debug!("game won in {} moves", round.moves);
}
