//! Flip state machine
//!
//! Per-flip transitions: idle, one card revealed, then either an immediate
//! match or a pending evaluation. A flip requested while the board is
//! locked is always skipped, so a third flip is impossible.

use crate::command::CommandOutcome;
use crate::error::{Error, Result};
use crate::{evaluate, GridPosition, PendingEvaluation, SimState};

/// Try to flip the card at a grid position
///
/// Well-formed but currently inapplicable requests (locked board, empty
/// cell, card already face-up) resolve to [`CommandOutcome::Skipped`]
/// without mutating anything.
pub(crate) fn try_flip(state: &mut SimState, position: GridPosition) -> Result<CommandOutcome> {
    if state.round.is_locked {
        return Ok(CommandOutcome::Skipped);
    }

    let Some(card_id) = state.board.card_id_at(position) else {
        log::warn!("tried to flip at {position}, but no card was found");
        return Ok(CommandOutcome::Skipped);
    };

    let card = state.board.get(card_id).ok_or(Error::CardNotFound(card_id))?;
    if card.matched || card.revealed {
        return Ok(CommandOutcome::Skipped);
    }

    let is_first_flip = state.revealed_unmatched_count() == 0;

    let card = state
        .board
        .get_mut(card_id)
        .ok_or(Error::CardNotFound(card_id))?;
    card.revealed = true;
    state.bump_version();
    state.mark_changed(card_id);

    if is_first_flip {
        log::debug!("flipped first card at {position}");
        return Ok(CommandOutcome::Success);
    }

    state.round.is_locked = true;

    // A matching pair resolves instantly; no timer is created
    if evaluate::try_immediate_match(state)? {
        return Ok(CommandOutcome::Success);
    }

    state.pending = Some(PendingEvaluation {
        updates_left: state.config.evaluation_delay_updates,
    });
    log::debug!("flipped second card at {position}, evaluation pending");

    Ok(CommandOutcome::Success)
}
