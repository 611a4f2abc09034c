//! Match evaluation
//!
//! One shared rule drives both the immediate shortcut and the delayed
//! timer path: resolve the two revealed-and-unmatched cards with the
//! smallest IDs, regardless of how they were discovered.

use crate::error::{Error, Result};
use crate::{Board, CardId, SimState};

/// Find the two lowest-ID cards that are revealed but not matched
///
/// Returns `None` when fewer than two candidates exist. Selection is
/// deterministic no matter the board's iteration order.
pub(crate) fn two_revealed_unmatched(board: &Board) -> Option<(CardId, CardId)> {
    let mut first: Option<CardId> = None;
    let mut second: Option<CardId> = None;

    for card in board.iter().filter(|c| c.revealed && !c.matched) {
        match first {
            None => first = Some(card.id),
            Some(lowest) if card.id < lowest => {
                second = first;
                first = Some(card.id);
            }
            Some(_) => match second {
                None => second = Some(card.id),
                Some(next) if card.id < next => second = Some(card.id),
                Some(_) => {}
            },
        }
    }

    match (first, second) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    }
}

/// Whether two cards carry the same pair key
pub(crate) fn does_match(board: &Board, a: CardId, b: CardId) -> bool {
    match (board.get(a), board.get(b)) {
        (Some(a), Some(b)) => a.pair_key == b.pair_key,
        _ => false,
    }
}

/// Apply a resolution to the two cards of a turn
///
/// On a match both cards become permanently matched and are stamped with
/// the current state version in the same step as the tag mutation, so no
/// snapshot can observe a half-applied pair. On a mismatch both cards are
/// hidden again. Either way the state version is bumped exactly once.
pub(crate) fn apply_result(state: &mut SimState, a: CardId, b: CardId, is_match: bool) -> Result<()> {
    if is_match {
        let version = state.round.state_version;
        for id in [a, b] {
            let card = state.board.get_mut(id).ok_or(Error::CardNotFound(id))?;
            card.matched = true;
            card.last_changed_version = version;
        }
        state.round.matched_count += 2;
        state.bump_version();

        if let Some(card) = state.board.get(a) {
            log::debug!(
                "match found: pair {} ({}/{})",
                card.pair_key,
                state.round.matched_count,
                state.round.total_cards
            );
        }
    } else {
        for id in [a, b] {
            let card = state.board.get_mut(id).ok_or(Error::CardNotFound(id))?;
            card.revealed = false;
        }
        state.bump_version();
        state.mark_changed(a);
        state.mark_changed(b);

        if let (Some(first), Some(second)) = (state.board.get(a), state.board.get(b)) {
            log::debug!("no match: {} != {}", first.pair_key, second.pair_key);
        }
    }

    Ok(())
}

/// End the current turn: one move completed, board unlocked
pub(crate) fn complete_turn(state: &mut SimState) {
    state.round.moves += 1;
    state.round.is_locked = false;
}

/// Resolve the pair right away if the two revealed cards match
///
/// Used by the flip path on the second flip; a match here ends the turn
/// without ever creating a pending evaluation. Returns `true` when the
/// pair was resolved.
pub(crate) fn try_immediate_match(state: &mut SimState) -> Result<bool> {
    let Some((a, b)) = two_revealed_unmatched(&state.board) else {
        return Ok(false);
    };
    if !does_match(&state.board, a, b) {
        return Ok(false);
    }

    apply_result(state, a, b, true)?;
    complete_turn(state);
    Ok(true)
}

/// Per-tick driver for the delayed evaluation
///
/// Counts the pending evaluation down; on expiry resolves the lowest-ID
/// pair, completes the turn, and destroys the pending marker. Extra
/// revealed cards beyond two are left alone by policy.
pub(crate) fn run(state: &mut SimState) -> Result<()> {
    let Some(pending) = state.pending.as_mut() else {
        return Ok(());
    };

    pending.updates_left = pending.updates_left.saturating_sub(1);
    if pending.updates_left > 0 {
        return Ok(());
    }

    if let Some((a, b)) = two_revealed_unmatched(&state.board) {
        let is_match = does_match(&state.board, a, b);
        apply_result(state, a, b, is_match)?;
    }

    complete_turn(state);
    state.pending = None;
    Ok(())
}
