//! Deterministic board construction

use crate::error::{Error, Result};
use crate::{Card, CardId, GameRng, GridPosition, PairKey, RoundState, SimState};

/// Build a fresh board from `state.config`
///
/// Destroys all existing cards, deals a shuffled deck of pairs onto the
/// grid row-major, and resets the round state for the new game. The seed
/// alone determines the arrangement.
///
/// Fails with [`Error::StructuralInvariant`] before any mutation if the
/// dimensions cannot produce a playable board.
pub(crate) fn build_board(state: &mut SimState) -> Result<()> {
    let config = state.config;
    if config.columns <= 0 || config.rows <= 0 {
        return Err(Error::StructuralInvariant(format!(
            "board dimensions must be positive, got {}x{}",
            config.columns, config.rows
        )));
    }

    let total = (config.columns * config.rows) as usize;
    if total % 2 != 0 {
        return Err(Error::StructuralInvariant(format!(
            "board size must be even, got {}x{} = {}",
            config.columns, config.rows, total
        )));
    }

    // Each pair key in 0..total/2 exactly twice
    let mut deck: Vec<PairKey> = Vec::with_capacity(total);
    for key in 0..(total / 2) as u32 {
        deck.push(PairKey(key));
        deck.push(PairKey(key));
    }

    let mut rng = GameRng::new(config.seed);
    rng.shuffle(&mut deck);

    state.board.clear();
    for (index, pair_key) in deck.into_iter().enumerate() {
        let x = index as i32 % config.columns;
        let y = index as i32 / config.columns;
        state.board.insert(Card::new(
            CardId::new(index as u32),
            GridPosition::new(x, y),
            pair_key,
        ));
    }

    state.pending = None;
    state.round = RoundState {
        total_cards: total as u32,
        ..RoundState::default()
    };

    Ok(())
}
