//! Mirroring a position: the board is flipped top-to-bottom and the colors of
//! all pieces are swapped, so that the side to move sees exactly what the
//! opponent saw in the original position.
//!
//! NOTE: Square order within each rank is left untouched. The result is a
//! vertical flip of the board (a1 <-> a8), not a 180 degree rotation.
//! En passant square and move counters are carried over verbatim.

use itertools::Itertools;

use crate::fen::{Fields, RANK_SEPARATOR};

/// Inverts the case of ASCII letters: white pieces (and castling rights)
/// become black ones and vice versa. Digits, separators and anything else are
/// left unchanged.
///
/// ```
/// use fen_mirror::mirror::swap_case;
///
/// assert_eq!(swap_case("KQkq"), "kqKQ");
/// assert_eq!(swap_case("3R4/p7"), "3r4/P7");
/// ```
#[must_use]
pub fn swap_case(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Passes the move to the other player.
///
/// Only an exact "b" is treated as Black: everything else, including
/// unexpected values, is considered White and becomes "b".
#[must_use]
pub fn flip_side_to_move(side_to_move: &str) -> &'static str {
    if side_to_move == "b" {
        "w"
    } else {
        "b"
    }
}

/// Reverses the order of ranks and swaps piece colors.
///
/// ```
/// use fen_mirror::mirror::mirror_placement;
///
/// assert_eq!(mirror_placement("4k3/8/3P4/8/8/8/8/R3K3"), "r3k3/8/8/8/8/3p4/8/4K3");
/// ```
#[must_use]
pub fn mirror_placement(placement: &str) -> String {
    let flipped = placement.split(RANK_SEPARATOR).rev().join(&RANK_SEPARATOR.to_string());
    swap_case(&flipped)
}

/// Mirrors the position given in Forsyth-Edwards Notation.
///
/// Legality of the position is not checked: any input with at least three
/// space-separated fields is accepted and transformed textually.
///
/// # Errors
///
/// Returns an error if the input has fewer than three fields.
pub fn mirror_fen(fen: &str) -> anyhow::Result<String> {
    let fields = Fields::try_from(fen)?;
    let placement = mirror_placement(fields.placement);
    let castling = swap_case(fields.castling);
    let mirrored = Fields {
        placement: &placement,
        side_to_move: flip_side_to_move(fields.side_to_move),
        castling: &castling,
        rest: fields.rest,
    }
    .to_string();
    log::trace!("mirrored '{fen}' into '{mirrored}'");
    Ok(mirrored)
}
