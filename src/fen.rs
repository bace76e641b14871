//! Lightweight view over the fields of a [Forsyth-Edwards Notation] string.
//!
//! Unlike a full position parser, [`Fields`] does not interpret the board: it
//! only splits the serialized position into the parts that need to be
//! rewritten when mirroring and keeps everything else as-is.
//!
//! [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation

use std::fmt;

use anyhow::bail;
use itertools::Itertools;

/// Standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
/// Board without any pieces.
pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";

/// Separates FEN fields.
pub const FIELD_SEPARATOR: char = ' ';
/// Separates rank descriptors within the piece placement field.
pub const RANK_SEPARATOR: char = '/';

/// FEN split on [`FIELD_SEPARATOR`].
///
/// FEN ::=
///       Piece Placement
///   ' ' Side to move
///   ' ' Castling ability
///   ' ' En passant target square
///   ' ' Halfmove clock
///   ' ' Fullmove counter
///
/// Only the first three fields are required. Whatever follows them (usually
/// en passant square and move counters, but EPD operations or nothing at all
/// are accepted too) is stored in `rest` verbatim.
///
/// Splitting is done on every single separator, so consecutive spaces produce
/// empty fields. This keeps `Fields::try_from(s)?.to_string() == s` for any
/// input that has at least three fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fields<'a> {
    /// Rank descriptors separated by [`RANK_SEPARATOR`], rank 8 first.
    pub placement: &'a str,
    /// Normally "w" or "b".
    pub side_to_move: &'a str,
    /// Normally a subset of "KQkq" or "-".
    pub castling: &'a str,
    /// Everything after castling rights.
    pub rest: Vec<&'a str>,
}

impl<'a> TryFrom<&'a str> for Fields<'a> {
    type Error = anyhow::Error;

    fn try_from(input: &'a str) -> anyhow::Result<Self> {
        let mut parts = input.split(FIELD_SEPARATOR);
        let (Some(placement), Some(side_to_move), Some(castling)) =
            (parts.next(), parts.next(), parts.next())
        else {
            bail!(
                "FEN should have at least 3 fields (placement, side to move, castling), got \
                 {}: '{input}'",
                input.split(FIELD_SEPARATOR).count()
            );
        };
        Ok(Self {
            placement,
            side_to_move,
            castling,
            rest: parts.collect(),
        })
    }
}

impl fmt::Display for Fields<'_> {
    /// Joins the fields back with [`FIELD_SEPARATOR`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            [self.placement, self.side_to_move, self.castling]
                .into_iter()
                .chain(self.rest.iter().copied())
                .join(&FIELD_SEPARATOR.to_string())
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn full_fen() {
        let fields = Fields::try_from(STARTING_FEN).unwrap();
        assert_eq!(
            fields,
            Fields {
                placement: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
                side_to_move: "w",
                castling: "KQkq",
                rest: vec!["-", "0", "1"],
            }
        );
        assert_eq!(fields.to_string(), STARTING_FEN);
    }

    #[test]
    fn trimmed_fen() {
        let fields = Fields::try_from("8/8/8/8/8/8/8/8 b -").unwrap();
        assert_eq!(fields.side_to_move, "b");
        assert_eq!(fields.castling, "-");
        assert!(fields.rest.is_empty());
        assert_eq!(fields.to_string(), "8/8/8/8/8/8/8/8 b -");
    }

    #[test]
    fn repeated_separators() {
        let input = "8/8/8/8/8/8/8/8  w - - 0 1 ";
        let fields = Fields::try_from(input).unwrap();
        assert_eq!(fields.side_to_move, "");
        assert_eq!(fields.castling, "w");
        assert_eq!(fields.rest, vec!["-", "-", "0", "1", ""]);
        assert_eq!(fields.to_string(), input);
    }

    #[test]
    fn missing_fields() {
        assert!(Fields::try_from("").is_err());
        assert!(Fields::try_from("8/8/8/8/8/8/8/8").is_err());
        let error = Fields::try_from("8/8/8/8/8/8/8/8 w").unwrap_err();
        assert_eq!(
            error.to_string(),
            "FEN should have at least 3 fields (placement, side to move, castling), got 2: \
             '8/8/8/8/8/8/8/8 w'"
        );
    }
}
