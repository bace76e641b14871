//! Mirrors chess positions serialized in [Forsyth-Edwards Notation] (FEN):
//! the rank order is reversed and the piece colors, side to move and castling
//! rights are swapped. The resulting position is the same game seen from the
//! other side of the board, which is handy for checking that evaluation is
//! symmetric.
//!
//! ```
//! use fen_mirror::mirror::mirror_fen;
//!
//! assert_eq!(
//!     mirror_fen("4k3/8/8/8/8/8/8/4K3 w - - 10 5").unwrap(),
//!     "4k3/8/8/8/8/8/8/4K3 b - - 10 5"
//! );
//! ```
//!
//! [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation

#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod fen;
pub mod mirror;

pub use mirror::mirror_fen;
