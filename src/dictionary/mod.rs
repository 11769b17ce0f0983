//! Dictionary record types.
//!
//! A [`Word`](word::Word) is one vocabulary entry; it owns the ordered list
//! of [`Kanji`](kanji::Kanji) records it is composed of. Both types are
//! read-only snapshots of the backing corpus file and serialize to and from
//! its JSON record format.

pub mod kanji;
pub mod word;

pub use kanji::{Kanji, KanjiDetails};
pub use word::Word;
