//! Tokenizer for TeX/ConTeXt sources.
//!
//! This crate performs character-level scanning only; it has no notion of
//! nesting or balance. The [`Lexer`](lexer::Lexer) turns a source string
//! into a stream of ([`TokenKind`], `&str`) tuples that the checker crate
//! consumes one at a time.

pub mod lexer;

pub use lexer::Lexer;

/// The lexical class of a token.
///
/// One variant per rule of the scanning ladder. Bracketing characters get a
/// dedicated kind each because the checker dispatches on them individually;
/// everything the grammar does not care about falls into [`TokenKind::Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// A single `\n` or `\r`. Kept separate from [`TokenKind::Whitespace`]
    /// so the checker can drive its line counter.
    Newline,
    /// A maximal run of spaces and tabs.
    Whitespace,
    /// A maximal run of ASCII letters.
    Word,
    /// A maximal run of ASCII digits.
    Number,
    /// `\` plus a maximal run of ASCII letters (`\begin`), or `\` plus one
    /// non-letter character (`\$`).
    Command,
    /// `%` through the end of the line, newline not included.
    Comment,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    LParen,
    RParen,
    LChevron,
    RChevron,
    /// Inline math toggle `$`.
    Dollar,
    /// Verbatim toggle `@`.
    At,
    /// Any other single character.
    Text,
    /// End of input marker, never yielded by the iterator.
    Eof,
}
