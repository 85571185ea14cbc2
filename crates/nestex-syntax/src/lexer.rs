use crate::TokenKind;

/// A lexer for TeX/ConTeXt source text.
///
/// ## Overview
///
/// The lexer performs **character-level scanning**, producing a stream of
/// ([`TokenKind`], `&str`) tuples. The ladder, applied to the character at
/// the cursor:
///
/// - **Newlines**: `\n` or `\r`, one character per token
/// - **Whitespace**: maximal run of spaces and tabs
/// - **Words / numbers**: maximal runs of ASCII letters / digits
/// - **Commands**: `\section`, `\begin`, `\%` (single-symbol escapes)
/// - **Comments**: `%` through end of line
/// - **Grouping**: `{ } [ ] ( ) < >`, plus `$` and `@`, one each
/// - **Text**: any other character, one per token
///
/// The ladder is independent of any scanning mode; verbatim opacity is the
/// checker's business, not the lexer's. The lexer never fails and never
/// skips input: every character of the source ends up in exactly one token.
///
/// ## UTF-8 Handling
///
/// Classification is ASCII-only; multi-byte characters fall through to
/// [`TokenKind::Text`] and pass through opaquely. Position tracking uses
/// byte offsets but always advances by whole characters.
///
/// ## Performance Characteristics
///
/// - **Single-pass**: O(n) in the source length
/// - **Zero-copy**: returns `&str` slices into the original source
/// - **Lazy**: implemented as an iterator, tokens produced on demand
///
/// ## Examples
///
/// ```
/// use nestex_syntax::{Lexer, TokenKind};
///
/// let source = r"\begin{itemize}";
/// let tokens: Vec<_> = Lexer::new(source).collect();
///
/// assert_eq!(tokens[0], (TokenKind::Command, "\\begin"));
/// assert_eq!(tokens[1], (TokenKind::LBrace, "{"));
/// assert_eq!(tokens[2], (TokenKind::Word, "itemize"));
/// assert_eq!(tokens[3], (TokenKind::RBrace, "}"));
/// ```
pub struct Lexer<'a> {
    /// The input source text being lexed.
    input: &'a str,
    /// Current byte position in the input.
    position: usize,
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token (kind, text).
    /// If EOF, returns (TokenKind::Eof, "").
    pub fn next_token(&mut self) -> (TokenKind, &'a str) {
        if self.position >= self.input.len() {
            return (TokenKind::Eof, "");
        }

        let start = self.position;
        let rest = &self.input[start..];
        let mut chars = rest.chars();
        let c = chars.next().unwrap();

        let kind = match c {
            '\n' | '\r' => {
                self.position += 1;
                TokenKind::Newline
            }
            ' ' | '\t' => {
                self.position += 1;
                self.eat_while(|n| n == ' ' || n == '\t');
                TokenKind::Whitespace
            }
            '\\' => {
                self.position += 1;
                match self.input[self.position..].chars().next() {
                    Some(next) if is_letter(next) => {
                        // Multi-letter command: \begin
                        self.position += 1;
                        self.eat_while(is_letter);
                    }
                    Some(next) => {
                        // Single-symbol command: \$ or \%
                        self.position += next.len_utf8();
                    }
                    // Trailing backslash at EOF
                    None => {}
                }
                TokenKind::Command
            }
            '%' => {
                self.position += 1;
                self.eat_while(|n| n != '\n' && n != '\r');
                TokenKind::Comment
            }
            c if c.is_ascii_alphabetic() => {
                self.position += 1;
                self.eat_while(is_letter);
                TokenKind::Word
            }
            c if c.is_ascii_digit() => {
                self.position += 1;
                self.eat_while(|n| n.is_ascii_digit());
                TokenKind::Number
            }
            '{' => {
                self.position += 1;
                TokenKind::LBrace
            }
            '}' => {
                self.position += 1;
                TokenKind::RBrace
            }
            '[' => {
                self.position += 1;
                TokenKind::LBracket
            }
            ']' => {
                self.position += 1;
                TokenKind::RBracket
            }
            '(' => {
                self.position += 1;
                TokenKind::LParen
            }
            ')' => {
                self.position += 1;
                TokenKind::RParen
            }
            '<' => {
                self.position += 1;
                TokenKind::LChevron
            }
            '>' => {
                self.position += 1;
                TokenKind::RChevron
            }
            '$' => {
                self.position += 1;
                TokenKind::Dollar
            }
            '@' => {
                self.position += 1;
                TokenKind::At
            }
            _ => {
                self.position += c.len_utf8();
                TokenKind::Text
            }
        };

        (kind, &self.input[start..self.position])
    }

    /// Advances over characters while `test` holds.
    fn eat_while(&mut self, test: impl Fn(char) -> bool) {
        while let Some(n) = self.input[self.position..].chars().next() {
            if test(n) {
                self.position += n.len_utf8();
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = (TokenKind, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let (kind, text) = self.next_token();
        if kind == TokenKind::Eof {
            None
        } else {
            Some((kind, text))
        }
    }
}
