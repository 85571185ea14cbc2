use std::iter::Peekable;

use nestex_syntax::{Lexer, TokenKind};

use crate::diagnostics::{Diagnostic, DiagnosticKind, Report};
use crate::symbol::Symbol;

/// The lexical interpretation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Math,
    Verbatim,
}

/// A symbol plus the line its opener appeared on. Stack-internal.
#[derive(Debug)]
struct LocatedSymbol {
    symbol: Symbol,
    line: u32,
}

/// The balance checker for one document.
///
/// Pulls tokens from the lexer one at a time, switching between `Normal`,
/// `Math` and `Verbatim` interpretation and maintaining the stack of open
/// constructs. All problems are collected into the final [`Report`]; the
/// scan itself cannot fail and always runs to the end of the input.
///
/// A checker is created per document, consumed by [`Checker::check`], and
/// shares nothing with other scans.
pub struct Checker<'a> {
    lexer: Peekable<Lexer<'a>>,
    mode: Mode,
    /// Mode to restore when the current verbatim fence closes. A fence
    /// opened inside math returns to math, not to normal.
    return_mode: Mode,
    line: u32,
    stack: Vec<LocatedSymbol>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Checker<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: Lexer::new(input).peekable(),
            mode: Mode::Normal,
            return_mode: Mode::Normal,
            line: 1,
            stack: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Runs the scan to the end of the input and reports the result.
    pub fn check(mut self) -> Report {
        while let Some((kind, text)) = self.bump() {
            match self.mode {
                Mode::Normal | Mode::Math => self.scan_token(kind, text),
                Mode::Verbatim => self.scan_verbatim(text),
            }
        }

        // Whatever is still open at end of input was never closed. Drained
        // innermost-first: the top of the stack is the closer the document
        // needed next.
        while let Some(open) = self.stack.pop() {
            self.report(DiagnosticKind::UnterminatedOpen {
                expected: open.symbol.closing(),
                opener: open.symbol.opening(),
                opened_at: open.line,
            });
        }

        Report {
            diagnostics: self.diagnostics,
        }
    }

    /// Consumes the next token, driving the line counter. Newlines count
    /// in every mode, verbatim included, so later diagnostics never drift.
    fn bump(&mut self) -> Option<(TokenKind, &'a str)> {
        let (kind, text) = self.lexer.next()?;
        if kind == TokenKind::Newline {
            self.line += 1;
        }
        Some((kind, text))
    }

    fn peek(&mut self) -> TokenKind {
        self.lexer
            .peek()
            .map(|(kind, _)| *kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn peek_text(&mut self) -> &'a str {
        self.lexer.peek().map(|(_, text)| *text).unwrap_or("")
    }

    fn skip_blank(&mut self) {
        while matches!(self.peek(), TokenKind::Whitespace | TokenKind::Newline) {
            self.bump();
        }
    }

    /// Normal/math transition table. The two modes differ only in the
    /// direction of the `$` toggle.
    fn scan_token(&mut self, kind: TokenKind, text: &str) {
        match kind {
            TokenKind::Command => self.scan_command(text),
            TokenKind::LBrace => self.push(Symbol::Brace),
            TokenKind::RBrace => self.pop(Symbol::Brace),
            TokenKind::LBracket => self.push(Symbol::Bracket),
            TokenKind::RBracket => self.pop(Symbol::Bracket),
            TokenKind::LParen => self.push(Symbol::Paren),
            TokenKind::RParen => self.pop(Symbol::Paren),
            TokenKind::LChevron => self.push(Symbol::Chevron),
            TokenKind::RChevron => self.pop(Symbol::Chevron),
            TokenKind::Dollar => {
                if self.mode == Mode::Math {
                    self.pop(Symbol::Dollar);
                    self.mode = Mode::Normal;
                } else {
                    self.push(Symbol::Dollar);
                    self.mode = Mode::Math;
                }
            }
            // Unlike `$`, an opening `@` always enters verbatim; the
            // closing `@` is recognized by the verbatim rule instead of
            // being re-scanned here.
            TokenKind::At => {
                self.push(Symbol::At);
                self.enter_verbatim();
            }
            _ => {}
        }
    }

    /// Dispatches on a command token's text.
    ///
    /// `\begin`, `\end`, `\left`, `\right` and `\type` must match the whole
    /// token; `\start`/`\stop` strip by prefix because the environment name
    /// is glued onto the command (`\startitemize`).
    fn scan_command(&mut self, text: &str) {
        match text {
            "\\starttyping" => {
                self.push(Symbol::StartStop("typing".into()));
                self.enter_verbatim();
            }
            "\\begin" => {
                if let Some(name) = self.group_argument() {
                    self.push(Symbol::BeginEnd(name));
                }
            }
            "\\end" => {
                if let Some(name) = self.group_argument() {
                    self.pop(Symbol::BeginEnd(name));
                }
            }
            "\\left" => {
                self.delimiter_argument();
                self.push(Symbol::Delimiter);
            }
            "\\right" => {
                self.delimiter_argument();
                self.pop(Symbol::Delimiter);
            }
            "\\type" => {
                if let Some(fence) = self.delimiter_argument() {
                    self.push(Symbol::from_fence(fence));
                    self.enter_verbatim();
                }
            }
            _ => {
                if let Some(name) = text.strip_prefix("\\start") {
                    self.push(Symbol::StartStop(name.to_string()));
                } else if let Some(name) = text.strip_prefix("\\stop") {
                    self.pop(Symbol::StartStop(name.to_string()));
                }
            }
        }
    }

    /// Verbatim rule: the current token either spells the closing fence of
    /// the innermost open construct, or it is opaque content.
    fn scan_verbatim(&mut self, text: &str) {
        let closes = match self.stack.last() {
            Some(top) => top.symbol.closing() == text,
            // The fence symbol is pushed before the mode switch, so the
            // stack cannot be empty here; if it somehow is, leave verbatim
            // rather than wedge the scan.
            None => true,
        };
        if closes {
            if let Some(open) = self.stack.pop() {
                log::trace!("-- {:?} (verbatim fence closed)", open.symbol);
            }
            self.mode = self.return_mode;
        }
    }

    fn enter_verbatim(&mut self) {
        self.return_mode = self.mode;
        self.mode = Mode::Verbatim;
    }

    /// Parses the `{name}` argument of `\begin` / `\end`.
    ///
    /// Returns `None` when no `{` follows (the command then has no nesting
    /// effect). Tokens after the name are consumed through the closing `}`
    /// and ignored, so `\begin{align*}` still yields `align`.
    fn group_argument(&mut self) -> Option<String> {
        self.skip_blank();
        if self.peek() != TokenKind::LBrace {
            return None;
        }
        self.bump();
        self.skip_blank();
        let name = if self.peek() == TokenKind::Word {
            let name = self.peek_text().to_string();
            self.bump();
            name
        } else {
            String::new()
        };
        while !matches!(self.peek(), TokenKind::RBrace | TokenKind::Eof) {
            self.bump();
        }
        if self.peek() == TokenKind::RBrace {
            self.bump();
        }
        Some(name)
    }

    /// Consumes the single delimiter token after `\left`, `\right` or
    /// `\type` and returns its first character.
    fn delimiter_argument(&mut self) -> Option<char> {
        self.skip_blank();
        let (_, text) = self.bump()?;
        text.chars().next()
    }

    fn push(&mut self, symbol: Symbol) {
        log::trace!("++ {:?} at line {}", symbol, self.line);
        self.stack.push(LocatedSymbol {
            symbol,
            line: self.line,
        });
    }

    /// Closes the innermost open construct, or reports why it cannot.
    ///
    /// On a mismatch the stack is left unchanged: the wrong closer is
    /// reported and dropped, and the construct stays open so the true
    /// closer can still match later in the document.
    fn pop(&mut self, symbol: Symbol) {
        log::trace!("-- {:?} at line {}", symbol, self.line);
        match self.stack.last() {
            None => self.report(DiagnosticKind::UnopenedClose {
                closer: symbol.closing(),
            }),
            Some(top) if top.symbol == symbol => {
                self.stack.pop();
            }
            Some(top) => {
                let kind = DiagnosticKind::MismatchedClose {
                    got: symbol.closing(),
                    expected: top.symbol.closing(),
                    opener: top.symbol.opening(),
                    opened_at: top.line,
                };
                self.report(kind);
            }
        }
    }

    fn report(&mut self, kind: DiagnosticKind) {
        let diagnostic = Diagnostic {
            line: self.line,
            kind,
        };
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }
}

/// Scans one document and returns its report.
pub fn check(input: &str) -> Report {
    Checker::new(input).check()
}
