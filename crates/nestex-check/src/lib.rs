//! # Nestex Balance Checker
//!
//! Single-pass validator for nesting correctness in TeX/ConTeXt-like markup.
//!
//! ## Overview
//!
//! This crate answers one question about a document: **is its nesting
//! well-formed?** It drives the [`nestex_syntax`] lexer over the source and
//! verifies that every opened grouping construct is closed in the correct
//! order:
//!
//! - **Bracket pairs**: `{...}`, `[...]`, `(...)`, `<...>`
//! - **Sized delimiters**: `\left ... \right`
//! - **Named environments**: `\startitemize ... \stopitemize` (ConTeXt) and
//!   `\begin{itemize} ... \end{itemize}` (LaTeX)
//! - **Inline math**: `$ ... $`
//! - **Verbatim fences**: `@ ... @`, `\starttyping ... \stoptyping`,
//!   `\type|...|` with an arbitrary fence character
//!
//! Problems are collected, never thrown: a malformed document is still
//! scanned to completion token by token, and every mismatch or unclosed
//! construct is reported with the source line it was detected on and the
//! line its opener came from.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐    tokens     ┌─────────────┐   Report    ┌───────────┐
//! │ nestex-syntax│ ─────────────▶│   Checker   │ ───────────▶│  caller   │
//! │    Lexer     │               │ mode + stack│             │ (CLI, …)  │
//! └──────────────┘               └─────────────┘             └───────────┘
//! ```
//!
//! The [`Checker`](checker::Checker) owns all mutable state for one scan:
//!
//! - **Mode**: `Normal`, `Math`, or `Verbatim`, gating token interpretation
//! - **Nesting stack**: the constructs opened and not yet validly closed
//! - **Line counter**: 1-based, driven by newline tokens in every mode
//!
//! One checker is created per document and discarded after the scan; scans
//! of different documents share nothing and can run on separate threads
//! freely.
//!
//! ## Examples
//!
//! ```
//! use nestex_check::check;
//!
//! let report = check("a {b (c) d} e");
//! assert!(report.balanced());
//!
//! let report = check("a {b (c d} e)");
//! assert!(!report.balanced());
//! for diagnostic in &report.diagnostics {
//!     println!("{diagnostic}");
//! }
//! ```
//!
//! ### Exporting to JSON
//!
//! The diagnostic types implement `serde::Serialize`:
//!
//! ```
//! use nestex_check::check;
//!
//! let report = check("$x^2");
//! let json = serde_json::to_string_pretty(&report)?;
//! assert!(json.contains("UnterminatedOpen"));
//! # Ok::<(), serde_json::Error>(())
//! ```

/// The mode/stack state machine.
pub mod checker;
/// Typed diagnostic model.
pub mod diagnostics;
/// Grouping symbols and their spellings.
pub mod symbol;

pub use checker::{Checker, check};
pub use diagnostics::{Diagnostic, DiagnosticKind, Report};
pub use symbol::Symbol;
