/// One kind of grouping construct, with its opening and closing spellings.
///
/// Equality is structural: two symbols match iff they are the same variant
/// *and* carry equal payloads, so `StartStop("itemize")` does not close
/// `StartStop("enumerate")`, while `Brace` always closes `Brace`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// `{` ... `}`
    Brace,
    /// `[` ... `]`
    Bracket,
    /// `(` ... `)`
    Paren,
    /// `<` ... `>`
    Chevron,
    /// `$` ... `$`, inline math
    Dollar,
    /// `@` ... `@`, verbatim
    At,
    /// `\left` ... `\right`
    Delimiter,
    /// `\start<name>` ... `\stop<name>` (ConTeXt environments)
    StartStop(String),
    /// `\begin{<name>}` ... `\end{<name>}` (LaTeX environments)
    BeginEnd(String),
    /// A user-chosen verbatim fence character, same on both sides,
    /// e.g. the `|` in `\type|code|`.
    Other(char),
}

impl Symbol {
    /// The spelling that opens this construct.
    pub fn opening(&self) -> String {
        match self {
            Symbol::Brace => "{".into(),
            Symbol::Bracket => "[".into(),
            Symbol::Paren => "(".into(),
            Symbol::Chevron => "<".into(),
            Symbol::Dollar => "$".into(),
            Symbol::At => "@".into(),
            Symbol::Delimiter => "\\left".into(),
            Symbol::StartStop(name) => format!("\\start{name}"),
            Symbol::BeginEnd(name) => format!("\\begin{{{name}}}"),
            Symbol::Other(c) => c.to_string(),
        }
    }

    /// The spelling that closes this construct.
    pub fn closing(&self) -> String {
        match self {
            Symbol::Brace => "}".into(),
            Symbol::Bracket => "]".into(),
            Symbol::Paren => ")".into(),
            Symbol::Chevron => ">".into(),
            Symbol::Dollar => "$".into(),
            Symbol::At => "@".into(),
            Symbol::Delimiter => "\\right".into(),
            Symbol::StartStop(name) => format!("\\stop{name}"),
            Symbol::BeginEnd(name) => format!("\\end{{{name}}}"),
            Symbol::Other(c) => c.to_string(),
        }
    }

    /// Classifies a verbatim fence character, as written after `\type`.
    ///
    /// Either half of a bracket pair selects that pair, so `\type{code}`
    /// and `\type}code}` both wait for `}`. Anything else fences with the
    /// character itself: `\type|code|`, `\type!code!`.
    pub fn from_fence(c: char) -> Symbol {
        match c {
            '{' | '}' => Symbol::Brace,
            '[' | ']' => Symbol::Bracket,
            '(' | ')' => Symbol::Paren,
            '<' | '>' => Symbol::Chevron,
            _ => Symbol::Other(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellings() {
        assert_eq!(Symbol::Brace.opening(), "{");
        assert_eq!(Symbol::Brace.closing(), "}");
        assert_eq!(Symbol::Delimiter.opening(), "\\left");
        assert_eq!(Symbol::Delimiter.closing(), "\\right");
        assert_eq!(Symbol::StartStop("itemize".into()).opening(), "\\startitemize");
        assert_eq!(Symbol::StartStop("itemize".into()).closing(), "\\stopitemize");
        assert_eq!(Symbol::BeginEnd("align".into()).opening(), "\\begin{align}");
        assert_eq!(Symbol::BeginEnd("align".into()).closing(), "\\end{align}");
        assert_eq!(Symbol::Other('|').opening(), "|");
        assert_eq!(Symbol::Other('|').closing(), "|");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Symbol::Brace, Symbol::Brace);
        assert_ne!(
            Symbol::StartStop("itemize".into()),
            Symbol::StartStop("enumerate".into())
        );
        assert_ne!(
            Symbol::StartStop("itemize".into()),
            Symbol::BeginEnd("itemize".into())
        );
    }

    #[test]
    fn test_fence_classification() {
        assert_eq!(Symbol::from_fence('{'), Symbol::Brace);
        assert_eq!(Symbol::from_fence('}'), Symbol::Brace);
        assert_eq!(Symbol::from_fence('['), Symbol::Bracket);
        assert_eq!(Symbol::from_fence('('), Symbol::Paren);
        assert_eq!(Symbol::from_fence('<'), Symbol::Chevron);
        assert_eq!(Symbol::from_fence('|'), Symbol::Other('|'));
        assert_eq!(Symbol::from_fence('!'), Symbol::Other('!'));
    }
}
