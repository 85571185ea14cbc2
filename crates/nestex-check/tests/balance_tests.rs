use nestex_check::{DiagnosticKind, check};

#[test]
fn test_well_formed_constructs_concatenated() {
    let input = "\
before {a} [b] (c) $d$ \\left( e \\right) after
\\startitemize
  item one
\\stopitemize
\\begin{quote}
  quoted $x + y$
\\end{quote}
";
    let report = check(input);
    assert!(report.balanced());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_nested_constructs() {
    let input = "\\begin{a}\\startb{[($\\left(\\right)$)]}\\stopb\\end{a}";
    assert!(check(input).balanced());
}

#[test]
fn test_removed_closer_reports_unterminated_open() {
    // `[b]` with its closer removed.
    let report = check("x {a} [b (c) y");
    assert!(!report.balanced());
    assert!(matches!(
        &report.diagnostics[0].kind,
        DiagnosticKind::UnterminatedOpen { expected, opener, opened_at }
            if expected == "]" && opener == "[" && *opened_at == 1
    ));
}

#[test]
fn test_swapped_closer_reports_mismatch() {
    let report = check("{a]");
    assert!(!report.balanced());
    assert!(matches!(
        &report.diagnostics[0].kind,
        DiagnosticKind::MismatchedClose { got, expected, opener, opened_at }
            if got == "]" && expected == "}" && opener == "{" && *opened_at == 1
    ));
}

#[test]
fn test_nesting_order_is_respected() {
    assert!(check("{ [ ] }").balanced());

    let report = check("{ [ } ]");
    assert!(!report.balanced());
    assert!(matches!(
        &report.diagnostics[0].kind,
        DiagnosticKind::MismatchedClose { got, expected, .. }
            if got == "}" && expected == "]"
    ));
}

#[test]
fn test_math_spans() {
    assert!(check("$a$").balanced());
    assert!(check("$a$ b $c$").balanced());
    assert!(!check("$a").balanced());
}

#[test]
fn test_verbatim_content_is_opaque() {
    // The unmatched `{` sits inside the fence and is never flagged.
    assert!(check("\\type|a{b|").balanced());
    assert!(check("\\type|a|").balanced());
    assert!(check("@ $ { [ @").balanced());
}

#[test]
fn test_diagnostic_line_numbers_are_exact() {
    // Opener on line 3, EOF on line 10.
    let input = "line one\nline two\n{ opener\n4\n5\n6\n7\n8\n9\nten";
    let report = check(input);
    assert_eq!(report.diagnostics.len(), 1);
    let diagnostic = &report.diagnostics[0];
    assert_eq!(diagnostic.line, 10);
    assert!(matches!(
        diagnostic.kind,
        DiagnosticKind::UnterminatedOpen { opened_at: 3, .. }
    ));
}

#[test]
fn test_scenario_balanced() {
    let report = check("a {b (c) d} e");
    assert!(report.balanced());
    assert!(report.diagnostics.is_empty());
}

#[test]
fn test_scenario_mismatched() {
    let report = check("a {b (c d} e)");
    assert!(!report.balanced());
    assert!(matches!(
        &report.diagnostics[0].kind,
        DiagnosticKind::MismatchedClose { got, expected, opener, opened_at }
            if got == "}" && expected == ")" && opener == "(" && *opened_at == 1
    ));
}

#[test]
fn test_unopened_close() {
    let report = check("a } b");
    assert!(!report.balanced());
    assert!(matches!(
        &report.diagnostics[0].kind,
        DiagnosticKind::UnopenedClose { closer } if closer == "}"
    ));
}

#[test]
fn test_malformed_document_is_scanned_to_completion() {
    // Early garbage must not stop later problems from being found.
    let report = check(") a\n} b\n{ c");
    assert_eq!(report.diagnostics.len(), 3);
    assert_eq!(report.diagnostics[0].line, 1);
    assert_eq!(report.diagnostics[1].line, 2);
    assert!(matches!(
        report.diagnostics[2].kind,
        DiagnosticKind::UnterminatedOpen { opened_at: 3, .. }
    ));
}

#[test]
fn test_report_rendering() {
    let report = check("(\n}");
    let rendered = report.to_string();
    assert!(rendered.contains(
        "Line 2: unexpected \"}\", expected \")\" (to close \"(\" from line 1)"
    ));
    assert!(rendered.contains(
        "Unexpected end of input, expected \")\" (to close \"(\" from line 1)"
    ));
}

#[test]
fn test_crlf_counts_one_line_per_newline_char() {
    // `\r` and `\n` are each a newline token; a CRLF pair advances twice,
    // consistently for openers and closers alike.
    let report = check("{\r\n");
    assert!(matches!(
        report.diagnostics[0].kind,
        DiagnosticKind::UnterminatedOpen { opened_at: 1, .. }
    ));
    assert_eq!(report.diagnostics[0].line, 3);
}

#[test]
fn test_multibyte_text_is_plain_content() {
    assert!(check("{ Émilie Noether — ∀x }").balanced());
}
