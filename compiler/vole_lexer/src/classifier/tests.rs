use pretty_assertions::assert_eq;
use vole_tokenizer::tokenize;

use crate::classifier::classify;
use crate::lexeme::{Lexeme, LexemeKind};

fn lex(source: &str) -> Vec<Lexeme> {
    let mut stream = tokenize(source);
    classify(&mut stream)
}

/// (kind, content) pairs, the shape most assertions care about.
fn tagged(source: &str) -> Vec<(LexemeKind, String)> {
    lex(source)
        .into_iter()
        .map(|l| (l.kind, l.content))
        .collect()
}

fn eol_count(source: &str) -> usize {
    lex(source)
        .iter()
        .filter(|l| l.kind == LexemeKind::Eol)
        .count()
}

// === Function declarations ===

#[test]
fn declaration_with_typed_parameters_and_return() {
    assert_eq!(
        tagged("foo(a int, b string) bool"),
        vec![
            (LexemeKind::FunctionDeclaration, "foo(".into()),
            (LexemeKind::Argument, "a".into()),
            (LexemeKind::ArgumentType, "int".into()),
            (LexemeKind::Argument, "b".into()),
            (LexemeKind::ArgumentType, "string".into()),
            (LexemeKind::ReturnType, "bool".into()),
        ]
    );
}

#[test]
fn declaration_requires_line_start() {
    // Indented, the same shape is a call.
    assert_eq!(
        tagged("  foo(y)"),
        vec![
            (LexemeKind::Function, "foo(".into()),
            (LexemeKind::Argument, "y".into()),
        ]
    );
}

#[test]
fn declaration_on_second_line_uses_line_start_offset() {
    let lexemes = tagged("x = 1\nfoo(a int) bool");
    assert!(lexemes.contains(&(LexemeKind::FunctionDeclaration, "foo(".into())));
}

#[test]
fn named_return_pair() {
    assert_eq!(
        tagged("foo(a int) err error"),
        vec![
            (LexemeKind::FunctionDeclaration, "foo(".into()),
            (LexemeKind::Argument, "a".into()),
            (LexemeKind::ArgumentType, "int".into()),
            (LexemeKind::ReturnIdentifier, "err".into()),
            (LexemeKind::ReturnType, "error".into()),
        ]
    );
}

#[test]
fn multiple_bare_returns() {
    assert_eq!(
        tagged("foo() int, string"),
        vec![
            (LexemeKind::FunctionDeclaration, "foo(".into()),
            (LexemeKind::ReturnType, "int".into()),
            (LexemeKind::ReturnType, "string".into()),
        ]
    );
}

#[test]
fn declaration_without_returns_resets_mode() {
    // Nothing after the close paren: the trailing word on the next line
    // is not a return type.
    assert_eq!(
        tagged("foo(a int)\nbar"),
        vec![
            (LexemeKind::FunctionDeclaration, "foo(".into()),
            (LexemeKind::Argument, "a".into()),
            (LexemeKind::ArgumentType, "int".into()),
            (LexemeKind::Eol, String::new()),
            (LexemeKind::Invalid, "bar".into()),
        ]
    );
}

// === Calls and depth ===

#[test]
fn call_after_assignment() {
    assert_eq!(
        tagged("x = foo(y)"),
        vec![
            (LexemeKind::Identifier, "x".into()),
            (LexemeKind::AssignmentOperator, "=".into()),
            (LexemeKind::Function, "foo(".into()),
            (LexemeKind::Argument, "y".into()),
        ]
    );
}

#[test]
fn nested_calls_close_exactly_once() {
    // Arguments mode must survive the inner close; the word after the
    // outer close is back outside any list.
    assert_eq!(
        tagged("x = f(g(y) w) z"),
        vec![
            (LexemeKind::Identifier, "x".into()),
            (LexemeKind::AssignmentOperator, "=".into()),
            (LexemeKind::Function, "f(".into()),
            (LexemeKind::Function, "g(".into()),
            (LexemeKind::Argument, "y".into()),
            (LexemeKind::Argument, "w".into()),
            (LexemeKind::Invalid, "z".into()),
        ]
    );
}

#[test]
fn dotted_call_merges_and_retags() {
    assert_eq!(
        tagged("x = a.b(c)"),
        vec![
            (LexemeKind::Identifier, "x".into()),
            (LexemeKind::AssignmentOperator, "=".into()),
            (LexemeKind::Function, "a.b(".into()),
            (LexemeKind::Argument, "c".into()),
        ]
    );
}

#[test]
fn string_and_number_arguments() {
    assert_eq!(
        tagged(r#"x = f("s", 2)"#),
        vec![
            (LexemeKind::Identifier, "x".into()),
            (LexemeKind::AssignmentOperator, "=".into()),
            (LexemeKind::Function, "f(".into()),
            (LexemeKind::Argument, "\"s\"".into()),
            (LexemeKind::Argument, "2".into()),
        ]
    );
}

// === Identifier chains and assignment ===

#[test]
fn dotted_chain_is_one_lexeme() {
    assert_eq!(
        tagged("a.b.c"),
        vec![(LexemeKind::Identifier, "a.b.c".into())]
    );
}

#[test]
fn chain_tail_requires_adjacency() {
    // A spaced word after a chain is not part of it.
    assert_eq!(
        tagged("a.b foo"),
        vec![
            (LexemeKind::Identifier, "a.b".into()),
            (LexemeKind::Invalid, "foo".into()),
        ]
    );
}

#[test]
fn definition_header_after_chain() {
    // The word pair after the chain is an ordinary definition header,
    // not more chain.
    assert_eq!(
        tagged("a.b c d"),
        vec![
            (LexemeKind::Identifier, "a.b".into()),
            (LexemeKind::Definition, "c".into()),
            (LexemeKind::DefinitionClass, "d".into()),
        ]
    );
}

#[test]
fn dotted_assignment_target() {
    assert_eq!(
        tagged("a.b = 1"),
        vec![
            (LexemeKind::Identifier, "a.b".into()),
            (LexemeKind::AssignmentOperator, "=".into()),
            (LexemeKind::Invalid, "1".into()),
        ]
    );
}

#[test]
fn compound_assignment_operator() {
    assert_eq!(
        tagged("x += 2"),
        vec![
            (LexemeKind::Identifier, "x".into()),
            (LexemeKind::AssignmentOperator, "+=".into()),
            (LexemeKind::Invalid, "2".into()),
        ]
    );
}

// === Directives ===

#[test]
fn directive_merges_adjacent_keyword() {
    assert_eq!(
        tagged("#import"),
        vec![(LexemeKind::Directive, "#import".into())]
    );
}

#[test]
fn bare_marker_is_dropped() {
    assert_eq!(tagged("#"), vec![]);
}

#[test]
fn marker_with_gap_is_dropped() {
    // The word survives on its own (unclassifiable), the marker does not.
    assert_eq!(
        tagged("# import"),
        vec![(LexemeKind::Invalid, "import".into())]
    );
}

// === Comments, definitions, fallbacks ===

#[test]
fn comments_pass_through() {
    assert_eq!(
        tagged("// hi\n/* there */"),
        vec![
            (LexemeKind::Comment, "// hi".into()),
            (LexemeKind::Eol, String::new()),
            (LexemeKind::Comment, "/* there */".into()),
        ]
    );
}

#[test]
fn type_definition_header() {
    assert_eq!(
        tagged("point struct"),
        vec![
            (LexemeKind::Definition, "point".into()),
            (LexemeKind::DefinitionClass, "struct".into()),
        ]
    );
}

#[test]
fn stray_close_paren_is_invalid() {
    assert_eq!(tagged(")"), vec![(LexemeKind::Invalid, ")".into())]);
}

#[test]
fn lone_word_is_invalid() {
    assert_eq!(tagged("orphan"), vec![(LexemeKind::Invalid, "orphan".into())]);
}

#[test]
fn malformed_input_never_panics() {
    let out = lex("((((${ , . == }}}} \"s\" 0.5");
    assert!(out.iter().all(|l| l.kind == LexemeKind::Invalid));
}

// === Line transitions ===

#[test]
fn one_eol_per_line_transition() {
    assert_eq!(eol_count("a()\nb()\nc()"), 2);
}

#[test]
fn no_eol_for_first_line() {
    assert_eq!(eol_count("a()"), 0);
}

#[test]
fn blank_lines_collapse_to_one_transition() {
    // Line jumps 1 -> 3 in one step: a single Eol.
    assert_eq!(eol_count("a()\n\nb()"), 1);
}

#[test]
fn no_trailing_eol() {
    let lexemes = lex("a()\nb()\n");
    assert_ne!(lexemes.last().map(|l| l.kind), Some(LexemeKind::Eol));
}

#[test]
fn line_change_resets_mode() {
    // The argument list left open on line 1 does not leak into line 2.
    // `a` is the last word of its line with no lookahead, so it is
    // unplaceable even inside the list.
    assert_eq!(
        tagged("x = f(a\nb"),
        vec![
            (LexemeKind::Identifier, "x".into()),
            (LexemeKind::AssignmentOperator, "=".into()),
            (LexemeKind::Function, "f(".into()),
            (LexemeKind::Invalid, "a".into()),
            (LexemeKind::Eol, String::new()),
            (LexemeKind::Invalid, "b".into()),
        ]
    );
}

// === Positions ===

#[test]
fn lexeme_positions_come_from_first_token() {
    let lexemes = lex("x = a.b(c)");
    let call = lexemes
        .iter()
        .find(|l| l.kind == LexemeKind::Function)
        .map(|l| (l.offset, l.line));
    // "a" starts at byte 4 on line 1.
    assert_eq!(call, Some((4, 1)));
}

#[test]
fn lexeme_length_covers_indent() {
    // `b` carries no indent, the dot none, `a` none: length 3 for "a.b";
    // the identifier before `=` carries its own bytes only.
    let lexemes = lex("a.b = 1");
    assert_eq!(lexemes[0].length, 3);
}
