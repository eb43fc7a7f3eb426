//! Tokenizer properties over arbitrary report-like input.

use proptest::prelude::*;
use rstest::rstest;
use turnscan::parser::{Lexer, SyntaxKind, tokenize};

/// Characters that show up in reports, plus a control character the lexer
/// cannot classify and a non-ASCII letter.
const ALPHABET: &str = "[a-zA-Z0-9 ,\\-=#()/\\\\:.\t\r\n\u{1}é]{0,120}";

proptest! {
    #[test]
    fn prop_tokens_tile_the_input(input in ALPHABET) {
        let mut rebuilt = String::new();
        for token in tokenize(&input) {
            for trivia in &token.leading_trivia {
                rebuilt.push_str(trivia.span.text(&input));
            }
            rebuilt.push_str(token.span.text(&input));
        }
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn prop_positions_match_offsets(input in ALPHABET) {
        for token in tokenize(&input) {
            let before = &input[..token.span.start as usize];
            let line = 1 + before.matches('\n').count() as u32;
            let line_start = before.rfind('\n').map_or(0, |i| i + 1);
            let column = (token.span.start as usize - line_start) as u32 + 1;
            prop_assert_eq!(token.span.line, line);
            prop_assert_eq!(token.span.column, column);
        }
    }

    #[test]
    fn prop_trivia_never_reaches_the_parser(input in ALPHABET) {
        let tokens = tokenize(&input);
        prop_assert!(tokens.iter().all(|t| !t.kind.is_trivia()));
        prop_assert!(tokens.iter().all(|t| t.leading_trivia.iter().all(|tr| tr.kind.is_trivia())));
        prop_assert_eq!(tokens.iter().filter(|t| t.kind == SyntaxKind::EOI).count(), 1);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(SyntaxKind::EOI));
    }

    #[test]
    fn prop_eoi_is_stable(input in ALPHABET) {
        let mut lexer = Lexer::new(&input);
        let mut eoi = lexer.next_token();
        while eoi.kind != SyntaxKind::EOI {
            eoi = lexer.next_token();
        }
        prop_assert_eq!(eoi.span.start as usize, input.len());
        for _ in 0..3 {
            prop_assert_eq!(&lexer.next_token(), &eoi);
        }
    }

    #[test]
    fn prop_crlf_lexes_like_lf(input in "[a-zA-Z0-9 ,\\-#()\\\\:\n]{0,120}") {
        let crlf = input.replace('\n', "\r\n");
        let lf_tokens = tokenize(&input);
        let crlf_tokens = tokenize(&crlf);
        let lf: Vec<_> = lf_tokens.iter().map(|t| (t.kind, t.text, t.span.line, t.span.column)).collect();
        let crlf: Vec<_> = crlf_tokens.iter().map(|t| (t.kind, t.text, t.span.line, t.span.column)).collect();
        prop_assert_eq!(lf, crlf);
    }
}

#[rstest]
#[case("Tribe", SyntaxKind::TRIBE_KW)]
#[case("0987", SyntaxKind::NUMBER)]
#[case("NE", SyntaxKind::DIRECTION)]
#[case("\\", SyntaxKind::BACKSLASH)]
#[case("##", SyntaxKind::HASH_HASH)]
fn test_first_token_kind(#[case] input: &str, #[case] expected: SyntaxKind) {
    assert_eq!(tokenize(input)[0].kind, expected);
}

#[test]
fn test_line_endings_read_as_lf() {
    let tokens = tokenize("Tribe\r\n\nMove");
    let eols: Vec<_> = tokens.iter().filter(|t| t.kind == SyntaxKind::EOL).collect();
    assert_eq!(eols.len(), 2);
    assert!(eols.iter().all(|t| t.text == "\n"));
    assert_eq!(eols[0].span.len(), 2);
    assert_eq!(tokens.last().unwrap().span.line, 3);
}
