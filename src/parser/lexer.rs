//! Logos-based lexer for turn reports
//!
//! Logos splits the input into raw tokens (space runs, line ends,
//! punctuation and word runs). [`Lexer`] sits on top of it and produces the
//! primary token stream the parser sees:
//!
//! - space runs and lone `\r` are folded into the next token's leading trivia
//! - `\r\n` and `\n` both become a single `EOL` token with text `"\n"`
//! - word runs are classified through [`classify_word`]
//! - anything logos cannot match becomes an `UNKNOWN` token
//! - once the input is exhausted, `next_token` keeps returning the same `EOI` token

use logos::Logos;
use tracing::trace;

use super::keywords::classify_word;
use super::syntax_kind::SyntaxKind;
use crate::base::Span;

/// A whitespace token attached to the front of a primary token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trivia {
    pub kind: SyntaxKind,
    pub span: Span,
}

/// A primary token with its kind, text, position and leading trivia
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: SyntaxKind,
    /// Token text. Line ends always read `"\n"`, end of input reads `""`.
    pub text: &'a str,
    pub span: Span,
    pub leading_trivia: Vec<Trivia>,
}

impl Token<'_> {
    /// Span from the start of the first trivia to the end of the token.
    pub fn full_span(&self) -> Span {
        match self.leading_trivia.first() {
            Some(first) => first.span.cover(self.span),
            None => self.span,
        }
    }
}

/// Lexer producing primary tokens with attached trivia
pub struct Lexer<'a> {
    source: &'a str,
    inner: logos::Lexer<'a, LogosToken>,
    line: u32,
    column: u32,
    scanned: usize,
    eoi: Option<Token<'a>>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            source: input,
            inner: LogosToken::lexer(input),
            line: 1,
            column: 1,
            scanned: 0,
            eoi: None,
            finished: false,
        }
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Return the next primary token.
    ///
    /// Never fails. After the end of input has been reached every call
    /// returns an identical `EOI` token.
    pub fn next_token(&mut self) -> Token<'a> {
        if let Some(eoi) = &self.eoi {
            return eoi.clone();
        }

        let mut leading_trivia = Vec::new();
        loop {
            let Some(result) = self.inner.next() else {
                let offset = self.source.len() as u32;
                let token = Token {
                    kind: SyntaxKind::EOI,
                    text: "",
                    span: Span::empty_at(offset, self.line, self.column),
                    leading_trivia,
                };
                trace!(tokens = self.scanned, "lexer reached end of input");
                self.eoi = Some(token.clone());
                return token;
            };

            let range = self.inner.span();
            let slice = self.inner.slice();
            let span = Span::new(range.start as u32, range.end as u32, self.line, self.column);
            let kind = match result {
                Ok(raw) => raw.kind(slice),
                Err(()) => SyntaxKind::UNKNOWN,
            };
            self.advance_position(kind, slice);

            if kind.is_trivia() {
                leading_trivia.push(Trivia { kind, span });
                continue;
            }

            self.scanned += 1;
            let text = if kind == SyntaxKind::EOL { "\n" } else { slice };
            return Token {
                kind,
                text,
                span,
                leading_trivia,
            };
        }
    }

    fn advance_position(&mut self, kind: SyntaxKind, slice: &str) {
        if kind == SyntaxKind::EOL {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += slice.len() as u32;
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    /// Yields every primary token up to and including the first `EOI`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == SyntaxKind::EOI {
            self.finished = true;
        }
        Some(token)
    }
}

/// Tokenize an entire string into a Vec ending with `EOI`
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

/// Logos token enum - maps to SyntaxKind
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogosToken {
    // =========================================================================
    // TRIVIA
    // =========================================================================
    #[regex(r"[ \t]+")]
    Spaces,

    // Longest match sends "\r\n" to Newline; only a lone CR lands here.
    #[token("\r")]
    CarriageReturn,

    #[token("\n")]
    #[token("\r\n")]
    Newline,

    // =========================================================================
    // PUNCTUATION
    // =========================================================================
    #[token(",")]
    Comma,
    #[token("-")]
    Dash,
    #[token("=")]
    Equals,
    #[token("##")]
    HashHash,
    #[token("#")]
    Hash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("\"")]
    Quote,
    #[token("/")]
    Slash,
    #[token("\\")]
    Backslash,
    #[token(":")]
    Colon,
    #[token(".")]
    Period,
    #[token("+")]
    Plus,
    #[token("*")]
    Star,
    #[token("$")]
    Dollar,

    // =========================================================================
    // WORDS (classified after lexing)
    // =========================================================================
    #[regex(r#"[^ \t\r\n",.()#+*/=\\$:\x00-\x08\x0B\x0C\x0E-\x1F\x7F-]+"#)]
    Word,
}

impl LogosToken {
    fn kind(self, slice: &str) -> SyntaxKind {
        use LogosToken::*;
        match self {
            Spaces | CarriageReturn => SyntaxKind::WHITESPACE,
            Newline => SyntaxKind::EOL,
            Comma => SyntaxKind::COMMA,
            Dash => SyntaxKind::DASH,
            Equals => SyntaxKind::EQUALS,
            HashHash => SyntaxKind::HASH_HASH,
            Hash => SyntaxKind::HASH,
            LParen => SyntaxKind::L_PAREN,
            RParen => SyntaxKind::R_PAREN,
            Quote => SyntaxKind::QUOTE,
            Slash => SyntaxKind::SLASH,
            Backslash => SyntaxKind::BACKSLASH,
            Colon => SyntaxKind::COLON,
            Period => SyntaxKind::PERIOD,
            Plus => SyntaxKind::PLUS,
            Star => SyntaxKind::STAR,
            Dollar => SyntaxKind::DOLLAR,
            Word => classify_word(slice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<SyntaxKind> {
        tokenize(input).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_lex_location_line_prefix() {
        assert_eq!(
            kinds("Tribe 0987, ,"),
            vec![
                SyntaxKind::TRIBE_KW,
                SyntaxKind::NUMBER,
                SyntaxKind::COMMA,
                SyntaxKind::COMMA,
                SyntaxKind::EOI
            ]
        );
    }

    #[test]
    fn test_lex_trivia_is_attached() {
        let tokens = tokenize("Tribe  0987");
        assert_eq!(tokens[1].kind, SyntaxKind::NUMBER);
        assert_eq!(tokens[1].leading_trivia.len(), 1);
        assert_eq!(tokens[1].leading_trivia[0].span.start, 5);
        assert_eq!(tokens[1].leading_trivia[0].span.end, 7);
        assert_eq!(tokens[1].full_span().start, 5);
        assert_eq!(tokens[1].full_span().end, 11);
    }

    #[test]
    fn test_lex_crlf_is_one_eol() {
        let tokens = tokenize("a\r\nb");
        assert_eq!(tokens[1].kind, SyntaxKind::EOL);
        assert_eq!(tokens[1].text, "\n");
        assert_eq!(tokens[1].span.len(), 2);
        assert_eq!(tokens[2].span.line, 2);
        assert_eq!(tokens[2].span.column, 1);
    }

    #[test]
    fn test_lex_lone_cr_is_trivia() {
        let tokens = tokenize("a\rb");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "b");
        assert_eq!(tokens[1].leading_trivia.len(), 1);
        assert_eq!(tokens[1].span.line, 1);
    }

    #[test]
    fn test_lex_hash_hash_and_step_separator() {
        assert_eq!(
            kinds("## 0203\\"),
            vec![
                SyntaxKind::HASH_HASH,
                SyntaxKind::NUMBER,
                SyntaxKind::BACKSLASH,
                SyntaxKind::EOI
            ]
        );
    }

    #[test]
    fn test_lex_control_character_is_unknown() {
        let tokens = tokenize("a\u{1}b");
        assert_eq!(tokens[1].kind, SyntaxKind::UNKNOWN);
        assert_eq!(tokens[1].span.len(), 1);
    }

    #[test]
    fn test_eoi_is_idempotent() {
        let mut lexer = Lexer::new("x  ");
        let _ = lexer.next_token();
        let first = lexer.next_token();
        let second = lexer.next_token();
        assert_eq!(first.kind, SyntaxKind::EOI);
        assert_eq!(first, second);
        assert_eq!(first.span.start, 3);
        assert_eq!(first.leading_trivia.len(), 1);
    }
}
