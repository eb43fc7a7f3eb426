//! Recursive descent parser for turn reports
//!
//! Builds a rowan GreenNode tree from tokens.
//! Supports error recovery and produces a lossless CST.
//!
//! All grammar lives in [`super::grammar`]; this file holds the token
//! cursor, the tree builder and the recovery primitives the grammar uses
//! through the [`ReportParser`] trait.

use std::collections::VecDeque;

use rowan::{Checkpoint, GreenNode, GreenNodeBuilder};

use super::errors::{Diagnostic, DiagnosticCollector, ErrorCode, ParseContext, expected_in_context};
use super::grammar::{self, ReportParser};
use super::lexer::{Lexer, Token};
use super::syntax_kind::SyntaxKind;
use super::{SyntaxNode, SyntaxToken};
use crate::base::Span;

/// Parse result containing the green tree and any errors
#[derive(Debug, Clone)]
pub struct Parse {
    pub green: GreenNode,
    pub errors: Vec<Diagnostic>,
}

impl Parse {
    /// Get the root syntax node
    pub fn syntax(&self) -> SyntaxNode {
        SyntaxNode::new_root(self.green.clone())
    }

    /// Check if parsing succeeded without errors
    pub fn ok(&self) -> bool {
        !self.errors.iter().any(Diagnostic::is_error)
    }

    /// Diagnostics whose span starts inside `node`
    pub fn errors_in<'p>(&'p self, node: &SyntaxNode) -> impl Iterator<Item = &'p Diagnostic> + 'p {
        let range = node.text_range();
        self.errors.iter().filter(move |d| {
            let start = d.span.range().start();
            range.contains(start) || (range.is_empty() && range.start() == start)
        })
    }

    /// Reconstruct the source text from the tree's tokens
    pub fn text(&self) -> String {
        self.syntax().text().to_string()
    }

    /// All tokens of the tree in source order, trivia included
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> {
        self.syntax()
            .descendants_with_tokens()
            .filter_map(|element| element.into_token())
    }
}

/// Parse a whole turn report into a CST
pub fn parse_report(input: &str) -> Parse {
    let mut parser = Parser::new(input);
    grammar::parse_turn_report(&mut parser);
    parser.finish()
}

/// The parser state
pub(crate) struct Parser<'a> {
    source: &'a str,
    lexer: Lexer<'a>,
    current: Token<'a>,
    /// Tokens already scanned but not yet current, consulted before the lexer
    pending: VecDeque<Token<'a>>,
    /// Whether `current`'s leading trivia has already gone into the tree
    trivia_flushed: bool,
    eoi_emitted: bool,
    builder: GreenNodeBuilder<'static>,
    diagnostics: DiagnosticCollector,
    contexts: Vec<ParseContext>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token();
        Self {
            source: input,
            lexer,
            current,
            pending: VecDeque::new(),
            trivia_flushed: false,
            eoi_emitted: false,
            builder: GreenNodeBuilder::new(),
            diagnostics: DiagnosticCollector::new(),
            contexts: Vec::new(),
        }
    }

    pub(crate) fn finish(self) -> Parse {
        Parse {
            green: self.builder.finish(),
            errors: self.diagnostics.into_vec(),
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn nth_token(&mut self, n: usize) -> &Token<'a> {
        if n == 0 {
            return &self.current;
        }
        while self.pending.len() < n {
            let next = self.lexer.next_token();
            self.pending.push_back(next);
        }
        &self.pending[n - 1]
    }

    fn advance(&mut self) {
        if self.current.kind == SyntaxKind::EOI {
            return;
        }
        self.current = match self.pending.pop_front() {
            Some(token) => token,
            None => self.lexer.next_token(),
        };
        self.trivia_flushed = false;
    }

    // =========================================================================
    // Tree building
    // =========================================================================

    fn flush_trivia(&mut self) {
        if self.trivia_flushed {
            return;
        }
        for trivia in &self.current.leading_trivia {
            let text = trivia.span.text(self.source);
            self.builder.token(trivia.kind.into(), text);
        }
        self.trivia_flushed = true;
    }

    fn current_context(&self) -> ParseContext {
        self.contexts.last().copied().unwrap_or(ParseContext::TopLevel)
    }

    fn missing(&mut self) {
        self.flush_trivia();
        self.builder.start_node(SyntaxKind::MISSING.into());
        self.builder.finish_node();
    }
}

impl<'a> ReportParser<'a> for Parser<'a> {
    fn source(&self) -> &'a str {
        self.source
    }

    fn current(&self) -> &Token<'a> {
        &self.current
    }

    fn nth(&mut self, n: usize) -> &Token<'a> {
        self.nth_token(n)
    }

    fn bump(&mut self) {
        let text = if self.current.kind == SyntaxKind::EOI {
            // EOI goes into the tree once; later bumps are no-ops
            if self.eoi_emitted {
                return;
            }
            self.eoi_emitted = true;
            ""
        } else {
            self.current.span.text(self.source)
        };
        self.flush_trivia();
        self.builder.token(self.current.kind.into(), text);
        self.advance();
    }

    fn accept(&mut self, kind: SyntaxKind) -> Option<Token<'a>> {
        if self.at(kind) {
            let token = self.current.clone();
            self.bump();
            Some(token)
        } else {
            None
        }
    }

    fn accept_one_of(&mut self, kinds: &[SyntaxKind]) -> Option<Token<'a>> {
        if self.at_any(kinds) {
            let token = self.current.clone();
            self.bump();
            Some(token)
        } else {
            None
        }
    }

    fn expect(&mut self, kind: SyntaxKind) -> bool {
        self.expect_described(&[kind], kind.display_name())
    }

    fn expect_described(&mut self, kinds: &[SyntaxKind], expected: &str) -> bool {
        if self.accept_one_of(kinds).is_some() {
            return true;
        }
        let found = self.current.kind.display_name();
        let diagnostic = expected_in_context(expected, found, self.current_context(), self.current.span);
        self.error(diagnostic);
        self.missing();
        false
    }

    fn skip_until_sync(&mut self, sync: &[SyntaxKind]) -> Option<Span> {
        if self.at_any(sync) || self.at(SyntaxKind::EOI) {
            return None;
        }
        self.flush_trivia();
        let start = self.current.span;
        let mut end = start;
        self.builder.start_node(SyntaxKind::BAD.into());
        while !self.at_any(sync) && !self.at(SyntaxKind::EOI) {
            end = self.current.span;
            self.bump();
        }
        self.builder.finish_node();
        Some(start.cover(end))
    }

    fn start_root(&mut self, kind: SyntaxKind) {
        self.builder.start_node(kind.into());
    }

    fn start_node(&mut self, kind: SyntaxKind) {
        self.flush_trivia();
        self.builder.start_node(kind.into());
    }

    fn finish_node(&mut self) {
        self.builder.finish_node();
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.flush_trivia();
        self.builder.checkpoint()
    }

    fn start_node_at(&mut self, checkpoint: Checkpoint, kind: SyntaxKind) {
        self.builder.start_node_at(checkpoint, kind.into());
    }

    fn error(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.add(diagnostic);
    }

    fn error_at_current(&mut self, code: ErrorCode, message: String) {
        let span = self.current.span;
        self.error(Diagnostic::error(code, message, span));
    }

    fn push_context(&mut self, context: ParseContext) {
        self.contexts.push(context);
    }

    fn pop_context(&mut self) {
        self.contexts.pop();
    }

    fn context(&self) -> ParseContext {
        self.current_context()
    }
}
