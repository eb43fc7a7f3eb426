use super::*;

// ============================================================================
// Step grammar
// ============================================================================

ast_node!(StepList, STEP_LIST);

impl StepList {
    children_method!(steps, Step);
}

ast_node!(Step, STEP);

impl Step {
    children_method!(clauses, Clause);

    /// A step with no clauses, e.g. the lone step of `Move \`
    pub fn is_empty(&self) -> bool {
        self.clauses().next().is_none()
    }
}

ast_node!(Clause, CLAUSE);

impl Clause {
    children_method!(groups, Group);

    /// Direct word and punctuation tokens, groups excluded
    pub fn tokens(&self) -> impl Iterator<Item = SyntaxToken> + use<> {
        significant_tokens(&self.0)
    }

    /// A clause is bad when recovery swallowed part of it
    pub fn is_bad(&self) -> bool {
        self.0.children().any(|n| n.kind() == SyntaxKind::BAD)
    }

    /// Clause text without surrounding whitespace
    pub fn text(&self) -> String {
        self.0.text().to_string().trim().to_string()
    }

    /// Child elements in order: tokens and groups interleaved
    pub fn elements(&self) -> Vec<ClausePart> {
        self.0
            .children_with_tokens()
            .filter_map(|element| match element {
                rowan::NodeOrToken::Token(t) if !t.kind().is_trivia() => Some(ClausePart::Token(t)),
                rowan::NodeOrToken::Token(_) => None,
                rowan::NodeOrToken::Node(n) => match CstElement::classify(n) {
                    CstElement::Production(n) => Group::cast(n).map(ClausePart::Group),
                    CstElement::Bad(bad) => Some(ClausePart::Bad(bad)),
                    CstElement::Missing(_) => None,
                },
            })
            .collect()
    }
}

/// One element of a clause
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ClausePart {
    Token(SyntaxToken),
    Group(Group),
    Bad(BadNode),
}

ast_node!(Group, GROUP);

impl Group {
    children_method!(clauses, Clause);
    has_token_method!(is_closed, R_PAREN, "(Sight Land - N)");
}
