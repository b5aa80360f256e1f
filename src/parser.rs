use std::collections::BTreeSet;

use thiserror::Error;

use crate::{
    ast::{
        BoolOp, Combination, Comparison, ComparisonOp, Expression, Literal, Node, Predicate,
        Spanned, Token, TokenKind,
    },
    lexer::Lexer,
    universe::VariableUniverse,
};

/// Parentheses nested deeper than this are rejected, keeping every tree
/// walk (evaluation, generation, drop) within a bounded stack.
pub const MAX_NESTING: usize = 256;

/// A parse failure at a single point of the input.
///
/// `position` is a character offset into the source; `expected` lists every
/// kind of token that would have been accepted there.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("syntax error at position {position}: expected {}, found {found}", describe_expected(.expected))]
pub struct SyntaxError {
    pub position: usize,
    pub expected: BTreeSet<TokenKind>,
    pub found: String,
}

fn describe_expected(expected: &BTreeSet<TokenKind>) -> String {
    let kinds: Vec<String> = expected.iter().map(ToString::to_string).collect();
    match kinds.as_slice() {
        [only] => only.clone(),
        _ => format!("one of {}", kinds.join(", ")),
    }
}

const OPERAND_START: &[TokenKind] = &[
    TokenKind::Not,
    TokenKind::LParen,
    TokenKind::Null,
    TokenKind::Boolean,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::String,
    TokenKind::Identifier,
];

const AFTER_NOT: &[TokenKind] = &[
    TokenKind::LParen,
    TokenKind::Null,
    TokenKind::Boolean,
    TokenKind::Integer,
    TokenKind::Float,
    TokenKind::String,
    TokenKind::Identifier,
];

/// Grammar:
///
/// ```text
/// Expression := Operand (('and' | 'or') Operand)*
/// Operand    := Predicate | '(' Expression ')'
/// Predicate  := ['not'] (Comparison | '(' Comparison ')')
/// Comparison := Literal CompOp Literal
/// ```
///
/// Words are only accepted as identifiers when the universe contains them.
pub struct Parser<'u> {
    lexer: Lexer,
    current: Spanned,
    universe: &'u VariableUniverse,
    depth: usize,
}

impl<'u> Parser<'u> {
    pub fn new(mut lexer: Lexer, universe: &'u VariableUniverse) -> Self {
        let current = lexer.next_token();
        Parser {
            lexer,
            current,
            universe,
            depth: 0,
        }
    }

    fn advance(&mut self) {
        self.current = self.lexer.next_token();
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(&self.current.token) == std::mem::discriminant(token)
    }

    fn error(&self, expected: &[TokenKind]) -> SyntaxError {
        SyntaxError {
            position: self.current.position,
            expected: expected.iter().copied().collect(),
            found: self.current.token.describe(),
        }
    }

    fn expect(&mut self, token: Token, expected: &[TokenKind]) -> Result<(), SyntaxError> {
        if !self.check(&token) {
            return Err(self.error(expected));
        }
        self.advance();
        Ok(())
    }

    /// Parses the entire input as one expression.
    pub fn parse(&mut self) -> Result<Expression, SyntaxError> {
        let expr = self.parse_combination()?;
        self.expect(Token::Eof, &[TokenKind::BoolOp, TokenKind::End])?;
        Ok(expr)
    }

    fn parse_combination(&mut self) -> Result<Combination, SyntaxError> {
        let first = self.parse_operand()?;
        let mut rest = Vec::new();

        loop {
            let op = match self.current.token {
                Token::And => BoolOp::And,
                Token::Or => BoolOp::Or,
                _ => break,
            };
            self.advance();
            rest.push((op, self.parse_operand()?));
        }

        Ok(Combination {
            first: Box::new(first),
            rest,
        })
    }

    fn parse_operand(&mut self) -> Result<Node, SyntaxError> {
        if !self.check(&Token::LParen) {
            return Ok(Node::Predicate(self.parse_predicate()?));
        }

        if self.depth == MAX_NESTING {
            let mut error = self.error(OPERAND_START);
            error.found = format!("'(' nested deeper than {} levels", MAX_NESTING);
            return Err(error);
        }

        self.advance(); // consume '('
        self.depth += 1;
        let inner = self.parse_combination()?;
        self.depth -= 1;
        self.expect(Token::RParen, &[TokenKind::BoolOp, TokenKind::RParen])?;
        Ok(Node::Group(inner))
    }

    fn parse_predicate(&mut self) -> Result<Predicate, SyntaxError> {
        if !self.check(&Token::Not) {
            let comparison = self.parse_comparison(OPERAND_START)?;
            return Ok(Predicate {
                negated: false,
                comparison,
            });
        }

        self.advance(); // consume 'not'

        let comparison = if self.check(&Token::LParen) {
            self.advance();
            let comparison = self.parse_comparison(TokenKind::LITERALS)?;
            self.expect(Token::RParen, &[TokenKind::RParen])?;
            comparison
        } else {
            self.parse_comparison(AFTER_NOT)?
        };

        Ok(Predicate {
            negated: true,
            comparison,
        })
    }

    /// `expected` is what the caller would have accepted in place of the
    /// left-hand literal.
    fn parse_comparison(&mut self, expected: &[TokenKind]) -> Result<Comparison, SyntaxError> {
        let left = self.parse_literal(expected)?;
        let op = self.parse_comparison_op()?;
        let right = self.parse_literal(TokenKind::LITERALS)?;
        Ok(Comparison { left, op, right })
    }

    fn parse_comparison_op(&mut self) -> Result<ComparisonOp, SyntaxError> {
        let op = match self.current.token {
            Token::Eq | Token::EqEq => ComparisonOp::Eq,
            Token::NotEq | Token::LtGt => ComparisonOp::Ne,
            Token::Lt => ComparisonOp::Lt,
            Token::Gt => ComparisonOp::Gt,
            Token::LtEq => ComparisonOp::Le,
            Token::GtEq => ComparisonOp::Ge,
            Token::Is => {
                self.advance();
                if self.check(&Token::Not) {
                    self.advance();
                    return Ok(ComparisonOp::Ne);
                }
                return Ok(ComparisonOp::Eq);
            }
            _ => return Err(self.error(&[TokenKind::ComparisonOp])),
        };
        self.advance();
        Ok(op)
    }

    fn parse_literal(&mut self, expected: &[TokenKind]) -> Result<Literal, SyntaxError> {
        let literal = match &self.current.token {
            Token::Null => Literal::Null,
            Token::Boolean(b) => Literal::Bool(*b),
            Token::Integer(n) => Literal::Int(*n),
            Token::Float(n) => Literal::Float(*n),
            Token::String(s) => Literal::Str(s.clone()),
            Token::Word(name) if self.universe.contains(name) => Literal::Ident(name.clone()),
            Token::Word(name) => {
                let mut error = self.error(expected);
                error.found = format!("unknown variable '{}'", name);
                return Err(error);
            }
            _ => return Err(self.error(expected)),
        };
        self.advance();
        Ok(literal)
    }
}
