//! Parser state and the ordered-choice machinery shared by every rule.
//!
//! Rules are plain functions `fn(&mut Parser) -> Result<Node, Error>`.
//! A rule either consumes its tokens and returns a node, or fails; callers
//! trying alternatives go through [`Parser::attempt`], which rewinds the
//! input on failure and remembers the furthest failure for diagnostics.
//! Rules that are re-entered at the same position after a failed sibling
//! (`expression`, `simple_expr`, `primary`) are memoized per position.

use std::{collections::HashMap, rc::Rc};

use log::debug;

use crate::{
    ast::ast::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::expr::parse_expression;

/// Operator legality checks the grammar itself leaves out.
///
/// Both are off by default, which accepts `A = B = C` and `A and B or C`
/// as plain nested trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Reject a relational operator or membership test applied to a relation
    pub reject_chained_relations: bool,
    /// Reject different logical operators in one unparenthesized chain
    pub reject_mixed_logical_operators: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        ParseOptions {
            reject_chained_relations: true,
            reject_mixed_logical_operators: true,
        }
    }
}

/// Memoized rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Expression,
    SimpleExpr,
    Primary,
}

type MemoEntry = Result<(Expr, usize), Error>;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Token buffer, always terminated by `EOF`
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    options: ParseOptions,
    /// Results of memoized rules, keyed by rule and start index
    memo: HashMap<(Rule, usize), MemoEntry>,
    /// Furthest recoverable failure seen by `attempt`
    furthest: Option<Error>,
}

impl Parser {
    /// Creates a parser over `tokens`. An `EOF` token is appended when the
    /// buffer does not already end with one.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>, options: ParseOptions) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = match tokens.last() {
                Some(token) => token.span.end.clone(),
                None => Position(0, Rc::clone(&file)),
            };
            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::from("EOF"),
                span: Span {
                    start: end.clone(),
                    end,
                },
            });
        }

        Parser {
            tokens,
            pos: 0,
            options,
            memo: HashMap::new(),
            furthest: None,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens[self.pos].kind
    }

    /// Kind of the token `n` places after the current one, `EOF` past the end.
    pub fn peek_kind(&self, n: usize) -> TokenKind {
        self.tokens
            .get(self.pos + n)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::EOF)
    }

    /// Advances to the next token and returns the previous token.
    /// The parser never moves past `EOF`.
    pub fn advance(&mut self) -> &Token {
        let current = self.pos;
        if self.tokens[current].kind != TokenKind::EOF {
            self.pos += 1;
        }
        &self.tokens[current]
    }

    /// Expects a token of the specified kind, with optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(error.unwrap_or_else(|| {
                Error::new(
                    ErrorImpl::UnexpectedTokenDetailed {
                        token: token.value.clone(),
                        message: format!("expected {}", expected_kind),
                    },
                    token.span.start.clone(),
                )
            }))
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the specified kind with default error message.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Span of the last consumed token.
    pub fn previous_span(&self) -> Span {
        let index = self.pos.saturating_sub(1);
        self.tokens[index].span.clone()
    }

    pub fn get_options(&self) -> ParseOptions {
        self.options
    }

    pub fn mark(&self) -> usize {
        self.pos
    }

    pub fn reset(&mut self, mark: usize) {
        self.pos = mark;
    }

    /// Runs `rule` as one alternative of an ordered choice.
    ///
    /// On a recoverable failure the input is rewound, the failure is
    /// recorded and `Ok(None)` lets the caller try the next alternative.
    /// Fatal errors are propagated unchanged.
    pub fn attempt<T, F>(&mut self, rule: F) -> Result<Option<T>, Error>
    where
        F: FnOnce(&mut Parser) -> Result<T, Error>,
    {
        let start = self.pos;

        match rule(self) {
            Ok(node) => Ok(Some(node)),
            Err(error) if error.is_fatal() => Err(error),
            Err(error) => {
                self.record_failure(error);
                self.pos = start;
                Ok(None)
            }
        }
    }

    /// Runs `rule` at the current position, or replays its earlier result.
    pub fn memoized(
        &mut self,
        rule: Rule,
        parse_fn: fn(&mut Parser) -> Result<Expr, Error>,
    ) -> Result<Expr, Error> {
        let key = (rule, self.pos);

        if let Some(entry) = self.memo.get(&key) {
            return match entry {
                Ok((expr, end)) => {
                    let expr = expr.clone();
                    self.pos = *end;
                    Ok(expr)
                }
                Err(error) => Err(error.clone()),
            };
        }

        let result = parse_fn(self);
        let entry = match &result {
            Ok(expr) => Ok((expr.clone(), self.pos)),
            Err(error) => Err(error.clone()),
        };
        self.memo.insert(key, entry);

        result
    }

    /// Builds the failure of an ordered choice where no alternative matched
    /// the current token.
    pub fn no_alternative(&self, rule: &'static str, alternatives: &[&'static str]) -> Error {
        Error::new(
            ErrorImpl::NoViableAlternative {
                rule,
                alternatives: alternatives.to_vec(),
                token: self.current_token().value.clone(),
            },
            self.get_position(),
        )
    }

    fn record_failure(&mut self, error: Error) {
        let is_further = match &self.furthest {
            Some(furthest) => error.get_position().0 >= furthest.get_position().0,
            None => true,
        };

        if is_further {
            self.furthest = Some(error);
        }
    }

    /// The furthest recoverable failure recorded so far.
    pub fn get_furthest_failure(&self) -> Option<&Error> {
        self.furthest.as_ref()
    }

    pub fn memo_len(&self) -> usize {
        self.memo.len()
    }
}

/// Parses a whole token stream as one expression.
///
/// Returns the parser (with state after parsing) and either the tree or the
/// furthest error met while trying alternatives.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<Expr, Error>) {
    parse_with_options(tokens, file, ParseOptions::default())
}

pub fn parse_with_options(
    tokens: Vec<Token>,
    file: Rc<String>,
    options: ParseOptions,
) -> (Parser, Result<Expr, Error>) {
    let mut parser = Parser::new(tokens, file, options);

    let result = match parse_expression(&mut parser) {
        Ok(_) if parser.has_tokens() => Err(Error::new(
            ErrorImpl::TrailingTokens {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
        Ok(expr) => Ok(expr),
        Err(error) => Err(error),
    };

    let result = result.map_err(|error| match parser.get_furthest_failure() {
        Some(furthest)
            if !error.is_fatal() && furthest.get_position().0 > error.get_position().0 =>
        {
            furthest.clone()
        }
        _ => error,
    });

    match &result {
        Ok(_) => debug!("parsed expression, {} memo entries", parser.memo_len()),
        Err(error) => debug!("parse failed: {}", error),
    }

    (parser, result)
}
