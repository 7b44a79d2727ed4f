use std::fmt;
use std::iter::Peekable;

use logos::{Logos, Span, SpannedIter};

use crate::ast::{AppTerm, Clause, Query, Term};

use super::lexer::Token;

struct TokenStream<'a> {
    source: &'a str,
    lexer: Peekable<SpannedIter<'a, Token>>,
}

impl<'a> TokenStream<'a> {
    pub fn new(source: &'a str) -> Self {
        let lexer = Token::lexer(source).spanned().peekable();

        Self { source, lexer }
    }

    pub fn next(&mut self) -> Option<(Result<Token, ()>, Span)> {
        self.lexer.next()
    }

    pub fn advance(&mut self) {
        self.lexer.next();
    }

    pub fn peek_token(&mut self) -> Option<Result<Token, ()>> {
        self.lexer.peek().map(|(tok, _)| tok).cloned()
    }

    pub fn slice(&self, span: Span) -> &'a str {
        &self.source[span]
    }

    pub fn eof(&self) -> Span {
        self.source.len()..self.source.len()
    }
}

/// A parse error originating from [`Parser`].
#[derive(Debug, PartialEq)]
pub struct ParseError {
    /// The range in the source text where the error occurred.
    pub span: Span,
    /// The type of error that occurred.
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        Self { span, kind }
    }

    /// The offending slice of the source the error refers to.
    pub fn offending<'a>(&self, source: &'a str) -> &'a str {
        source.get(self.span.clone()).unwrap_or("")
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}..{}", self.kind, self.span.start, self.span.end)
    }
}

impl std::error::Error for ParseError {}

/// The various types of parse errors reported by [`Parser`].
#[derive(Debug, PartialEq)]
pub enum ParseErrorKind {
    /// The parser reached the end of the input, but expected more tokens to
    /// follow.
    UnexpectedEof,
    /// The parser encountered a token that doesn't belong in that place.
    UnexpectedToken(Token),
    /// The parser encountered input that could not be recognized as a token.
    UnrecognizedToken,
    /// The parser encountered more tokens after the input should have ended.
    ExpectedEof,
    /// A bare variable appeared in goal position (as a clause head, a body
    /// goal or a query goal), where no clause could ever resolve it.
    VariableAsGoal,
}

impl ParseErrorKind {
    /// Translate an unexpected item in the token stream (either an unexpected
    /// token or a lexer error) into the matching [`ParseErrorKind`].
    pub fn unexpected(res: Result<Token, ()>) -> Self {
        match res {
            Ok(tok) => Self::UnexpectedToken(tok),
            Err(()) => Self::UnrecognizedToken,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => write!(f, "unexpected end of input"),
            Self::UnexpectedToken(tok) => write!(f, "unexpected token {:?}", tok),
            Self::UnrecognizedToken => write!(f, "unrecognized token"),
            Self::ExpectedEof => write!(f, "expected end of input"),
            Self::VariableAsGoal => write!(f, "a variable cannot be used as a goal"),
        }
    }
}

/// A recursive-descent parser with one token of lookahead for the Prolog-like
/// syntax of the [TextualDatabase](super::TextualDatabase).
///
/// Parsing is whole-clause atomic: a structural error anywhere discards all
/// terms built for the clause and reports a single [`ParseError`]; nothing
/// partial ever escapes.
pub struct Parser<'a> {
    tokens: TokenStream<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            tokens: TokenStream::new(source),
        }
    }

    // //////////////////////////////// PUBLIC PARSER ////////////////////////////////

    /// Parse a single clause, `head.` or `head :- goal, ..., goal.`.
    pub fn parse_clause(mut self) -> Result<Clause, ParseError> {
        let clause = self.clause()?;
        self.expect_eof()?;
        Ok(clause)
    }

    /// Parse zero or more clauses up to the end of the input.
    pub fn parse_clauses(mut self) -> Result<Vec<Clause>, ParseError> {
        let mut clauses = vec![];
        while self.tokens.peek_token().is_some() {
            clauses.push(self.clause()?);
        }
        Ok(clauses)
    }

    /// Parse a query, a single goal terminated by `.`.
    pub fn parse_query(mut self) -> Result<Query, ParseError> {
        let goal = self.goal()?;
        self.expect_token(Token::Period)?;
        self.expect_eof()?;
        Ok(Query::single(goal))
    }

    // //////////////////////////////// PARSER INTERNALS ////////////////////////////////

    fn clause(&mut self) -> Result<Clause, ParseError> {
        let head = self.goal()?;
        match self.tokens.next() {
            Some((Ok(Token::Period), _)) => Ok(Clause::fact(head)),
            Some((Ok(Token::ImpliedBy), _)) => {
                let mut body = vec![self.goal()?];
                loop {
                    match self.tokens.next() {
                        Some((Ok(Token::Comma), _)) => body.push(self.goal()?),
                        Some((Ok(Token::Period), _)) => break,
                        Some((other, span)) => {
                            return Err(ParseError::new(span, ParseErrorKind::unexpected(other)))
                        }
                        None => {
                            return Err(ParseError::new(
                                self.tokens.eof(),
                                ParseErrorKind::UnexpectedEof,
                            ))
                        }
                    }
                }
                Ok(Clause::rule(head, body))
            }
            Some((other, span)) => Err(ParseError::new(span, ParseErrorKind::unexpected(other))),
            None => Err(ParseError::new(
                self.tokens.eof(),
                ParseErrorKind::UnexpectedEof,
            )),
        }
    }

    /// A term in goal position: an atom or an application term. A variable
    /// here is rejected so it can never reach the knowledge base.
    fn goal(&mut self) -> Result<Term, ParseError> {
        if let Some(Ok(Token::Variable)) = self.tokens.peek_token() {
            let span = self.expect_token(Token::Variable)?;
            return Err(ParseError::new(span, ParseErrorKind::VariableAsGoal));
        }
        self.appterm()
    }

    fn appterm(&mut self) -> Result<Term, ParseError> {
        let span = self.expect_token(Token::Symbol)?;
        let name = self.tokens.slice(span);
        if let Some(Ok(Token::LParen)) = self.tokens.peek_token() {
            self.tokens.advance();
            let mut args = vec![self.term()?];
            loop {
                match self.tokens.next() {
                    Some((Ok(Token::Comma), _)) => args.push(self.term()?),
                    Some((Ok(Token::RParen), _)) => break,
                    Some((other, span)) => {
                        return Err(ParseError::new(span, ParseErrorKind::unexpected(other)))
                    }
                    None => {
                        return Err(ParseError::new(
                            self.tokens.eof(),
                            ParseErrorKind::UnexpectedEof,
                        ))
                    }
                }
            }
            Ok(Term::App(AppTerm::new(name, args)))
        } else {
            Ok(Term::Atom(name.to_owned()))
        }
    }

    fn term(&mut self) -> Result<Term, ParseError> {
        match self.tokens.peek_token() {
            Some(Ok(Token::Variable)) => {
                let span = self.expect_token(Token::Variable)?;
                Ok(Term::Var(self.tokens.slice(span).to_owned()))
            }
            _ => self.appterm(),
        }
    }

    fn expect_eof(&mut self) -> Result<(), ParseError> {
        if let Some((_, span)) = self.tokens.next() {
            Err(ParseError::new(span, ParseErrorKind::ExpectedEof))
        } else {
            Ok(())
        }
    }

    fn expect_token(&mut self, expected: Token) -> Result<Span, ParseError> {
        if let Some((actual, span)) = self.tokens.next() {
            if actual == Ok(expected) {
                Ok(span)
            } else {
                Err(ParseError::new(span, ParseErrorKind::unexpected(actual)))
            }
        } else {
            Err(ParseError::new(
                self.tokens.eof(),
                ParseErrorKind::UnexpectedEof,
            ))
        }
    }
}
