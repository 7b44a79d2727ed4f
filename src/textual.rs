//! A high-level interface to the resolution engine using a Prolog-like
//! textual syntax.
//!
//! Clauses and queries are written the way Prolog writes them:
//!
//! ```text
//! parent(john, jim).
//! grandparent(X, Y) :- parent(X, Z), parent(Z, Y).
//! ```
//!
//! [`TextualDatabase`] bundles a [`Database`] with the parser so that
//! knowledge can be loaded from strings and queries can be answered without
//! building terms by hand.

mod lexer;
mod parser;
pub mod pretty;

use std::fmt;

use crate::ast::Query;
use crate::database::Database;
use crate::search::{self, MalformedGoalError, SearchMode, Solution, SolutionIter};

pub use parser::{ParseError, ParseErrorKind, Parser};

/// Failure modes of a textual query: the text may not parse, or the parsed
/// goal may not be resolvable.
#[derive(Debug, PartialEq)]
pub enum QueryError {
    Parse(ParseError),
    MalformedGoal(MalformedGoalError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "parse error: {}", err),
            Self::MalformedGoal(err) => write!(f, "malformed goal: {}", err),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::MalformedGoal(err) => Some(err),
        }
    }
}

impl From<ParseError> for QueryError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<MalformedGoalError> for QueryError {
    fn from(err: MalformedGoalError) -> Self {
        Self::MalformedGoal(err)
    }
}

/// A knowledge base that can be grown from textual clauses and queried with
/// textual goals.
#[derive(Debug, Default)]
pub struct TextualDatabase {
    db: Database,
}

impl TextualDatabase {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a single clause into the database.
    pub fn load_clause(&mut self, text: &str) -> Result<(), ParseError> {
        let clause = Parser::new(text).parse_clause()?;
        self.db.insert(clause);
        Ok(())
    }

    /// Load all clauses of a source text into the database.
    ///
    /// Loading is all-or-nothing: when any clause fails to parse, the database
    /// is left exactly as it was before the call.
    pub fn load_str(&mut self, text: &str) -> Result<(), ParseError> {
        let clauses = Parser::new(text).parse_clauses()?;
        for clause in clauses {
            self.db.insert(clause);
        }
        Ok(())
    }

    /// Parse a textual query without running it.
    pub fn prepare_query(&self, text: &str) -> Result<Query, ParseError> {
        Parser::new(text).parse_query()
    }

    /// Parse a textual query and lazily enumerate its solutions.
    pub fn query_dfs<'a>(&'a self, text: &str) -> Result<SolutionIter<'a>, QueryError> {
        let query = self.prepare_query(text)?;
        Ok(search::query_dfs(&self.db, &query)?)
    }

    /// Parse a textual query and collect its solutions, stopping after the
    /// first one in [`SearchMode::First`].
    pub fn run_query(&self, text: &str, mode: SearchMode) -> Result<Vec<Solution>, QueryError> {
        let solutions = self.query_dfs(text)?;
        Ok(match mode {
            SearchMode::First => solutions.take(1).collect(),
            SearchMode::All => solutions.collect(),
        })
    }

    /// The underlying database, for direct inspection or programmatic use.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
