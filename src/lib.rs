//! A small embeddable logic programming engine in the spirit of Prolog.
//!
//! Knowledge is a set of facts and rules over first-order terms, and questions
//! are answered by depth-first resolution with full backtracking. The engine
//! has no arithmetic, no cut and no side effects; what it does have is sound
//! unification (including the occurs check), deterministic solution order and
//! lazy enumeration of answers.
//!
//! # Example
//!
//! The easiest way in is [`TextualDatabase`], which speaks a Prolog-like
//! syntax:
//!
//! ```
//! use hornlog::{SearchMode, TextualDatabase};
//! use hornlog::textual::pretty;
//!
//! let mut tdb = TextualDatabase::new();
//! tdb.load_str("
//!     parent(john, jim).
//!     parent(john, jane).
//!     parent(mary, john).
//!     grandparent(X, Y) :- parent(X, Z), parent(Z, Y).
//! ").unwrap();
//!
//! let solutions = tdb.run_query("grandparent(mary, X).", SearchMode::All).unwrap();
//! let answers: Vec<String> = solutions.iter().map(pretty::solution_to_string).collect();
//! assert_eq!(answers, vec!["X = jim", "X = jane"]);
//! ```
//!
//! Terms, clauses and queries can equally be built programmatically via
//! [`ast`] and resolved with [`query_dfs`] against a plain [`Database`].
//! Solutions are produced by a lazy iterator, so an infinite solution space is
//! fine as long as only finitely many answers are pulled:
//!
//! ```
//! use hornlog::{query_dfs, Database};
//! use hornlog::ast::{app, atom, var, Clause, Query};
//!
//! let mut db = Database::new();
//! db.insert(Clause::fact(app("is_natural", vec![atom("z")])));
//! db.insert(
//!     Clause::fact(app("is_natural", vec![app("s", vec![var("X")])]))
//!         .when(app("is_natural", vec![var("X")])),
//! );
//!
//! let query = Query::single(app("is_natural", vec![var("N")]));
//! let first_three: Vec<_> = query_dfs(&db, &query).unwrap().take(3).collect();
//! assert_eq!(first_three[2].get("N"), Some(&app("s", vec![app("s", vec![atom("z")])])));
//! ```

pub mod ast;
pub mod database;
pub mod search;
pub mod subst;
pub mod textual;
pub mod unify;

pub use database::Database;
pub use search::{query_dfs, SearchMode, Solution, SolutionIter, Step};
pub use textual::TextualDatabase;
