//! The knowledge base: an insertion-ordered collection of clauses.

use crate::ast::Clause;

/// An append-only, ordered store of facts and rules.
///
/// Order matters: the resolution engine tries clauses strictly in insertion
/// order, which in turn determines the order in which solutions are
/// enumerated. There is deliberately no indexing by head functor; resolution
/// scans the clause list linearly.
///
/// The database is read-only while a query is in flight; clauses are only
/// added between queries.
#[derive(Debug, Default)]
pub struct Database {
    clauses: Vec<Clause>,
}

impl Database {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self { clauses: Vec::new() }
    }

    /// Append a clause to the database.
    pub fn insert(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// The stored clauses, in insertion order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    /// Iterate over the stored clauses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    /// The number of stored clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::{app, atom, Clause};

    #[test]
    fn iteration_follows_insertion_order() {
        let mut db = Database::new();
        let first = Clause::fact(app("parent", vec![atom("john"), atom("jim")]));
        let second = Clause::fact(app("parent", vec![atom("john"), atom("jane")]));
        let third = Clause::fact(atom("sunny"));
        db.insert(first.clone());
        db.insert(second.clone());
        db.insert(third.clone());

        assert_eq!(db.len(), 3);
        assert_eq!(
            db.iter().collect::<Vec<_>>(),
            vec![&first, &second, &third]
        );
    }
}
