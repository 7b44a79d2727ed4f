//! Rendering of terms, clauses, queries and solutions back into the textual
//! syntax accepted by the parser.

use std::fmt::Write;

use crate::ast::{Clause, Query};
use crate::search::Solution;

pub fn pretty_clause(out: &mut String, clause: &Clause) {
    let _ = write!(out, "{}", clause.head);
    if let Some((last, init)) = clause.body.split_last() {
        let _ = write!(out, " :- ");
        for goal in init {
            let _ = write!(out, "{}, ", goal);
        }
        let _ = write!(out, "{}", last);
    }
    out.push('.');
}

pub fn pretty_query(out: &mut String, query: &Query) {
    if let Some((last, init)) = query.goals.split_last() {
        for goal in init {
            let _ = write!(out, "{}, ", goal);
        }
        let _ = write!(out, "{}", last);
    }
    out.push('.');
}

/// Render a solution as one `name = term` line per constrained variable.
///
/// Unconstrained variables are skipped; a solution constraining nothing
/// renders as `true`.
pub fn pretty_solution(out: &mut String, solution: &Solution) {
    let mut constrained = solution
        .bindings
        .iter()
        .filter_map(|(name, term)| term.as_ref().map(|term| (name, term)))
        .peekable();
    if constrained.peek().is_none() {
        out.push_str("true");
        return;
    }
    while let Some((name, term)) = constrained.next() {
        let _ = write!(out, "{} = {}", name, term);
        if constrained.peek().is_some() {
            out.push('\n');
        }
    }
}

pub fn clause_to_string(clause: &Clause) -> String {
    let mut out = String::new();
    pretty_clause(&mut out, clause);
    out
}

pub fn query_to_string(query: &Query) -> String {
    let mut out = String::new();
    pretty_query(&mut out, query);
    out
}

pub fn solution_to_string(solution: &Solution) -> String {
    let mut out = String::new();
    pretty_solution(&mut out, solution);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::{app, atom, var, Clause, Query};

    #[test]
    fn facts_and_rules() {
        let fact = Clause::fact(app("parent", vec![atom("john"), atom("jim")]));
        assert_eq!(clause_to_string(&fact), "parent(john, jim).");

        let rule = Clause::fact(app("grandparent", vec![var("X"), var("Y")]))
            .when(app("parent", vec![var("X"), var("Z")]))
            .when(app("parent", vec![var("Z"), var("Y")]));
        assert_eq!(
            clause_to_string(&rule),
            "grandparent(X, Y) :- parent(X, Z), parent(Z, Y)."
        );
    }

    #[test]
    fn queries() {
        let query = Query::single(app("parent", vec![atom("john"), var("X")]));
        assert_eq!(query_to_string(&query), "parent(john, X).");
    }

    #[test]
    fn solutions() {
        let solution = Solution {
            bindings: vec![
                ("X".to_string(), Some(atom("jim"))),
                ("Y".to_string(), Some(app("s", vec![atom("z")]))),
            ],
        };
        assert_eq!(solution_to_string(&solution), "X = jim\nY = s(z)");
    }

    #[test]
    fn unconstrained_variables_are_omitted() {
        let solution = Solution {
            bindings: vec![
                ("X".to_string(), None),
                ("Y".to_string(), Some(atom("jane"))),
            ],
        };
        assert_eq!(solution_to_string(&solution), "Y = jane");
    }

    #[test]
    fn empty_solution_renders_as_true() {
        let solution = Solution { bindings: vec![] };
        assert_eq!(solution_to_string(&solution), "true");
        let solution = Solution {
            bindings: vec![("X".to_string(), None)],
        };
        assert_eq!(solution_to_string(&solution), "true");
    }
}
