//! The term model: atoms, logic variables, compound terms, clauses and queries.
//!
//! Terms own their names and arguments outright, so a deep copy is simply
//! [`Clone`] and structural printing is [`std::fmt::Display`]. Nothing in this
//! module is shared-and-mutated; every operation that produces a term produces
//! a fresh, independently owned tree.

use std::fmt;

/// Representation of a logic term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// A named constant, e.g. `foo`.
    Atom(String),
    /// A named placeholder that may become bound during unification, e.g. `X`.
    ///
    /// Two variables with the same name inside one clause denote the same
    /// logical variable. Across clause instantiations the same surface name
    /// denotes different variables; see [`Clause::instantiate`].
    Var(String),
    /// An application of a functor to arguments, e.g. `parent(john, X)`.
    App(AppTerm),
}

impl Term {
    /// Collect the names of all variables in this term, in order of first
    /// occurrence, skipping names already present in `out`.
    pub fn collect_vars(&self, out: &mut Vec<String>) {
        match self {
            Term::Atom(_) => {}
            Term::Var(name) => {
                if !out.iter().any(|known| known == name) {
                    out.push(name.clone());
                }
            }
            Term::App(app) => {
                for arg in &app.args {
                    arg.collect_vars(out);
                }
            }
        }
    }

    /// Produce a copy of this term with every variable renamed apart by
    /// suffixing it with `#` and the given generation number.
    ///
    /// The lexer cannot produce `#` inside an identifier, so a renamed
    /// variable can never collide with a variable written in source text, and
    /// two different generations can never collide with each other.
    pub fn rename_apart(&self, generation: u64) -> Term {
        match self {
            Term::Atom(_) => self.clone(),
            Term::Var(name) => Term::Var(format!("{}#{}", name, generation)),
            Term::App(app) => Term::App(AppTerm {
                functor: app.functor.clone(),
                args: app.args.iter().map(|arg| arg.rename_apart(generation)).collect(),
            }),
        }
    }
}

impl From<AppTerm> for Term {
    fn from(app: AppTerm) -> Self {
        Term::App(app)
    }
}

/// An application term, i.e. a term of the form `functor(arg0, arg1, ...)`.
///
/// The functor name together with the arity (the argument count) is the
/// term's identity: `foo(a)` and `foo(a, b)` never unify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppTerm {
    /// The functor being applied.
    pub functor: String,
    /// The arguments of the application.
    pub args: Vec<Term>,
}

impl AppTerm {
    pub fn new(functor: impl Into<String>, args: Vec<Term>) -> Self {
        Self {
            functor: functor.into(),
            args,
        }
    }

    /// The arity of this term.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

/// Convenience constructor for an atom term.
pub fn atom(name: impl Into<String>) -> Term {
    Term::Atom(name.into())
}

/// Convenience constructor for a variable term.
pub fn var(name: impl Into<String>) -> Term {
    Term::Var(name.into())
}

/// Convenience constructor for an application term.
pub fn app(functor: impl Into<String>, args: Vec<Term>) -> Term {
    Term::App(AppTerm::new(functor, args))
}

/// A fact or rule stored in the knowledge base. Logically, the conjunction of
/// the `body` goals implies the `head`.
///
/// Clauses are immutable once stored; the resolution engine never unifies
/// against a stored clause directly, only against a fresh copy produced by
/// [`Clause::instantiate`].
///
/// # Examples
///
/// ```
/// use hornlog::ast::{app, atom, var, Clause};
///
/// // grandparent(X, Y) :- parent(X, Z), parent(Z, Y).
/// let rule = Clause::fact(app("grandparent", vec![var("X"), var("Y")]))
///     .when(app("parent", vec![var("X"), var("Z")]))
///     .when(app("parent", vec![var("Z"), var("Y")]));
/// assert_eq!(rule.body.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// The clause head; structurally an atom or an application term, never a
    /// bare variable.
    pub head: Term,
    /// The goals that must hold for the head to become true. An empty body
    /// makes the clause a fact.
    pub body: Vec<Term>,
}

impl Clause {
    /// Create a fact, i.e. a clause that always holds.
    pub fn fact(head: Term) -> Self {
        Self { head, body: vec![] }
    }

    /// Create a rule with the given body goals.
    pub fn rule(head: Term, body: Vec<Term>) -> Self {
        Self { head, body }
    }

    /// Constrain this clause with an additional goal that must hold for the
    /// head to become true.
    pub fn when(mut self, goal: Term) -> Self {
        self.body.push(goal);
        self
    }

    /// Produce a structurally identical copy of this clause in which every
    /// variable carries the given generation suffix.
    ///
    /// The caller must use a fresh generation number for every instantiation
    /// within one query, so that two uses of the same clause (in particular, a
    /// recursive clause resolved against itself) can never capture each
    /// other's variables.
    pub fn instantiate(&self, generation: u64) -> Clause {
        Clause {
            head: self.head.rename_apart(generation),
            body: self
                .body
                .iter()
                .map(|goal| goal.rename_apart(generation))
                .collect(),
        }
    }
}

/// A conjunction of goals to be proven, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub goals: Vec<Term>,
}

impl Query {
    /// A query with a single goal.
    pub fn single(goal: Term) -> Self {
        Self::with_goals(vec![goal])
    }

    /// A query consisting of the given conjunction of goals.
    pub fn with_goals(goals: Vec<Term>) -> Self {
        Self { goals }
    }

    /// Add another goal to this query.
    pub fn and(mut self, goal: Term) -> Self {
        self.goals.push(goal);
        self
    }

    /// The names of the variables mentioned in this query, in order of first
    /// occurrence. Solutions report assignments for exactly these names.
    pub fn vars(&self) -> Vec<String> {
        let mut out = Vec::new();
        for goal in &self.goals {
            goal.collect_vars(&mut out);
        }
        out
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Atom(name) => write!(f, "{}", name),
            Term::Var(name) => write!(f, "{}", name),
            Term::App(app) => write!(f, "{}", app),
        }
    }
}

impl fmt::Display for AppTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.functor)?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "({}", first)?;
            for arg in rest {
                write!(f, ", {}", arg)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display_is_structural() {
        let term = app(
            "grandparent",
            vec![atom("mary"), app("s", vec![var("X"), atom("z")])],
        );
        assert_eq!(term.to_string(), "grandparent(mary, s(X, z))");
        assert_eq!(atom("foo").to_string(), "foo");
        assert_eq!(var("Foo").to_string(), "Foo");
    }

    #[test]
    fn instantiate_renames_all_variables() {
        let clause = Clause::fact(app("ancestor", vec![var("X"), var("Y")]))
            .when(app("parent", vec![var("X"), var("Z")]))
            .when(app("ancestor", vec![var("Z"), var("Y")]));

        let fresh = clause.instantiate(7);
        assert_eq!(
            fresh.head,
            app("ancestor", vec![var("X#7"), var("Y#7")])
        );
        assert_eq!(
            fresh.body,
            vec![
                app("parent", vec![var("X#7"), var("Z#7")]),
                app("ancestor", vec![var("Z#7"), var("Y#7")]),
            ]
        );
        // the stored clause is untouched
        assert_eq!(clause.head, app("ancestor", vec![var("X"), var("Y")]));
    }

    #[test]
    fn instantiate_leaves_atoms_alone() {
        let clause = Clause::fact(app("parent", vec![atom("john"), atom("jim")]));
        assert_eq!(clause.instantiate(3), clause);
    }

    #[test]
    fn distinct_generations_never_collide() {
        let term = var("X");
        assert_ne!(term.rename_apart(0), term.rename_apart(1));
    }

    #[test]
    fn query_vars_in_first_occurrence_order() {
        let query = Query::single(app("parent", vec![var("A"), var("B")]))
            .and(app("parent", vec![var("B"), var("C")]));
        assert_eq!(query.vars(), vec!["A", "B", "C"]);
    }
}
