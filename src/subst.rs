//! The substitution environment: an append-only trail of variable bindings
//! with a checkpoint/restore protocol for backtracking.
//!
//! The trail is the single mutable data structure shared by an entire search
//! tree. Bindings are only ever pushed; undoing a failed proof attempt
//! truncates the trail back to a [`Checkpoint`] taken before the attempt,
//! which drops all bindings made since in one step.

use crate::ast::{AppTerm, Term};

/// A resumption point in the trail, created by [`Bindings::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// The ordered record of current variable bindings.
///
/// A binding for a name is never overwritten: a later `bind` for the same name
/// shadows the earlier entry by recency, and [`Bindings::restore`] brings the
/// earlier entry back into effect simply by truncating. [`Bindings::lookup`]
/// therefore scans newest-first.
#[derive(Debug, Default)]
pub struct Bindings {
    trail: Vec<(String, Term)>,
}

impl Bindings {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self { trail: Vec::new() }
    }

    /// The number of live trail entries.
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Append a binding of `var` to `term`. Any existing binding for the same
    /// name is shadowed, not replaced.
    pub fn bind(&mut self, var: String, term: Term) {
        self.trail.push((var, term));
    }

    /// Look up the most recent binding for `var`, if any.
    pub fn lookup(&self, var: &str) -> Option<&Term> {
        self.trail
            .iter()
            .rev()
            .find(|(name, _)| name.as_str() == var)
            .map(|(_, term)| term)
    }

    /// Follow variable-to-variable chains starting at `term` until reaching a
    /// non-variable term or an unbound variable.
    ///
    /// This is the canonical way of obtaining a term's current value. The
    /// returned reference points into the trail (or back at `term` itself);
    /// it is not an owned copy.
    pub fn resolve<'a>(&'a self, mut term: &'a Term) -> &'a Term {
        while let Term::Var(name) = term {
            match self.lookup(name) {
                Some(bound) => term = bound,
                None => break,
            }
        }
        term
    }

    /// Resolve `term` recursively, producing an owned copy in which every
    /// bound variable has been replaced by its most concrete value.
    pub fn resolve_deep(&self, term: &Term) -> Term {
        match self.resolve(term) {
            Term::App(app) => Term::App(AppTerm {
                functor: app.functor.clone(),
                args: app.args.iter().map(|arg| self.resolve_deep(arg)).collect(),
            }),
            other => other.clone(),
        }
    }

    /// Take a resumption point for a later [`Bindings::restore`].
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Drop every binding appended after `checkpoint` was taken.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.trail.truncate(checkpoint.0);
    }
}
