//! Depth-first SLD resolution over a [`Database`].
//!
//! [`query_dfs`] proves the goals of a [`Query`] left-to-right, trying clauses
//! in insertion order and backtracking through a trail of bindings. The search
//! is exposed as the lazy [`SolutionIter`]: pulling the next item resumes the
//! search, and dropping the iterator abandons it with no residual state, so
//! "first solution only" is simply not pulling a second time.


use std::fmt;

use crate::ast::{Query, Term};
use crate::database::Database;
use crate::subst::{self, Bindings};
use crate::unify::unify;

/// Error for a goal that no clause head could ever match: a bare variable in
/// goal position.
///
/// This is reported distinctly from ordinary search failure (an exhausted
/// [`SolutionIter`]) so that callers can tell an ill-formed question from a
/// provable "no".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedGoalError {
    /// The name of the offending variable.
    pub var: String,
}

impl fmt::Display for MalformedGoalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "goal position holds a bare variable: {}", self.var)
    }
}

impl std::error::Error for MalformedGoalError {}

/// Caller-selected enumeration mode for [`run_query`](crate::textual::TextualDatabase::run_query).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Stop after the first solution.
    First,
    /// Enumerate every solution, in the order determined by clause insertion
    /// order and argument order.
    All,
}

/// One proven answer to a query: an assignment for each query variable, in
/// order of first occurrence in the query.
///
/// A `None` value means the query holds for any instantiation of that
/// variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub bindings: Vec<(String, Option<Term>)>,
}

impl Solution {
    /// The assignment of the named query variable, or `None` when the
    /// variable is unknown or unconstrained.
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.bindings
            .iter()
            .find(|(var, _)| var == name)
            .and_then(|(_, term)| term.as_ref())
    }
}

/// Solve a query against a database using depth-first search.
///
/// Fails upfront with [`MalformedGoalError`] if any query goal, clause head or
/// clause body goal is a bare variable; such a goal could otherwise neither
/// succeed nor fail meaningfully. On success, the returned iterator owns all
/// per-query state (trail and renaming counter), so independent queries never
/// share anything.
pub fn query_dfs<'d>(
    database: &'d Database,
    query: &Query,
) -> Result<SolutionIter<'d>, MalformedGoalError> {
    for goal in &query.goals {
        check_resolvable(goal)?;
    }
    for clause in database.iter() {
        check_resolvable(&clause.head)?;
        for goal in &clause.body {
            check_resolvable(goal)?;
        }
    }

    Ok(SolutionIter {
        database,
        // reverse so that the leftmost goal ends up on the top of the stack
        goals: query.goals.iter().rev().cloned().collect(),
        checkpoints: vec![],
        bindings: Bindings::new(),
        query_vars: query.vars(),
        generation: 0,
    })
}

fn check_resolvable(goal: &Term) -> Result<(), MalformedGoalError> {
    if let Term::Var(name) = goal {
        Err(MalformedGoalError { var: name.clone() })
    } else {
        Ok(())
    }
}

/// Iterator over all solutions of a query.
///
/// There are two ways of exploring the solution space:
/// 1. The [`Iterator`] implementation, yielding one [`Solution`] at a time.
/// 2. [`SolutionIter::step`], which also returns between intermediate steps,
///    allowing a driver to check for cancellation at every choice point.
#[derive(Debug)]
pub struct SolutionIter<'d> {
    /// The knowledge base; read-only for the lifetime of the query.
    database: &'d Database,
    /// Goals that still need to be proven; the current goal is on top.
    goals: Vec<Term>,
    /// Checkpoints for past clause choices, used for backtracking.
    checkpoints: Vec<Checkpoint>,
    /// The trail of bindings made by the proof attempts so far.
    bindings: Bindings,
    /// Names of the original query variables, in first-occurrence order.
    query_vars: Vec<String>,
    /// Renaming counter shared by the whole search tree of this query,
    /// incremented on every clause instantiation.
    generation: u64,
}

/// A choice point: which goal was being resolved, which clause to try next,
/// and how to restore the goal stack and trail to the state before the choice.
#[derive(Debug)]
struct Checkpoint {
    /// The goal for which a clause is being chosen.
    goal: Term,
    /// Index of the next database clause to try for this goal.
    next_clause: usize,
    /// Length of the goal stack before the choice.
    goals_len: usize,
    /// Trail state before the choice.
    trail: subst::Checkpoint,
}

/// Status of the iterator after performing one [`SolutionIter::step`].
pub enum Step {
    /// A solution was found; obtain it via [`SolutionIter::get_solution`].
    Yield,
    /// Progress was made but no solution was found yet.
    Continue,
    /// The solution space is exhausted.
    Done,
}

impl<'d> SolutionIter<'d> {
    /// Perform a single solver step.
    ///
    /// This is a finer-grained alternative to the iterator interface; a
    /// driver can stop (or check an interrupt flag) at every choice point
    /// rather than only when a solution is found.
    pub fn step(&mut self) -> Step {
        // When an unresolved goal remains, open a choice point for it.
        if let Some(goal) = self.goals.pop() {
            self.checkpoints.push(Checkpoint {
                trail: self.bindings.checkpoint(),
                goals_len: self.goals.len(),
                goal,
                next_clause: 0,
            });
        }
        // Then resume the topmost checkpoint that still has a clause left to
        // try (usually the one just pushed).
        if self.resume_or_backtrack() {
            if self.goals.is_empty() {
                Step::Yield
            } else {
                Step::Continue
            }
        } else {
            Step::Done
        }
    }

    /// The current assignment of the query variables.
    ///
    /// Call this right after [`SolutionIter::step`] returned [`Step::Yield`];
    /// at any other point the assignment is partial.
    pub fn get_solution(&self) -> Solution {
        Solution {
            bindings: self
                .query_vars
                .iter()
                .map(|name| {
                    let value = self.bindings.lookup(name).map(|term| self.bindings.resolve_deep(term));
                    // A variable (transitively) bound only to other variables
                    // is as unconstrained as an unbound one.
                    let value = value.filter(|term| !matches!(term, Term::Var(_)));
                    (name.clone(), value)
                })
                .collect(),
        }
    }

    /// Try the remaining clauses of the topmost checkpoint, in insertion
    /// order, and return whether one of them was committed to.
    ///
    /// If no clause is left, the checkpoint is discarded and its goal put
    /// back, so the search can revisit this goal from an earlier choice.
    fn resume_checkpoint(&mut self) -> bool {
        loop {
            let checkpoint = self
                .checkpoints
                .last_mut()
                .expect("invariant: there is always a checkpoint when this is called");
            let clause = match self.database.clauses().get(checkpoint.next_clause) {
                Some(clause) => clause,
                None => break,
            };
            checkpoint.next_clause += 1;

            let fresh = clause.instantiate(self.generation);
            self.generation += 1;

            if unify(&checkpoint.goal, &fresh.head, &mut self.bindings) {
                // the clause body becomes the leading part of the goal list;
                // reversed so the leftmost goal is on top of the stack
                self.goals.extend(fresh.body.into_iter().rev());
                return true;
            }
            self.bindings.restore(checkpoint.trail);
        }
        let discarded = self.checkpoints.pop().expect("we know there is one here");
        self.goals.push(discarded.goal);
        false
    }

    /// Backtrack to the first checkpoint that commits to a clause choice.
    fn resume_or_backtrack(&mut self) -> bool {
        while let Some(checkpoint) = self.checkpoints.last() {
            // undo everything the previous attempt did, then resume
            self.bindings.restore(checkpoint.trail);
            self.goals.truncate(checkpoint.goals_len);
            if self.resume_checkpoint() {
                return true;
            }
        }
        false
    }
}

impl<'d> Iterator for SolutionIter<'d> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.step() {
                Step::Yield => break Some(self.get_solution()),
                Step::Continue => continue,
                Step::Done => break None,
            }
        }
    }
}
