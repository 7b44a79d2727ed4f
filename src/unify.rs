//! Unification of terms under a substitution environment, with occurs check.

use crate::ast::Term;
use crate::subst::Bindings;

/// Unify two terms, appending bindings to `env` as needed.
///
/// Returns `true` and leaves the new bindings in `env` on success. On failure
/// `env` may retain a prefix of the attempted bindings, because a mismatch can
/// be discovered deep inside a compound term after earlier arguments already
/// unified; the caller is expected to checkpoint before the call and restore
/// after a `false` result.
///
/// Bindings are made left-to-right over argument lists, so later arguments see
/// the bindings established by earlier ones.
pub fn unify(left: &Term, right: &Term, env: &mut Bindings) -> bool {
    let left = env.resolve(left).clone();
    let right = env.resolve(right).clone();

    match (left, right) {
        // the same unbound variable on both sides; nothing to bind
        (Term::Var(x), Term::Var(y)) if x == y => true,
        // a variable against any other term: occurs check, then bind
        (Term::Var(x), other) | (other, Term::Var(x)) => {
            if occurs(&x, &other, env) {
                return false;
            }
            env.bind(x, other);
            true
        }
        (Term::Atom(x), Term::Atom(y)) => x == y,
        (Term::App(x), Term::App(y)) => {
            x.functor == y.functor
                && x.args.len() == y.args.len()
                && x.args
                    .iter()
                    .zip(&y.args)
                    .all(|(a, b)| unify(a, b, env))
        }
        // atom against compound, or vice versa
        _ => false,
    }
}

/// Check whether the variable named `var` occurs inside `term` after
/// dereferencing through `env`. Binding a variable to a term containing
/// itself would create an infinite term.
fn occurs(var: &str, term: &Term, env: &Bindings) -> bool {
    match env.resolve(term) {
        Term::Atom(_) => false,
        Term::Var(name) => name == var,
        Term::App(app) => app.args.iter().any(|arg| occurs(var, arg, env)),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::ast::{app, atom, var};

    fn unifies(left: &Term, right: &Term) -> bool {
        let mut env = Bindings::new();
        unify(left, right, &mut env)
    }

    #[test]
    fn atoms_unify_by_name() {
        assert!(unifies(&atom("foo"), &atom("foo")));
        assert!(!unifies(&atom("foo"), &atom("bar")));
    }

    #[test]
    fn functor_and_arity_are_the_identity() {
        let one = app("f", vec![atom("a")]);
        let two = app("f", vec![atom("a"), atom("b")]);
        let other = app("g", vec![atom("a")]);
        assert!(unifies(&one, &one.clone()));
        assert!(!unifies(&one, &two));
        assert!(!unifies(&one, &other));
        // atom against compound of the same name
        assert!(!unifies(&atom("f"), &one));
    }

    #[test]
    fn variable_binds_to_term() {
        let mut env = Bindings::new();
        assert!(unify(&var("X"), &atom("jim"), &mut env));
        assert_eq!(env.lookup("X"), Some(&atom("jim")));

        // the binding participates in later unifications
        assert!(unify(&var("X"), &atom("jim"), &mut env));
        assert!(!unify(&var("X"), &atom("jane"), &mut env));
    }

    #[test]
    fn same_variable_needs_no_binding() {
        let mut env = Bindings::new();
        assert!(unify(&var("X"), &var("X"), &mut env));
        assert!(env.is_empty());
    }

    #[test]
    fn symmetry() {
        let pairs = [
            (app("f", vec![var("X"), atom("b")]), app("f", vec![atom("a"), var("Y")])),
            (var("X"), app("f", vec![atom("a")])),
            (app("f", vec![atom("a")]), app("f", vec![atom("b")])),
            (var("X"), app("f", vec![var("X")])),
        ];
        for (left, right) in &pairs {
            assert_eq!(unifies(left, right), unifies(right, left));
        }
    }

    #[test]
    fn both_sides_become_identical_under_the_substitution() {
        let left = app("f", vec![var("X"), atom("b")]);
        let right = app("f", vec![atom("a"), var("Y")]);
        let mut env = Bindings::new();
        assert!(unify(&left, &right, &mut env));
        assert_eq!(env.resolve_deep(&left), env.resolve_deep(&right));
    }

    #[test]
    fn occurs_check_rejects_cyclic_binding() {
        assert!(!unifies(&var("X"), &app("f", vec![var("X")])));
        // also through an intermediate variable: X = Y, Y = f(X)
        let mut env = Bindings::new();
        assert!(unify(&var("X"), &var("Y"), &mut env));
        assert!(!unify(&var("Y"), &app("f", vec![var("X")]), &mut env));
    }

    #[test]
    fn earlier_argument_bindings_constrain_later_arguments() {
        let shared = app("f", vec![var("X"), var("X")]);
        assert!(unifies(&shared, &app("f", vec![atom("a"), atom("a")])));
        assert!(!unifies(&shared, &app("f", vec![atom("a"), atom("b")])));
    }

    #[test]
    fn failure_may_leave_a_binding_prefix() {
        // first argument binds X before the second argument mismatches; the
        // caller restores via a checkpoint
        let mut env = Bindings::new();
        let mark = env.checkpoint();
        let ok = unify(
            &app("f", vec![var("X"), atom("b")]),
            &app("f", vec![atom("a"), atom("c")]),
            &mut env,
        );
        assert!(!ok);
        assert_eq!(env.lookup("X"), Some(&atom("a")));
        env.restore(mark);
        assert!(env.is_empty());
    }

    #[test]
    fn variable_chains_are_dereferenced_before_matching() {
        let mut env = Bindings::new();
        assert!(unify(&var("X"), &var("Y"), &mut env));
        assert!(unify(&var("Y"), &atom("jim"), &mut env));
        assert_eq!(env.resolve_deep(&var("X")), atom("jim"));
    }
}
