#![cfg(test)]

use crate::basic_types::Prune;
use crate::constraints;
use crate::engine::test_helper::TestProblem;
use crate::propagators::PropagationStrategy::ForwardCheck;
use crate::InconsistencyCause;

#[test]
fn last_unassigned_variable_is_pruned() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 1);
    let y = problem.new_variable(0, 1);
    let _ = problem.add_constraint(constraints::not_equals(x, y));

    problem.assign(x, 0);
    let pruned = problem
        .propagate(ForwardCheck, Some(x))
        .expect("y can still be 1");

    assert_eq!(vec![Prune::new(y, 0)], pruned);
    problem.assert_domain(y, &[1]);

    problem.assign(y, 1);
    let pruned = problem
        .propagate(ForwardCheck, Some(y))
        .expect("nothing is left to check");
    assert!(pruned.is_empty());
}

#[test]
fn unary_constraints_are_checked_before_search() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 3);
    let y = problem.new_variable(0, 3);
    let _ = problem.add_constraint(constraints::predicate("Even", [x], |values: &[i32]| {
        values[0] % 2 == 0
    }));
    let _ = problem.add_constraint(constraints::not_equals(x, y));

    let pruned = problem.propagate(ForwardCheck, None).expect("x can be even");

    assert_eq!(vec![Prune::new(x, 1), Prune::new(x, 3)], pruned);
    problem.assert_domain(x, &[0, 2]);
    problem.assert_domain(y, &[0, 1, 2, 3]);
}

#[test]
fn constraints_with_multiple_unassigned_variables_are_skipped() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 2);
    let y = problem.new_variable(0, 2);
    let z = problem.new_variable(0, 2);
    let _ = problem.add_constraint(constraints::all_different([x, y, z]));

    problem.assign(x, 0);
    let pruned = problem
        .propagate(ForwardCheck, Some(x))
        .expect("y and z are both unassigned");

    assert!(pruned.is_empty());
    problem.assert_domain(y, &[0, 1, 2]);
}

#[test]
fn repeated_variable_counts_as_one_unassigned_variable() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 3);
    let y = problem.new_variable(0, 3);
    let _ = problem.add_constraint(constraints::equals([x, y, y], 4));

    problem.assign(x, 0);
    let _ = problem
        .propagate(ForwardCheck, Some(x))
        .expect("y = 2 satisfies the constraint");

    problem.assert_domain(y, &[2]);
}

#[test]
fn wipeout_returns_the_prunes_made_so_far() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 2);
    let y = problem.new_sparse_variable(&[0]);
    let z = problem.new_variable(0, 2);
    let _ = problem.add_constraint(constraints::not_equals(x, z));
    let _ = problem.add_constraint(constraints::not_equals(x, y));
    let _ = problem.add_constraint(constraints::not_equals(z, x));

    problem.assign(x, 0);
    let inconsistency = problem
        .propagate(ForwardCheck, Some(x))
        .expect_err("y can only be 0");

    assert_eq!(InconsistencyCause::EmptyDomain(y), inconsistency.cause);
    assert_eq!(
        vec![Prune::new(z, 0), Prune::new(y, 0)],
        inconsistency.pruned
    );

    problem.restore(&inconsistency.pruned);
    problem.unassign(x);

    problem.assert_domain(x, &[0, 1, 2]);
    problem.assert_domain(y, &[0]);
    problem.assert_domain(z, &[0, 1, 2]);
}

#[test]
fn pruning_is_restricted_to_constraints_over_the_new_variable() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 1);
    let y = problem.new_variable(0, 1);
    let z = problem.new_variable(0, 1);
    let _ = problem.add_constraint(constraints::not_equals(x, y));
    let _ = problem.add_constraint(constraints::not_equals(z, y));

    problem.assign(x, 0);
    let _ = problem
        .propagate(ForwardCheck, Some(x))
        .expect("y can still be 1");
    problem.assign(z, 1);

    // The constraint over z and y is not revisited for an assignment of x.
    let pruned = problem
        .propagate(ForwardCheck, Some(x))
        .expect("no constraint over x is forward-checkable");
    assert!(pruned.is_empty());

    let inconsistency = problem
        .propagate(ForwardCheck, Some(z))
        .expect_err("y has to differ from both 0 and 1");
    assert_eq!(vec![Prune::new(y, 1)], inconsistency.pruned);
}
