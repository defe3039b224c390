#![cfg(test)]

use crate::basic_types::Prune;
use crate::constraints;
use crate::engine::test_helper::TestProblem;
use crate::propagators::GeneralisedArcConsistency;
use crate::propagators::PropagationStrategy::GeneralisedArcConsistency as Gac;
use crate::InconsistencyCause;
use crate::Propagator;

#[test]
fn values_without_support_are_pruned() {
    let mut problem = TestProblem::default();
    let a = problem.new_variable(1, 3);
    let b = problem.new_variable(1, 3);
    let c = problem.new_variable(1, 3);
    let _ = problem.add_constraint(constraints::predicate(
        "DistinctSumToSix",
        [a, b, c],
        |values: &[i32]| {
            values[0] + values[1] + values[2] == 6
                && values[0] != values[1]
                && values[0] != values[2]
                && values[1] != values[2]
        },
    ));

    problem.assign(a, 1);
    let pruned = problem
        .propagate(Gac, Some(a))
        .expect("b = 2, c = 3 is a solution");

    assert_eq!(vec![Prune::new(b, 1), Prune::new(c, 1)], pruned);
    problem.assert_domain(b, &[2, 3]);
    problem.assert_domain(c, &[2, 3]);
}

#[test]
fn separate_sum_and_all_different_reach_the_same_fixpoint() {
    let mut problem = TestProblem::default();
    let a = problem.new_variable(1, 3);
    let b = problem.new_variable(1, 3);
    let c = problem.new_variable(1, 3);
    let _ = problem.add_constraint(constraints::equals([a, b, c], 6));
    let _ = problem.add_constraint(constraints::all_different([a, b, c]));

    problem.assign(a, 1);
    let pruned = problem
        .propagate(Gac, Some(a))
        .expect("b = 2, c = 3 is a solution");

    assert_eq!(vec![Prune::new(b, 1), Prune::new(c, 1)], pruned);
    problem.assert_domain(b, &[2, 3]);
    problem.assert_domain(c, &[2, 3]);
}

#[test]
fn wipeout_stops_propagation() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(5, 5);
    let y = problem.new_variable(5, 5);
    let z = problem.new_variable(0, 1);
    let _ = problem.add_constraint(constraints::not_equals(x, y));
    let _ = problem.add_constraint(constraints::not_equals(z, z));

    let inconsistency = problem
        .propagate(Gac, None)
        .expect_err("x and y can only be 5");

    assert_eq!(InconsistencyCause::EmptyDomain(x), inconsistency.cause);
    assert_eq!(vec![Prune::new(x, 5)], inconsistency.pruned);
    // The unsatisfiable constraint over z is never revised.
    problem.assert_domain(z, &[0, 1]);
}

#[test]
fn queue_is_empty_after_a_wipeout() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(5, 5);
    let y = problem.new_variable(5, 5);
    let _ = problem.add_constraint(constraints::not_equals(x, y));
    let _ = problem.add_constraint(constraints::not_equals(y, x));

    let mut propagator = GeneralisedArcConsistency::default();

    for _ in 0..2 {
        let inconsistency = propagator
            .propagate(&mut problem.problem, None)
            .expect_err("x and y can only be 5");
        assert_eq!(vec![Prune::new(x, 5)], inconsistency.pruned);

        problem.restore(&inconsistency.pruned);
        problem.assert_domain(x, &[5]);
    }
}

#[test]
fn propagation_is_idempotent() {
    let mut problem = TestProblem::default();
    let a = problem.new_variable(1, 3);
    let b = problem.new_variable(1, 3);
    let c = problem.new_variable(1, 3);
    let _ = problem.add_constraint(constraints::equals([a, b, c], 6));
    let _ = problem.add_constraint(constraints::all_different([a, b, c]));

    problem.assign(a, 1);
    let pruned = problem.propagate(Gac, Some(a)).expect("consistent");
    assert!(!pruned.is_empty());

    assert_eq!(Ok(vec![]), problem.propagate(Gac, Some(a)));
    assert_eq!(Ok(vec![]), problem.propagate(Gac, None));
}

#[test]
fn prunes_are_propagated_transitively() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 1);
    let y = problem.new_variable(0, 1);
    let z = problem.new_variable(0, 1);
    let _ = problem.add_constraint(constraints::not_equals(x, y));
    let _ = problem.add_constraint(constraints::not_equals(y, z));

    problem.assign(x, 0);
    let pruned = problem
        .propagate(Gac, Some(x))
        .expect("x = 0, y = 1, z = 0 is a solution");

    assert_eq!(vec![Prune::new(y, 0), Prune::new(z, 1)], pruned);
    problem.assert_domain(y, &[1]);
    problem.assert_domain(z, &[0]);
}

#[test]
fn seeding_without_a_variable_revises_every_constraint() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 3);
    let y = problem.new_variable(0, 3);
    let z = problem.new_variable(4, 4);
    let w = problem.new_variable(4, 5);
    let _ = problem.add_constraint(
        constraints::table([x, y], [vec![0, 1], vec![1, 2]]).expect("tuples of arity 2"),
    );
    let _ = problem.add_constraint(constraints::not_equals(z, w));

    let pruned = problem.propagate(Gac, None).expect("x = 0, y = 1, z = 4, w = 5");

    assert_eq!(
        vec![
            Prune::new(x, 2),
            Prune::new(x, 3),
            Prune::new(y, 0),
            Prune::new(y, 3),
            Prune::new(w, 4)
        ],
        pruned
    );
    problem.assert_domain(x, &[0, 1]);
    problem.assert_domain(y, &[1, 2]);
    problem.assert_domain(w, &[5]);
}

#[test]
fn repeated_variable_supports_itself_consistently() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 3);
    let _ = problem.add_constraint(constraints::equals([x, x], 4));

    let _ = problem.propagate(Gac, None).expect("x = 2");

    problem.assert_domain(x, &[2]);
}

#[test]
fn restoring_after_failure_recovers_the_domains() {
    let mut problem = TestProblem::default();
    let x = problem.new_variable(0, 2);
    let y = problem.new_variable(0, 2);
    let z = problem.new_variable(0, 2);
    let _ = problem.add_constraint(constraints::all_different([x, y, z]));
    let _ = problem.add_constraint(constraints::equals([y, z], 1));

    problem.assign(x, 1);
    let inconsistency = problem
        .propagate(Gac, Some(x))
        .expect_err("y and z can only be 0 and 1");
    assert!(!inconsistency.pruned.is_empty());

    problem.restore(&inconsistency.pruned);
    problem.unassign(x);

    for variable in [x, y, z] {
        problem.assert_domain(variable, &[0, 1, 2]);
    }
}
