//! Scratch buffers of every combinator come from `Space::temporary`.
//!
//! `CountingSpace` overrides the hook and counts calls; leaf operators allocate nothing, so
//! each count below is the number of intermediate results the combinator needs.

mod common;

use common::{CountingSpace, Square};
use opalg::{
    Composition, LeftScalarMultiplication, LinearComposition, LinearOperator, LinearSum, Op,
    Operator, PointwiseProduct, RightScalarMultiplication, RnVector, ScalingOperator, Space, Sum,
};

fn setup() -> (CountingSpace, Op<CountingSpace>, Op<CountingSpace>) {
    let space = CountingSpace::new(3);
    let doubling = Op::self_adjoint(ScalingOperator::new(space.clone(), 2.0));
    let square = Op::new(Square { space: space.clone() });
    (space, doubling, square)
}

fn temporaries_per_apply<A: Operator<CountingSpace> + ?Sized>(space: &CountingSpace, op: &A) -> usize {
    let x = RnVector::from(vec![1.0, -2.0, 0.5]);
    let mut out = space.zero();
    space.take_temporaries();
    op.apply(&x, &mut out).unwrap();
    space.take_temporaries()
}

fn temporaries_per_adjoint<A: LinearOperator<CountingSpace> + ?Sized>(space: &CountingSpace, op: &A) -> usize {
    let y = RnVector::from(vec![0.5, 1.0, -1.0]);
    let mut out = space.zero();
    space.take_temporaries();
    op.apply_adjoint(&y, &mut out).unwrap();
    space.take_temporaries()
}

#[test]
fn leaves_allocate_nothing() {
    let (space, doubling, square) = setup();
    assert_eq!(temporaries_per_apply(&space, &doubling), 0);
    assert_eq!(temporaries_per_apply(&space, &square), 0);
    let left = LeftScalarMultiplication::new(square, 3.0).unwrap();
    assert_eq!(temporaries_per_apply(&space, &left), 0);
}

#[test]
fn nonlinear_combinators_use_the_hook() {
    let (space, doubling, square) = setup();
    let sum = Sum::new(square.clone(), doubling.clone()).unwrap();
    let comp = Composition::new(square.clone(), doubling.clone()).unwrap();
    let prod = PointwiseProduct::new(square.clone(), doubling).unwrap();
    let right = RightScalarMultiplication::new(square, 3.0).unwrap();
    assert_eq!(temporaries_per_apply(&space, &sum), 1);
    assert_eq!(temporaries_per_apply(&space, &comp), 1);
    assert_eq!(temporaries_per_apply(&space, &prod), 1);
    assert_eq!(temporaries_per_apply(&space, &right), 1);
}

#[test]
fn right_multiplication_copies_input_into_a_temporary() {
    let (space, _, square) = setup();
    let right = RightScalarMultiplication::new(square, 2.0).unwrap();
    let x = RnVector::from(vec![1.0, 2.0, 3.0]);
    let y = right.call(&x).unwrap();
    assert_eq!(space.take_temporaries(), 1);
    assert_eq!(x.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(y.as_slice(), &[4.0, 16.0, 36.0]);
}

#[test]
fn linear_combinators_use_the_hook_both_ways() {
    let (space, doubling, _) = setup();
    let sum = LinearSum::new(doubling.clone(), doubling.clone()).unwrap();
    let comp = LinearComposition::new(doubling.clone(), doubling).unwrap();
    assert_eq!(temporaries_per_apply(&space, &sum), 1);
    assert_eq!(temporaries_per_adjoint(&space, &sum), 1);
    assert_eq!(temporaries_per_apply(&space, &comp), 1);
    assert_eq!(temporaries_per_adjoint(&space, &comp), 1);
}

#[test]
fn nested_expressions_allocate_per_node() {
    // (D + D) ∘ D
    let (space, doubling, _) = setup();
    let expr = doubling.sum(&doubling).unwrap().compose(&doubling).unwrap();
    assert_eq!(temporaries_per_apply(&space, &expr), 2);
    assert_eq!(temporaries_per_adjoint(&space, expr.as_linear().unwrap().as_ref()), 2);
}
