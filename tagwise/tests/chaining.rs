mod common;

use common::{Add, Describe, Multiply};
use tagwise::prelude::*;
use tagwise::{wrap, wrap_mut};

#[test]
fn links_run_left_to_right() {
    let n = wrap(5).apply(Add, 2).apply(Add, 3).unwrapped();
    assert_eq!(n, 10);

    // Order matters: (2 + 3) * 4, not 2 + (3 * 4).
    let n = wrap(2).apply(Add, 3).apply(Multiply, 4).unwrapped();
    assert_eq!(n, 20);
}

#[test]
fn independent_chains_share_nothing() {
    let a = wrap(5).apply(Add, 2).apply(Add, 3).unwrapped();
    let b = wrap(9).apply(Add, 2).apply(Add, 3).unwrapped();
    assert_eq!((a, b), (10, 14));
}

#[test]
fn borrowed_wrapper_mutates_caller_storage() {
    let mut n = 5;
    wrap_mut(&mut n).apply(Multiply, 10).run();
    assert_eq!(n, 50);
}

#[test]
fn borrowed_unwrap_hands_the_reference_back() {
    let mut n = 1;
    let r = wrap_mut(&mut n).apply(Add, 1).unwrapped();
    *r += 1;
    assert_eq!(n, 3);
}

#[test]
fn transforming_links_retype_the_rest_of_the_chain() {
    // Vec -> description String -> description of that String.
    let out = wrap(vec![1, 2])
        .apply(Describe, ())
        .apply(Describe, ())
        .unwrapped();
    assert_eq!(out, "string of length 6");
}

#[test]
fn a_single_link_chain_is_just_a_call() {
    assert_eq!(wrap(7).apply(Multiply, 6).unwrapped(), 42);
}
