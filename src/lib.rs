//! Problem:
//! We are given `n` tests `T_0, ..., T_(n - 1)` of a flaky program.
//! Associated with each test is a propability `p_i` that running it makes the program fail
//! and a running time `t_i`.
//! The tests fail independently of each other.
//! Under a total time budget, which tests should be run, so that the propability
//! of observing at least one failure is as large as possible?
//!
//! Observing at least one failure is the complement of every chosen test passing,
//! so we minimize the product of the pass propabilities `1 - p_i` instead.
//! That is a 0/1 knapsack for minimization, where the values multiply instead of add.
//! [`bag::solve`] solves it by dynamic programming over `(time, tests considered)`,
//! [`search::solve_by_search`] enumerates every subset and serves as ground truth.

mod prob;
pub use prob::Prob;

mod exact_prob;
pub use exact_prob::ExactProb;

mod error;
pub use error::{Error, Result};

mod trial;
pub use trial::{Problem, Trial};

mod solution;
pub use solution::Solution;

pub mod bag;
pub mod harness;
pub mod search;
