//! Ground truth by brute force: every subset of the trials is evaluated.
//! The runtime is exponential in the number of trials,
//! so this is only meant to check [`crate::bag::solve`] on small inputs.

use itertools::Itertools;
use tracing::debug;

use crate::{Error, Prob, Result, Solution, Trial};

/// beyond this, enumerating all `2^n` subsets takes longer than anyone wants to wait.
pub const MAX_SEARCH_TRIALS: usize = 25;

/// same contract as [`crate::bag::solve`], except that more than [`MAX_SEARCH_TRIALS`]
/// trials are rejected.
/// a subset only replaces the best one found so far, if it is strictly better,
/// subsets exceeding `max_time` are ignored.
pub fn solve_by_search(trials: &[Trial], max_time: usize) -> Result<Solution> {
    let nr_trials = trials.len();
    if nr_trials > MAX_SEARCH_TRIALS {
        return Err(Error::TooManyTrials {
            max: MAX_SEARCH_TRIALS,
            actual: nr_trials,
        });
    }

    let mut best_pass = Prob::ALWAYS;
    let mut best = Vec::new();
    let mut nr_feasible = 0usize;
    for mask in 0u32..(1 << nr_trials) {
        let subset = (0..nr_trials).filter(|&i| (mask >> i) & 1 == 1).collect_vec();
        let time = subset
            .iter()
            .fold(0usize, |acc, &i| acc.saturating_add(trials[i].time()));
        if time > max_time {
            continue;
        }
        nr_feasible += 1;

        let pass = Prob::all(subset.iter().map(|&i| trials[i].pass()));
        if pass < best_pass {
            best_pass = pass;
            best = subset;
        }
    }
    debug!(nr_trials, nr_feasible, "exhaustive search done");

    Ok(Solution {
        probability: !best_pass,
        chosen: best,
    })
}
