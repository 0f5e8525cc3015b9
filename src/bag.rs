//! Dynamic programming over `(time budget, number of trials considered)`.
//!
//! `pass[(t, k)]` is the smallest propability that every chosen trial passes,
//! if only the first `k` trials may be chosen and their times sum to at most `t`.
//! Without any trial everything passes, thus column `0` is [`Prob::ALWAYS`].
//! Trial `k - 1` is either skipped, keeping `pass[(t, k - 1)]`,
//! or taken, giving `pass[(t - time, k - 1)] & !prob`.
//! The answer is `!pass[(max_time, n)]`.

use tracing::debug;

use crate::{Prob, Solution, Trial};

/// `nr_rows * nr_cols` cells stored row after row continuously in memory,
/// indexed by `(row, col)`.
#[derive(Debug, Clone)]
struct Table<T> {
    flat: Vec<T>,
    nr_cols: usize,
}

impl<T: Clone> Table<T> {
    fn new(nr_rows: usize, nr_cols: usize, init: T) -> Self {
        Self {
            flat: vec![init; nr_rows * nr_cols],
            nr_cols,
        }
    }
}

impl<T> std::ops::Index<(usize, usize)> for Table<T> {
    type Output = T;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        debug_assert!(col < self.nr_cols);
        &self.flat[row * self.nr_cols + col]
    }
}

impl<T> std::ops::IndexMut<(usize, usize)> for Table<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        debug_assert!(col < self.nr_cols);
        &mut self.flat[row * self.nr_cols + col]
    }
}

/// maximizes the propability that at least one chosen trial fails,
/// while the times of the chosen trials sum to at most `max_time`.
///
/// taking a trial is only recorded if it is strictly better than skipping it,
/// so among equally good subsets the walk back from `(max_time, n)`
/// prefers to leave a trial out.
///
/// runs in `O(n * max_time)` time and memory, where `max_time` is at most
/// the sum of all trial times.
pub fn solve(trials: &[Trial], max_time: usize) -> Solution {
    let nr_trials = trials.len();
    // rows beyond the time of all trials together are copies of that row
    let total_time = trials
        .iter()
        .map(Trial::time)
        .filter(|&time| time <= max_time)
        .fold(0usize, usize::saturating_add);
    let max_time = max_time.min(total_time);
    let nr_rows = max_time + 1;
    let nr_cols = nr_trials + 1;
    debug!(nr_rows, nr_cols, "filling knapsack table");

    let mut pass = Table::new(nr_rows, nr_cols, Prob::ALWAYS);
    let mut taken = Table::new(nr_rows, nr_cols, false);

    for (k, trial) in (1..=nr_trials).zip(trials) {
        let trial_pass = trial.pass();
        for t in 0..nr_rows {
            pass[(t, k)] = pass[(t, k - 1)];
            let Some(rest) = t.checked_sub(trial.time()) else {
                continue;
            };
            let with_trial = pass[(rest, k - 1)] & trial_pass;
            if with_trial < pass[(t, k)] {
                pass[(t, k)] = with_trial;
                taken[(t, k)] = true;
            }
        }
    }

    let mut chosen = Vec::new();
    let mut t = max_time;
    for k in (1..=nr_trials).rev() {
        if taken[(t, k)] {
            chosen.push(k - 1);
            t -= trials[k - 1].time();
        }
    }
    chosen.reverse();

    let solution = Solution {
        probability: !pass[(max_time, nr_trials)],
        chosen,
    };
    debug!(probability = %solution.probability, chosen = ?solution.chosen, "knapsack solved");
    solution
}
