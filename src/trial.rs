use std::io::Read;
use std::str::FromStr;

use tracing::warn;

use crate::{Error, Prob, Result};

/// one test of the program under inspection: it fails with propability `prob`
/// and takes `time` units to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    prob: Prob,
    time: usize,
}

impl Trial {
    pub fn new(probability: f64, time: usize) -> Result<Self> {
        let prob = Prob::checked(probability).ok_or(Error::ProbabilityOutOfRange(probability))?;
        Ok(Self { prob, time })
    }

    pub fn prob(&self) -> Prob {
        self.prob
    }

    /// propability that running this trial does not reveal the fault.
    pub fn pass(&self) -> Prob {
        !self.prob
    }

    pub fn time(&self) -> usize {
        self.time
    }
}

/// the trials together with the time budget, as read from the text format:
/// ```text
/// 2 2
/// 0.5 1
/// 0.7 1
/// ```
/// the first line holds the number of trials and the budget,
/// every following line one trial as propability and time.
#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub trials: Vec<Trial>,
    pub max_time: usize,
}

impl Problem {
    pub fn read(mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        text.parse()
    }
}

/// whitespace separated tokens, each tagged with its 1-based line number.
struct Tokens<'a> {
    iter: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        let iter = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| line.split_whitespace().map(move |tok| (i + 1, tok)));
        Self {
            iter: Box::new(iter),
            last_line: 1,
        }
    }

    fn next_parsed<T: FromStr>(&mut self, expected: &'static str) -> Result<(usize, T)> {
        let Some((line, tok)) = self.iter.next() else {
            return Err(Error::UnexpectedEof { expected }.at_line(self.last_line));
        };
        self.last_line = line;
        let val = tok.parse().map_err(|_| {
            Error::Parse {
                expected,
                found: tok.to_string(),
            }
            .at_line(line)
        })?;
        Ok((line, val))
    }
}

impl FromStr for Problem {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        let mut tokens = Tokens::new(text);
        let (_, nr_trials) = tokens.next_parsed::<usize>("number of trials")?;
        let (line, max_time) = tokens.next_parsed::<i64>("time budget")?;
        let max_time = if max_time < 0 {
            warn!(line, max_time, "negative time budget, nothing fits");
            0
        } else {
            usize::try_from(max_time).unwrap_or(usize::MAX)
        };

        let mut trials = Vec::with_capacity(nr_trials.min(1 << 16));
        for _ in 0..nr_trials {
            let (line, probability) = tokens.next_parsed::<f64>("probability")?;
            let (_, time) = tokens.next_parsed::<i64>("time")?;
            let time = usize::try_from(time).map_err(|_| Error::NegativeTime(time).at_line(line))?;
            trials.push(Trial::new(probability, time).map_err(|e| e.at_line(line))?);
        }

        if let Some((line, tok)) = tokens.iter.next() {
            return Err(Error::TrailingInput {
                found: tok.to_string(),
            }
            .at_line(line));
        }

        Ok(Self { trials, max_time })
    }
}
