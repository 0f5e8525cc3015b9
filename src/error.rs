use thiserror::Error;

/// Errors raised while reading a problem or running a solver.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}")]
    AtLine {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("expected {expected}, found `{found}`")]
    Parse {
        expected: &'static str,
        found: String,
    },

    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("trailing input `{found}` after the last trial")]
    TrailingInput { found: String },

    #[error("probability {0} is outside of 0..=1")]
    ProbabilityOutOfRange(f64),

    #[error("negative time {0}")]
    NegativeTime(i64),

    #[error("exhaustive search handles at most {max} trials, got {actual}")]
    TooManyTrials { max: usize, actual: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid check setup: {0}")]
    InvalidCheck(String),
}

impl Error {
    pub(crate) fn at_line(self, line: usize) -> Self {
        Self::AtLine {
            line,
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
