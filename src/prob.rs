/// short for _Propability_, thus the held data is assumed to be in the range `0.0..=1.0`.
/// All operations on multiple propabilites assume they are independent from each other.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prob(f64);

impl Prob {
    pub const ALWAYS: Self = Self(1.0);
    pub const NEVER: Self = Self(0.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn new(val: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&val));
        Self(val)
    }

    /// `None` if `val` is nan or lies outside of `0.0..=1.0`.
    pub fn checked(val: f64) -> Option<Self> {
        (0.0..=1.0).contains(&val).then_some(Self(val))
    }

    /// all events occur. for an empty iterator this is [`Prob::ALWAYS`].
    /// the factors are multiplied in iteration order, starting with `1.0`.
    pub fn all(ps: impl IntoIterator<Item = Self>) -> Self {
        ps.into_iter().fold(Self::ALWAYS, |a, b| a & b)
    }

    pub fn none(ps: impl IntoIterator<Item = Self>) -> Self {
        Self::all(ps.into_iter().map(|x| !x))
    }

    /// at least one event occurs, e.g. at least one of the chosen trials fails.
    pub fn any(ps: impl IntoIterator<Item = Self>) -> Self {
        !Self::none(ps)
    }
}

impl std::fmt::Display for Prob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}", self.0)
    }
}

impl std::ops::BitAnd for Prob {
    type Output = Self;
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl std::ops::BitOr for Prob {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self::Output {
        !(!self & !rhs)
    }
}

impl std::ops::Not for Prob {
    type Output = Self;
    fn not(self) -> Self::Output {
        Self(1.0 - self.0)
    }
}

/// values can never be nan -> no worries
impl std::cmp::Eq for Prob {}

impl std::cmp::PartialOrd for Prob {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for Prob {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}
