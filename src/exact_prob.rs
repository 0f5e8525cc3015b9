use fraction::{One, ToPrimitive, Zero};

type BU = fraction::BigUint;
type Ratio = fraction::Ratio<BU>;

/// every `f64` in `0.0..=1.0` with at most 53 fractional bits is a multiple of this.
const DEN: u64 = 1 << 53;

/// [`super::Prob`] without rounding: products of many propabilities are kept exact,
/// which makes it a reference for checking float results.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExactProb(Ratio);

impl ExactProb {
    pub fn always() -> Self {
        Self(Ratio::one())
    }

    pub fn never() -> Self {
        Self(Ratio::zero())
    }

    pub fn approximate(&self) -> super::Prob {
        self.0
            .to_f64()
            .map_or(super::Prob::NEVER, |val| super::Prob::new(val.clamp(0.0, 1.0)))
    }

    pub fn new(val: f64) -> Self {
        debug_assert!((0.0..=1.0).contains(&val));
        let num = (val * (DEN as f64)) as u64;
        Self(Ratio::new(num.into(), DEN.into()))
    }

    pub fn all(ps: impl IntoIterator<Item = Self>) -> Self {
        ps.into_iter().fold(Self::always(), |a, b| a & b)
    }

    pub fn none(ps: impl IntoIterator<Item = Self>) -> Self {
        Self::all(ps.into_iter().map(|x| !x))
    }

    pub fn any(ps: impl IntoIterator<Item = Self>) -> Self {
        !Self::none(ps)
    }
}

impl From<super::Prob> for ExactProb {
    fn from(p: super::Prob) -> Self {
        Self::new(p.value())
    }
}

impl std::fmt::Display for ExactProb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.approximate())
    }
}

impl std::ops::Not for ExactProb {
    type Output = ExactProb;
    fn not(self) -> Self::Output {
        let (num, den) = self.0.into_raw();
        ExactProb(Ratio::new(den.clone() - num, den))
    }
}

impl std::ops::BitAndAssign<&ExactProb> for ExactProb {
    fn bitand_assign(&mut self, rhs: &ExactProb) {
        self.0 *= &rhs.0;
    }
}

impl std::ops::BitAnd for ExactProb {
    type Output = ExactProb;
    fn bitand(mut self, rhs: ExactProb) -> ExactProb {
        self &= &rhs;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Prob;

    #[test]
    fn operators() {
        assert_eq!(ExactProb::new(0.5) & ExactProb::new(0.5), ExactProb::new(0.25));
        assert_eq!(!ExactProb::new(0.125), ExactProb::new(0.875));
        assert_eq!(!ExactProb::always(), ExactProb::never());
    }

    #[test]
    fn conversion_is_exact_for_dyadic_values() {
        for val in [0.0, 0.25, 0.5, 0.875, 1.0] {
            assert_eq!(ExactProb::new(val).approximate(), Prob::new(val));
        }
    }

    #[test]
    fn any_matches_float_within_rounding() {
        let ps = [0.5, 0.64, 0.12, 0.333];
        let exact = ExactProb::any(ps.iter().map(|&p| ExactProb::new(p)));
        let float = Prob::any(ps.iter().map(|&p| Prob::new(p)));
        assert!((exact.approximate().value() - float.value()).abs() < 1e-12);
    }

    #[test]
    fn any_of_nothing_is_never() {
        assert_eq!(ExactProb::any(std::iter::empty()), ExactProb::never());
    }
}
