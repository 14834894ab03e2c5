use crate::error::Result;

/// A value with a canonical (fully reduced) representation.
///
/// Computing the canonical form is idempotent: `x.canonical()?.canonical()?`
/// equals `x.canonical()?`.
pub trait Canonical: Sized {
    fn canonical(&self) -> Result<Self>;
}

/// Construct a value from the `(degree, radicand)` shorthand of a root,
/// with an implicit coefficient of one.
pub trait FromRoot<T>: Sized {
    type Error;

    fn from_root(degree: T, radicand: T) -> std::result::Result<Self, Self::Error>;
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T),
}

impl<T> Approximation<T> {
    #[inline]
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) | Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximation_test() {
        assert_eq!(Approximation::Exact(3).value(), 3);
        assert_eq!(Approximation::Approximated(-1).value(), -1);
        assert!(Approximation::Exact(0).is_exact());
        assert!(!Approximation::Approximated(1.5).is_exact());
    }
}
