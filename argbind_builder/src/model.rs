/// The number of times a parser may match, as an inclusive `(minimum, maximum)` pair.
///
/// A `maximum` of `0` denotes an unbounded upper side.
/// So `(0, 0)` reads "any number of matches", and `(2, 0)` reads "at least 2 matches".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cardinality {
    minimum: usize,
    maximum: usize,
}

impl Cardinality {
    /// Create a cardinality of `(minimum, maximum)`.
    ///
    /// ### Panics
    /// When `maximum` is bounded (non-zero) and `minimum > maximum`.
    /// Such a cardinality could never be satisfied, so we reject it at declaration time.
    pub fn new(minimum: usize, maximum: usize) -> Self {
        assert!(
            maximum == 0 || minimum <= maximum,
            "Invalid - cardinality minimum {minimum} exceeds maximum {maximum}."
        );
        Self { minimum, maximum }
    }

    /// Precisely `n` matches (where `n = 0` means unbounded).
    pub fn exactly(n: usize) -> Self {
        Self::new(n, n)
    }

    /// At least `minimum` matches, without an upper bound.
    pub fn unbounded(minimum: usize) -> Self {
        Self::new(minimum, 0)
    }

    /// The lower bound.
    pub fn minimum(&self) -> usize {
        self.minimum
    }

    /// The upper bound, or `None` when unbounded.
    pub fn maximum(&self) -> Option<usize> {
        if self.maximum == 0 {
            None
        } else {
            Some(self.maximum)
        }
    }

    /// Whether there is no upper bound.
    pub fn is_unbounded(&self) -> bool {
        self.maximum == 0
    }

    /// Zero matches are acceptable, and at least one match is admitted.
    pub fn is_optional(&self) -> bool {
        // An unbounded maximum always admits one more match.
        self.minimum == 0
    }

    /// At least one match is needed.
    pub fn is_required(&self) -> bool {
        self.minimum >= 1
    }

    /// The spread `maximum - minimum`; `usize::MAX` when unbounded.
    pub fn remaining_capacity(&self) -> usize {
        match self.maximum() {
            Some(maximum) => maximum - self.minimum,
            None => usize::MAX,
        }
    }

    /// Whether `observed` matches satisfy this cardinality.
    pub fn admits(&self, observed: usize) -> bool {
        observed >= self.minimum
            && match self.maximum() {
                Some(maximum) => observed <= maximum,
                None => true,
            }
    }

    /// Whether `observed` matches have used up the upper bound.
    pub fn is_exhausted(&self, observed: usize) -> bool {
        match self.maximum() {
            Some(maximum) => observed >= maximum,
            None => false,
        }
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.maximum() {
            Some(maximum) if maximum == self.minimum => write!(f, "[{maximum}]"),
            Some(maximum) => write!(f, "[{}, {maximum}]", self.minimum),
            None => write!(f, "[{}, ∞)", self.minimum),
        }
    }
}
