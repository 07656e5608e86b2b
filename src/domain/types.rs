//! Strongly-typed value objects used by search requests.
//!
//! These wrappers enforce basic invariants (positive page numbers and page
//! sizes) so that once a value reaches the controller it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided value is zero where a positive value is required.
    #[error("value must be greater than zero")]
    NonPositive,
}

/// Macro to generate lightweight newtypes for positive counters.
macro_rules! positive_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            /// Creates a new value ensuring it is greater than zero.
            pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositive)
                }
            }

            /// Returns the raw `usize` backing this value.
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: usize) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

positive_newtype!(PageNumber, "One-based page number within a result set.");
positive_newtype!(PageSize, "Number of items fetched per page.");

impl PageNumber {
    /// The first page of any result set.
    pub const FIRST: PageNumber = PageNumber(1);
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl PageSize {
    /// Page size used when the embedding application does not configure one.
    pub const DEFAULT: PageSize = PageSize(10);
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_values() {
        assert_eq!(PageNumber::new(0), Err(TypeConstraintError::NonPositive));
        assert_eq!(PageSize::new(0), Err(TypeConstraintError::NonPositive));
    }

    #[test]
    fn accepts_positive_values() {
        assert_eq!(PageNumber::new(3).map(PageNumber::get), Ok(3));
        assert_eq!(PageSize::new(25).map(PageSize::get), Ok(25));
        assert_eq!(PageNumber::default(), PageNumber::FIRST);
        assert_eq!(PageSize::default().get(), 10);
    }
}
