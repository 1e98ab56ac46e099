//! Call/put selection.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::mc::error::PricingError;

/// Option kind.
///
/// A closed set: evaluators match on it exhaustively. String tags are only
/// accepted through [`FromStr`], which rejects anything but `call`/`put`.
///
/// ```rust
/// use pricer_exotics::path_dependent::OptionType;
///
/// assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
/// assert!("straddle".parse::<OptionType>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy: pays `max(S - K, 0)`.
    Call,
    /// Right to sell: pays `max(K - S, 0)`.
    Put,
}

impl OptionType {
    /// Intrinsic value of `underlying` against `strike`, floored at zero.
    #[inline]
    pub fn intrinsic<T: Float>(&self, underlying: T, strike: T) -> T {
        match self {
            OptionType::Call => (underlying - strike).max(T::zero()),
            OptionType::Put => (strike - underlying).max(T::zero()),
        }
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns the lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(PricingError::InvalidArgument {
                kind: "option type",
                value: s.to_string(),
                expected: "call, put",
            }),
        }
    }
}
