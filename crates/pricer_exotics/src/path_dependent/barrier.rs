//! Barrier option payoff implementations.
//!
//! A barrier option pays the vanilla payoff on the terminal price, switched
//! on or off by whether the path extremum crossed the barrier level `Sb`:
//!
//! | Direction | Activation | Indicator        |
//! |-----------|------------|------------------|
//! | up        | out        | `H(Sb - max)`    |
//! | up        | in         | `H(max - Sb)`    |
//! | down      | out        | `H(min - Sb)`    |
//! | down      | in         | `H(Sb - min)`    |
//!
//! `H` is the Heaviside step with `H(0) = 0.5`, so a path whose extremum
//! lands exactly on the barrier counts half toward each side and the in and
//! out indicators of the same direction always sum to one.
//!
//! Monitoring is discrete: only grid points are checked, `t = 0` included.

use std::fmt;
use std::str::FromStr;

use super::{ObservationType, OptionType, PathDependentPayoff, PathObserver};
use crate::mc::error::PricingError;
use num_traits::Float;

/// Side from which the barrier is approached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BarrierDirection {
    /// Barrier above the spot; monitored on the path maximum.
    Up,
    /// Barrier below the spot; monitored on the path minimum.
    Down,
}

impl BarrierDirection {
    /// Returns the lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarrierDirection::Up => "up",
            BarrierDirection::Down => "down",
        }
    }
}

impl fmt::Display for BarrierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarrierDirection {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "up" => Ok(BarrierDirection::Up),
            "down" => Ok(BarrierDirection::Down),
            _ => Err(PricingError::InvalidArgument {
                kind: "barrier direction",
                value: s.to_string(),
                expected: "up, down",
            }),
        }
    }
}

/// Whether crossing the barrier activates or extinguishes the option.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BarrierActivation {
    /// Knock-in: pays only if the barrier was crossed.
    In,
    /// Knock-out: pays only if the barrier was never crossed.
    Out,
}

impl BarrierActivation {
    /// Returns the lowercase tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BarrierActivation::In => "in",
            BarrierActivation::Out => "out",
        }
    }
}

impl fmt::Display for BarrierActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarrierActivation {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "in" => Ok(BarrierActivation::In),
            "out" => Ok(BarrierActivation::Out),
            _ => Err(PricingError::InvalidArgument {
                kind: "barrier activation",
                value: s.to_string(),
                expected: "in, out",
            }),
        }
    }
}

/// Barrier level plus its direction and activation.
///
/// ```rust
/// use pricer_exotics::path_dependent::{BarrierActivation, BarrierDirection, BarrierSpec};
///
/// let spec = BarrierSpec::down_out(80.0);
/// assert_eq!(spec.direction, BarrierDirection::Down);
/// assert_eq!(spec.activation, BarrierActivation::Out);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BarrierSpec<T = f64> {
    /// Barrier level (Sb).
    pub level: T,
    /// Up or down.
    pub direction: BarrierDirection,
    /// In or out.
    pub activation: BarrierActivation,
}

impl<T: Float> BarrierSpec<T> {
    /// Creates a barrier specification.
    #[inline]
    pub fn new(level: T, direction: BarrierDirection, activation: BarrierActivation) -> Self {
        Self {
            level,
            direction,
            activation,
        }
    }

    /// Up-and-in barrier at `level`.
    #[inline]
    pub fn up_in(level: T) -> Self {
        Self::new(level, BarrierDirection::Up, BarrierActivation::In)
    }

    /// Up-and-out barrier at `level`.
    #[inline]
    pub fn up_out(level: T) -> Self {
        Self::new(level, BarrierDirection::Up, BarrierActivation::Out)
    }

    /// Down-and-in barrier at `level`.
    #[inline]
    pub fn down_in(level: T) -> Self {
        Self::new(level, BarrierDirection::Down, BarrierActivation::In)
    }

    /// Down-and-out barrier at `level`.
    #[inline]
    pub fn down_out(level: T) -> Self {
        Self::new(level, BarrierDirection::Down, BarrierActivation::Out)
    }

    /// Returns true if the barrier is monitored on the path maximum.
    #[inline]
    pub fn is_up(&self) -> bool {
        self.direction == BarrierDirection::Up
    }

    /// Returns true for a knock-in.
    #[inline]
    pub fn is_in(&self) -> bool {
        self.activation == BarrierActivation::In
    }

    /// Returns the same barrier with the opposite activation.
    #[inline]
    pub fn complement(&self) -> Self {
        let activation = match self.activation {
            BarrierActivation::In => BarrierActivation::Out,
            BarrierActivation::Out => BarrierActivation::In,
        };
        Self { activation, ..*self }
    }

    /// Indicator value for a path with the given extremum.
    ///
    /// `extremum` is the path maximum for up barriers and the path minimum
    /// for down barriers.
    #[inline]
    pub fn indicator(&self, extremum: T) -> T {
        match (self.direction, self.activation) {
            (BarrierDirection::Up, BarrierActivation::Out) => heaviside(self.level - extremum),
            (BarrierDirection::Up, BarrierActivation::In) => heaviside(extremum - self.level),
            (BarrierDirection::Down, BarrierActivation::Out) => heaviside(extremum - self.level),
            (BarrierDirection::Down, BarrierActivation::In) => heaviside(self.level - extremum),
        }
    }
}

/// Heaviside step function with `H(0) = 0.5`.
///
/// NaN input yields NaN.
#[inline]
pub fn heaviside<T: Float>(x: T) -> T {
    if x > T::zero() {
        T::one()
    } else if x < T::zero() {
        T::zero()
    } else if x == T::zero() {
        T::one() / (T::one() + T::one())
    } else {
        x
    }
}

/// Barrier option payoff: `indicator(extremum) * vanilla(S_T)`.
#[derive(Clone, Copy, Debug)]
pub struct BarrierPayoff<T: Float> {
    strike: T,
    option_type: OptionType,
    barrier: BarrierSpec<T>,
}

impl<T: Float> BarrierPayoff<T> {
    /// Creates a new barrier payoff.
    #[inline]
    pub fn new(strike: T, option_type: OptionType, barrier: BarrierSpec<T>) -> Self {
        Self {
            strike,
            option_type,
            barrier,
        }
    }

    /// Returns the barrier specification.
    #[inline]
    pub fn barrier(&self) -> &BarrierSpec<T> {
        &self.barrier
    }

    /// Returns the strike.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }
}

impl<T: Float + Send + Sync> PathDependentPayoff<T> for BarrierPayoff<T> {
    fn compute(&self, observer: &PathObserver<T>) -> T {
        let extremum = if self.barrier.is_up() {
            observer.maximum()
        } else {
            observer.minimum()
        };
        let vanilla = self.option_type.intrinsic(observer.terminal(), self.strike);
        self.barrier.indicator(extremum) * vanilla
    }

    fn required_observations(&self) -> ObservationType {
        ObservationType::barrier(self.barrier.is_up())
    }
}
