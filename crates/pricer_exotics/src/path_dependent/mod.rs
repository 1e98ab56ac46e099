//! Path-dependent payoffs.
//!
//! Payoffs that depend on the whole simulated path rather than on the
//! terminal price alone: Asian (arithmetic and geometric), barrier, and
//! floating-strike lookback options, plus the European vanilla used as a
//! control.
//!
//! # Key Components
//!
//! - [`PathObserver`]: streaming statistics accumulated along one path
//! - [`PathDependentPayoff`]: trait computing a payoff from those statistics
//! - [`ObservationType`]: flags naming the statistics a payoff needs
//! - [`PathPayoffType`]: enum dispatch over every payoff
//!
//! Payoffs are exact: `max(x, 0)` and the Heaviside step are evaluated as
//! written, with no smoothing.

mod asian;
mod barrier;
mod european;
mod lookback;
mod observer;
mod option_type;
mod payoff;
mod payoff_type;

pub use asian::{AsianArithmeticPayoff, AsianGeometricPayoff, AsianParams};
pub use barrier::{heaviside, BarrierActivation, BarrierDirection, BarrierPayoff, BarrierSpec};
pub use european::EuropeanPayoff;
pub use lookback::LookbackPayoff;
pub use observer::PathObserver;
pub use option_type::OptionType;
pub use payoff::{ObservationType, PathDependentPayoff};
pub use payoff_type::PathPayoffType;
