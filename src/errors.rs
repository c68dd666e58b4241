//! Error types produced while evaluating the elevated-temperature steel law.

use thiserror::Error;

/// Error returned when material properties are rejected.
///
/// The variants describe the reason the supplied value is rejected so callers can
/// present actionable feedback to users.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum MaterialPropertyError {
    /// Returned when a property is zero, negative or not finite.
    #[error("{property} must be a positive finite value (received {value})")]
    NonPositive {
        /// Name of the rejected property.
        property: &'static str,
        /// Rejected value in pascals.
        value: f64,
    },
    /// Returned when the yield strength lies below the proportional limit.
    #[error(
        "yield strength {yield_strength} must not be lower than the proportional limit {proportional_limit}"
    )]
    YieldBelowProportionalLimit {
        /// Rejected proportional limit in pascals.
        proportional_limit: f64,
        /// Rejected yield strength in pascals.
        yield_strength: f64,
    },
    /// Returned when a temperature-reduced property is negative or not finite.
    #[error("reduced {property} must be a non-negative finite value (received {value})")]
    NegativeReduced {
        /// Name of the rejected property.
        property: &'static str,
        /// Rejected value in pascals.
        value: f64,
    },
}

/// Error returned when an input lies outside the domain of the material law.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum DomainError {
    /// Returned when the temperature is outside the tabulated range (NaN included).
    #[error("temperature {temperature} °C lies outside the tabulated range {min}..={max} °C")]
    TemperatureOutOfRange {
        /// Rejected temperature in degrees Celsius.
        temperature: f64,
        /// Lowest tabulated temperature in degrees Celsius.
        min: f64,
        /// Highest tabulated temperature in degrees Celsius.
        max: f64,
    },
    /// Returned when the strain is NaN or infinite.
    #[error("strain must be finite (received {0})")]
    NonFiniteStrain(f64),
    /// Returned when the basic law is asked for a strain past rupture.
    #[error("strain {strain} exceeds the rupture strain {rupture_strain}")]
    StrainBeyondRupture {
        /// Rejected strain.
        strain: f64,
        /// Ultimate strain at which the basic law reaches zero stress.
        rupture_strain: f64,
    },
    /// Returned when a curve is requested with fewer than two samples.
    #[error("a curve needs at least two samples (received {0})")]
    TooFewSamples(usize),
    /// Returned when a curve is requested over an empty or non-finite strain range.
    #[error("maximum strain must be positive and finite (received {0})")]
    InvalidStrainRange(f64),
    /// Returned when the material properties are invalid.
    #[error(transparent)]
    InvalidMaterial(#[from] MaterialPropertyError),
}

/// Error returned when an intermediate quantity would make the law undefined.
///
/// These conditions are detected before the offending division or square root is
/// evaluated, so no NaN reaches the caller.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum NumericalError {
    /// Returned when the reduced elastic modulus is zero, leaving `fp / Ea` undefined.
    #[error("steel has no residual stiffness at {temperature} °C")]
    ZeroStiffness {
        /// Temperature in degrees Celsius at which the modulus vanished.
        temperature: f64,
    },
    /// Returned when the denominator of the elliptical constant `c` is not positive.
    #[error(
        "elliptical transition is degenerate: denominator (ey - ep) * Ea - 2 * (fy - fp) = {denominator}"
    )]
    DegenerateTransition {
        /// Offending denominator in pascals.
        denominator: f64,
    },
    /// Returned when a square root in the elliptical transition would receive a negative argument.
    #[error("negative radicand in elliptical transition term {term}: {value}")]
    NegativeRadicand {
        /// Name of the term whose root was requested.
        term: &'static str,
        /// Offending radicand.
        value: f64,
    },
}

/// Error returned by every stress or reduction evaluation.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum StressError {
    /// The inputs lie outside the domain of the law.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The inputs make an intermediate quantity undefined.
    #[error(transparent)]
    Numerical(#[from] NumericalError),
}

impl From<MaterialPropertyError> for StressError {
    fn from(value: MaterialPropertyError) -> Self {
        StressError::Domain(DomainError::InvalidMaterial(value))
    }
}
