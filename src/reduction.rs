//! Temperature reduction factors for carbon steel.
//!
//! The control points follow the reduction factor table for the stress-strain
//! relationship of carbon steel at elevated temperatures (EN 1993-1-2, Table 3.1).
//! Intermediate temperatures are interpolated linearly between adjacent points.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, StressError};
use crate::material::{MaterialProperties, ReducedProperties};

/// Temperatures of the control points in degrees Celsius.
pub const TEMPERATURES: [f64; 14] = [
    0.0, 20.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0,
    1200.0,
];

/// Reduction factor `ky` for the effective yield strength.
pub const YIELD_FACTORS: [f64; 14] = [
    1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.78, 0.47, 0.23, 0.11, 0.06, 0.04, 0.02, 0.0,
];

/// Reduction factor `kp` for the proportional limit.
pub const PROPORTIONAL_FACTORS: [f64; 14] = [
    1.0, 1.0, 1.0, 0.807, 0.613, 0.42, 0.36, 0.18, 0.075, 0.050, 0.0375, 0.025, 0.0125, 0.0,
];

/// Reduction factor `kE` for the slope of the linear elastic range.
pub const MODULUS_FACTORS: [f64; 14] = [
    1.0, 1.0, 1.0, 0.9, 0.8, 0.7, 0.6, 0.31, 0.13, 0.09, 0.0675, 0.0450, 0.0225, 0.0,
];

/// Lowest tabulated temperature in degrees Celsius.
pub const MIN_TEMPERATURE: f64 = TEMPERATURES[0];

/// Highest tabulated temperature in degrees Celsius.
pub const MAX_TEMPERATURE: f64 = TEMPERATURES[TEMPERATURES.len() - 1];

/// Multiplicative factors applied to the room-temperature properties.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReductionFactors {
    /// Factor for the yield strength.
    pub yield_strength: f64,
    /// Factor for the proportional limit.
    pub proportional_limit: f64,
    /// Factor for the elastic modulus.
    pub elastic_modulus: f64,
}

impl ReductionFactors {
    /// Interpolate the three factor curves at `temperature` (degrees Celsius).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::TemperatureOutOfRange`] when the temperature is NaN
    /// or outside the tabulated range. Values are never clamped or extrapolated.
    ///
    /// # Examples
    /// ```
    /// use firesteel::ReductionFactors;
    ///
    /// let factors = ReductionFactors::at(550.0).unwrap();
    /// assert!((factors.yield_strength - 0.625).abs() < 1e-12);
    /// assert!(ReductionFactors::at(1250.0).is_err());
    /// ```
    pub fn at(temperature: f64) -> Result<Self, DomainError> {
        let (segment, fraction) = locate(temperature)?;
        Ok(Self {
            yield_strength: interpolate(&YIELD_FACTORS, segment, fraction),
            proportional_limit: interpolate(&PROPORTIONAL_FACTORS, segment, fraction),
            elastic_modulus: interpolate(&MODULUS_FACTORS, segment, fraction),
        })
    }

    /// Scale room-temperature properties by these factors.
    ///
    /// # Examples
    /// ```
    /// use firesteel::{MaterialProperties, ReductionFactors};
    ///
    /// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
    /// let reduced = ReductionFactors::at(20.0).unwrap().apply(&steel, 20.0);
    /// assert_eq!(reduced.yield_strength, 250.0e6);
    /// ```
    #[must_use]
    pub fn apply(&self, material: &MaterialProperties, temperature: f64) -> ReducedProperties {
        ReducedProperties {
            temperature,
            proportional_limit: material.proportional_limit * self.proportional_limit,
            yield_strength: material.yield_strength * self.yield_strength,
            elastic_modulus: material.elastic_modulus * self.elastic_modulus,
        }
    }
}

/// Reject temperatures outside the table, NaN included.
pub(crate) fn check_temperature(temperature: f64) -> Result<(), DomainError> {
    if (MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Ok(());
    }
    warn!("temperature {temperature} °C is outside the reduction table");
    Err(DomainError::TemperatureOutOfRange {
        temperature,
        min: MIN_TEMPERATURE,
        max: MAX_TEMPERATURE,
    })
}

/// Find the table segment containing `temperature` and the position within it.
///
/// A fraction of exactly zero is returned on every control point so tabulated
/// values come back unchanged.
fn locate(temperature: f64) -> Result<(usize, f64), DomainError> {
    check_temperature(temperature)?;
    let last = TEMPERATURES.len() - 1;
    if temperature == MAX_TEMPERATURE {
        return Ok((last, 0.0));
    }
    let segment = TEMPERATURES
        .windows(2)
        .position(|pair| temperature < pair[1])
        .unwrap_or(last - 1);
    let (lower, upper) = (TEMPERATURES[segment], TEMPERATURES[segment + 1]);
    Ok((segment, (temperature - lower) / (upper - lower)))
}

/// Linear interpolation of `curve` inside `segment`.
fn interpolate(curve: &[f64; 14], segment: usize, fraction: f64) -> f64 {
    if fraction == 0.0 {
        return curve[segment];
    }
    curve[segment] + (curve[segment + 1] - curve[segment]) * fraction
}

/// Reduce validated room-temperature properties to `temperature`.
///
/// # Errors
///
/// Returns an error when the material is invalid or the temperature is outside the table.
///
/// # Examples
/// ```
/// use firesteel::{reduce_material, MaterialProperties};
///
/// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
/// let reduced = reduce_material(&steel, 500.0).unwrap();
/// assert!((reduced.elastic_modulus - 0.6 * 210.0e9).abs() < 1e-3);
/// assert!(reduce_material(&steel, -5.0).is_err());
/// ```
pub fn reduce_material(
    material: &MaterialProperties,
    temperature: f64,
) -> Result<ReducedProperties, StressError> {
    material.validate()?;
    let factors = ReductionFactors::at(temperature)?;
    let reduced = factors.apply(material, temperature);
    debug!(
        "reduced at {temperature} °C: ky = {}, kp = {}, kE = {}",
        factors.yield_strength, factors.proportional_limit, factors.elastic_modulus
    );
    Ok(reduced)
}

/// Reduce the room-temperature properties `fp`, `fy`, `ea` to `temperature` (°C).
///
/// # Errors
///
/// Returns an error when the properties violate positivity or ordering, or when
/// the temperature lies outside 0..=1200 °C.
///
/// # Examples
/// ```
/// use firesteel::reduce;
///
/// let reduced = reduce(200.0e6, 250.0e6, 210.0e9, 600.0).unwrap();
/// assert!((reduced.yield_strength - 0.47 * 250.0e6).abs() < 1e-3);
/// ```
pub fn reduce(
    fp: f64,
    fy: f64,
    ea: f64,
    temperature: f64,
) -> Result<ReducedProperties, StressError> {
    let material = MaterialProperties::new(fp, fy, ea)?;
    reduce_material(&material, temperature)
}
