//! Stress-strain law including strain hardening, valid below 400 °C.
//!
//! Past the yield strain the stress rises linearly to the ultimate strength
//! `fu`, stays there until `et`, then descends to zero at `eu`.

use log::{debug, warn};

use crate::errors::{MaterialPropertyError, StressError};
use crate::material::MaterialProperties;
use crate::reduction::{check_temperature, reduce_material};
use crate::stress::{check_strain, LIMITING_STRAIN, ULTIMATE_STRAIN, YIELD_STRAIN};

/// Temperature in degrees Celsius from which hardening is no longer considered.
pub const HARDENING_TEMPERATURE_LIMIT: f64 = 400.0;

/// Strain at which the ultimate strength is reached.
pub const HARDENING_STRAIN: f64 = 0.04;

/// Ultimate strength `fu` for reduced yield strength `fy` at `temperature` (°C).
///
/// Below 300 °C `fu = 1.25 fy`, between 300 and 400 °C it falls linearly to
/// `fy`, and from 400 °C on `fu = fy`.
///
/// # Errors
///
/// Returns an error when `fy` is negative or not finite, or when the
/// temperature is NaN or outside 0..=1200 °C.
///
/// # Examples
/// ```
/// use firesteel::ultimate_strength;
///
/// assert_eq!(ultimate_strength(250.0e6, 20.0).unwrap(), 312.5e6);
/// assert_eq!(ultimate_strength(250.0e6, 500.0).unwrap(), 250.0e6);
/// assert!(ultimate_strength(250.0e6, f64::NAN).is_err());
/// ```
pub fn ultimate_strength(fy: f64, temperature: f64) -> Result<f64, StressError> {
    check_temperature(temperature)?;
    if !(fy.is_finite() && fy >= 0.0) {
        warn!("rejecting reduced yield strength {fy}");
        return Err(MaterialPropertyError::NegativeReduced {
            property: "yield strength",
            value: fy,
        }
        .into());
    }
    let fu = if temperature < 300.0 {
        1.25 * fy
    } else if temperature < HARDENING_TEMPERATURE_LIMIT {
        fy * (2.0 - 0.0025 * temperature)
    } else {
        fy
    };
    Ok(fu)
}

impl MaterialProperties {
    /// Stress at `strain` and `temperature` (°C) allowing for strain hardening.
    ///
    /// # Errors
    ///
    /// See [`stress_hardening`].
    pub fn stress_hardening(&self, strain: f64, temperature: f64) -> Result<f64, StressError> {
        check_strain(strain)?;
        if temperature >= HARDENING_TEMPERATURE_LIMIT || strain <= YIELD_STRAIN {
            return self.stress(strain, temperature);
        }

        let reduced = reduce_material(self, temperature)?;
        let fy = reduced.yield_strength;
        let fu = ultimate_strength(fy, temperature)?;
        debug!("hardening at {temperature} °C: fy = {fy}, fu = {fu}");

        let sigma = if strain < HARDENING_STRAIN {
            50.0 * (fu - fy) * strain + 2.0 * fy - fu
        } else if strain <= LIMITING_STRAIN {
            fu
        } else if strain < ULTIMATE_STRAIN {
            fu * (1.0 - 20.0 * (strain - LIMITING_STRAIN))
        } else {
            0.0
        };
        Ok(sigma)
    }
}

/// Stress at strain `e` and `temperature` (°C) for room-temperature properties
/// `fp`, `fy` and `ea`, including strain hardening below 400 °C.
///
/// At or above 400 °C, or for strains up to 0.02, the basic law applies
/// unchanged. Past the ultimate strain 0.2 the hardening branch returns zero.
///
/// # Errors
///
/// Returns an error for invalid properties, temperatures outside 0..=1200 °C,
/// non-finite strains, and whatever the basic law reports when it is delegated to.
///
/// # Examples
/// ```
/// use firesteel::stress_hardening;
///
/// let sigma = stress_hardening(0.03, 200.0, 200.0e6, 250.0e6, 210.0e9).unwrap();
/// assert!((sigma - 281.25e6).abs() < 1e-3);
/// ```
pub fn stress_hardening(
    e: f64,
    temperature: f64,
    fp: f64,
    fy: f64,
    ea: f64,
) -> Result<f64, StressError> {
    MaterialProperties::new(fp, fy, ea)?.stress_hardening(e, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DomainError;
    use crate::stress::stress;
    use approx::assert_relative_eq;

    const FP: f64 = 200.0e6;
    const FY: f64 = 250.0e6;
    const EA: f64 = 210.0e9;

    #[test]
    fn ultimate_strength_by_temperature() {
        assert_relative_eq!(ultimate_strength(FY, 20.0).unwrap(), 312.5e6);
        assert_relative_eq!(ultimate_strength(FY, 300.0).unwrap(), 312.5e6);
        assert_relative_eq!(ultimate_strength(FY, 350.0).unwrap(), 1.125 * FY);
        assert_eq!(ultimate_strength(FY, 400.0).unwrap(), FY);
    }

    #[test]
    fn ultimate_strength_rejects_undefined_inputs() {
        for temperature in [f64::NAN, f64::INFINITY, -1.0, 1300.0] {
            assert!(matches!(
                ultimate_strength(FY, temperature),
                Err(StressError::Domain(DomainError::TemperatureOutOfRange { .. }))
            ));
        }
        for fy in [f64::NAN, -FY] {
            assert!(matches!(
                ultimate_strength(fy, 20.0),
                Err(StressError::Domain(DomainError::InvalidMaterial(
                    MaterialPropertyError::NegativeReduced { .. }
                )))
            ));
        }
    }

    #[test]
    fn rise_matches_worked_example() {
        assert_relative_eq!(
            stress_hardening(0.03, 200.0, FP, FY, EA).unwrap(),
            281.25e6,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rise_is_continuous_with_yield_and_plateau() {
        assert_relative_eq!(
            stress_hardening(0.020_000_001, 20.0, FP, FY, EA).unwrap(),
            FY,
            max_relative = 1e-6
        );
        assert_relative_eq!(
            stress_hardening(HARDENING_STRAIN, 350.0, FP, FY, EA).unwrap(),
            1.125 * FY
        );
        assert_relative_eq!(
            stress_hardening(0.039_999_999, 350.0, FP, FY, EA).unwrap(),
            1.125 * FY,
            max_relative = 1e-6
        );
    }

    #[test]
    fn plateau_descent_and_rupture() {
        let fu = 312.5e6;
        assert_eq!(stress_hardening(0.1, 100.0, FP, FY, EA).unwrap(), fu);
        assert_eq!(stress_hardening(0.15, 100.0, FP, FY, EA).unwrap(), fu);
        assert_relative_eq!(
            stress_hardening(0.175, 100.0, FP, FY, EA).unwrap(),
            0.5 * fu,
            max_relative = 1e-9
        );
        assert_eq!(stress_hardening(0.2, 100.0, FP, FY, EA).unwrap(), 0.0);
        assert_eq!(stress_hardening(0.3, 100.0, FP, FY, EA).unwrap(), 0.0);
    }

    #[test]
    fn delegates_at_and_above_the_temperature_limit() {
        for strain in [0.001, 0.01, 0.03, 0.1, 0.18] {
            assert_eq!(
                stress_hardening(strain, 500.0, FP, FY, EA),
                stress(strain, 500.0, FP, FY, EA)
            );
            assert_eq!(
                stress_hardening(strain, 400.0, FP, FY, EA),
                stress(strain, 400.0, FP, FY, EA)
            );
        }
        assert!(matches!(
            stress_hardening(0.3, 500.0, FP, FY, EA),
            Err(StressError::Domain(DomainError::StrainBeyondRupture { .. }))
        ));
    }

    #[test]
    fn delegates_up_to_the_yield_strain() {
        assert_eq!(
            stress_hardening(0.01, 200.0, FP, FY, EA),
            stress(0.01, 200.0, FP, FY, EA)
        );
        assert_eq!(
            stress_hardening(0.02, 200.0, FP, FY, EA),
            stress(0.02, 200.0, FP, FY, EA)
        );
    }

    #[test]
    fn temperature_domain_is_checked_on_the_hardening_branch() {
        assert!(matches!(
            stress_hardening(0.05, -10.0, FP, FY, EA),
            Err(StressError::Domain(DomainError::TemperatureOutOfRange { .. }))
        ));
        assert!(matches!(
            stress_hardening(0.05, 1300.0, FP, FY, EA),
            Err(StressError::Domain(DomainError::TemperatureOutOfRange { .. }))
        ));
    }
}
