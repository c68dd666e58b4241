//! Basic stress-strain law of carbon steel at elevated temperature.
//!
//! The curve has four segments: linear elastic up to `ep`, an elliptical
//! transition up to `ey`, a yield plateau up to `et` and a linear descent to
//! zero stress at `eu`.

use log::{debug, warn};

use crate::errors::{DomainError, NumericalError, StressError};
use crate::material::{MaterialProperties, ReducedProperties};
use crate::reduction::reduce_material;

/// Yield strain `ey` at which the plateau starts.
pub const YIELD_STRAIN: f64 = 0.02;

/// Limiting strain `et` at which the plateau ends.
pub const LIMITING_STRAIN: f64 = 0.15;

/// Ultimate strain `eu` at which the stress reaches zero.
pub const ULTIMATE_STRAIN: f64 = 0.2;

/// Constants of the elliptical transition between `ep` and `ey`.
#[derive(Clone, Copy, Debug, PartialEq)]
struct EllipticTransition {
    /// Offset `c` of the ellipse centre below `fp'`.
    c: f64,
    /// Squared semi-axis along the strain direction.
    a2: f64,
    /// Ratio of the stress semi-axis to the strain semi-axis, `b / a`.
    slope: f64,
}

impl EllipticTransition {
    /// Derive the ellipse for `reduced` given the elastic limit strain `ep`.
    fn new(reduced: &ReducedProperties, ep: f64) -> Result<Self, NumericalError> {
        let fp = reduced.proportional_limit;
        let fy = reduced.yield_strength;
        let ea = reduced.elastic_modulus;
        let span = YIELD_STRAIN - ep;

        let denominator = span * ea - 2.0 * (fy - fp);
        if denominator.is_nan() || denominator <= 0.0 {
            return Err(NumericalError::DegenerateTransition { denominator });
        }
        let c = (fy - fp).powi(2) / denominator;

        let a2 = span * (span + c / ea);
        if a2.is_nan() || a2 <= 0.0 {
            return Err(NumericalError::NegativeRadicand {
                term: "a²",
                value: a2,
            });
        }
        let b2 = c * span * ea + c * c;
        if b2 < 0.0 {
            return Err(NumericalError::NegativeRadicand {
                term: "b²",
                value: b2,
            });
        }

        Ok(Self {
            c,
            a2,
            slope: b2.sqrt() / a2.sqrt(),
        })
    }

    /// Stress on the ellipse at `strain`, for `ep < strain < ey`.
    fn stress(&self, fp: f64, strain: f64) -> Result<f64, NumericalError> {
        let radicand = self.a2 - (YIELD_STRAIN - strain).powi(2);
        if radicand < 0.0 {
            return Err(NumericalError::NegativeRadicand {
                term: "a² - (ey - e)²",
                value: radicand,
            });
        }
        Ok(fp - self.c + self.slope * radicand.sqrt())
    }
}

/// Reject NaN and infinite strains.
pub(crate) fn check_strain(strain: f64) -> Result<(), DomainError> {
    if strain.is_finite() {
        Ok(())
    } else {
        warn!("rejecting non-finite strain {strain}");
        Err(DomainError::NonFiniteStrain(strain))
    }
}

/// Evaluate the basic law on properties already reduced to their temperature.
///
/// The properties are validated first, so hand-built or deserialized values
/// never leak NaN or negative stresses.
///
/// # Errors
///
/// Returns an error for non-finite strains, strains past [`ULTIMATE_STRAIN`],
/// invalid reduced properties, a vanished modulus or a degenerate elliptical
/// transition.
///
/// # Examples
/// ```
/// use firesteel::{reduce, stress_reduced};
///
/// let reduced = reduce(200.0e6, 250.0e6, 210.0e9, 600.0).unwrap();
/// assert_eq!(stress_reduced(&reduced, 0.1).unwrap(), reduced.yield_strength);
/// assert!(stress_reduced(&reduced, 0.3).is_err());
/// ```
pub fn stress_reduced(reduced: &ReducedProperties, strain: f64) -> Result<f64, StressError> {
    check_strain(strain)?;
    reduced.validate()?;
    let ep = reduced.elastic_limit_strain()?;

    if strain <= ep {
        debug!("strain {strain} is in the elastic range (ep = {ep})");
        Ok(strain * reduced.elastic_modulus)
    } else if strain < YIELD_STRAIN {
        debug!("strain {strain} is in the elliptical transition (ep = {ep})");
        let transition = EllipticTransition::new(reduced, ep)?;
        Ok(transition.stress(reduced.proportional_limit, strain)?)
    } else if strain <= LIMITING_STRAIN {
        debug!("strain {strain} is on the yield plateau");
        Ok(reduced.yield_strength)
    } else if strain < ULTIMATE_STRAIN {
        debug!("strain {strain} is on the descending branch");
        Ok(reduced.yield_strength
            * (1.0 - (strain - LIMITING_STRAIN) / (ULTIMATE_STRAIN - LIMITING_STRAIN)))
    } else if strain == ULTIMATE_STRAIN {
        Ok(0.0)
    } else {
        warn!("strain {strain} is past the ultimate strain {ULTIMATE_STRAIN}");
        Err(DomainError::StrainBeyondRupture {
            strain,
            rupture_strain: ULTIMATE_STRAIN,
        }
        .into())
    }
}

impl MaterialProperties {
    /// Stress at `strain` and `temperature` (°C) from the basic law.
    ///
    /// # Errors
    ///
    /// See [`stress`].
    pub fn stress(&self, strain: f64, temperature: f64) -> Result<f64, StressError> {
        let reduced = reduce_material(self, temperature)?;
        stress_reduced(&reduced, strain)
    }
}

/// Stress at strain `e` and `temperature` (°C) for room-temperature properties
/// `fp`, `fy` and `ea`, using the basic four-segment law.
///
/// # Errors
///
/// Returns a [`DomainError`] for invalid properties, temperatures outside
/// 0..=1200 °C, non-finite strains or strains past the ultimate strain 0.2,
/// and a [`NumericalError`] when the elliptical transition is undefined or the
/// modulus has vanished.
///
/// # Examples
/// ```
/// use firesteel::stress;
///
/// let sigma = stress(0.0005, 20.0, 200.0e6, 250.0e6, 210.0e9).unwrap();
/// assert!((sigma - 1.05e8).abs() < 1e-3);
/// assert_eq!(stress(0.1, 20.0, 200.0e6, 250.0e6, 210.0e9).unwrap(), 250.0e6);
/// ```
pub fn stress(e: f64, temperature: f64, fp: f64, fy: f64, ea: f64) -> Result<f64, StressError> {
    MaterialProperties::new(fp, fy, ea)?.stress(e, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::MaterialPropertyError;
    use crate::reduction::reduce;
    use approx::assert_relative_eq;

    const FP: f64 = 200.0e6;
    const FY: f64 = 250.0e6;
    const EA: f64 = 210.0e9;

    fn steel() -> MaterialProperties {
        MaterialProperties::new(FP, FY, EA).unwrap()
    }

    #[test]
    fn elastic_range_follows_hookes_law() {
        assert_relative_eq!(stress(0.0005, 20.0, FP, FY, EA).unwrap(), 1.05e8);
        assert_relative_eq!(stress(-0.0005, 20.0, FP, FY, EA).unwrap(), -1.05e8);
    }

    #[test]
    fn plateau_descent_and_rupture() {
        assert_eq!(stress(0.1, 20.0, FP, FY, EA).unwrap(), FY);
        assert_eq!(stress(0.02, 20.0, FP, FY, EA).unwrap(), FY);
        assert_eq!(stress(0.15, 20.0, FP, FY, EA).unwrap(), FY);
        assert_relative_eq!(
            stress(0.175, 20.0, FP, FY, EA).unwrap(),
            0.5 * FY,
            max_relative = 1e-9
        );
        assert_eq!(stress(0.2, 20.0, FP, FY, EA).unwrap(), 0.0);
    }

    #[test]
    fn strain_beyond_rupture_is_rejected() {
        assert_eq!(
            stress(0.25, 20.0, FP, FY, EA),
            Err(StressError::Domain(DomainError::StrainBeyondRupture {
                strain: 0.25,
                rupture_strain: ULTIMATE_STRAIN,
            }))
        );
    }

    #[test]
    fn non_finite_strain_is_rejected() {
        assert!(matches!(
            steel().stress(f64::NAN, 20.0),
            Err(StressError::Domain(DomainError::NonFiniteStrain(_)))
        ));
    }

    #[test]
    fn transition_lies_between_proportional_limit_and_yield() {
        let sigma = stress(0.01, 20.0, FP, FY, EA).unwrap();
        assert!(sigma > FP && sigma < FY, "sigma = {sigma}");
    }

    #[test]
    fn transition_is_continuous_at_both_ends() {
        let reduced = reduce(FP, FY, EA, 450.0).unwrap();
        let ep = reduced.elastic_limit_strain().unwrap();
        let transition = EllipticTransition::new(&reduced, ep).unwrap();

        let at_ep = transition
            .stress(reduced.proportional_limit, ep)
            .unwrap();
        assert_relative_eq!(at_ep, ep * reduced.elastic_modulus, max_relative = 1e-9);

        let at_ey = transition
            .stress(reduced.proportional_limit, YIELD_STRAIN)
            .unwrap();
        assert_relative_eq!(at_ey, reduced.yield_strength, max_relative = 1e-9);
    }

    #[test]
    fn continuous_at_plateau_end() {
        let before = stress(LIMITING_STRAIN, 600.0, FP, FY, EA).unwrap();
        let after = stress(LIMITING_STRAIN + 1e-9, 600.0, FP, FY, EA).unwrap();
        assert_relative_eq!(before, after, max_relative = 1e-6);
    }

    #[test]
    fn degenerate_transition_is_reported() {
        // A modulus this low leaves (ey - ep) * Ea below 2 * (fy - fp).
        let reduced = ReducedProperties {
            temperature: 20.0,
            proportional_limit: 1.0e6,
            yield_strength: 100.0e6,
            elastic_modulus: 5.0e9,
        };
        assert!(matches!(
            stress_reduced(&reduced, 0.01),
            Err(StressError::Numerical(NumericalError::DegenerateTransition { .. }))
        ));
        // The elastic and plateau ranges never build the ellipse.
        assert_eq!(stress_reduced(&reduced, 0.05).unwrap(), 100.0e6);
    }

    #[test]
    fn unchecked_reduced_properties_are_rejected() {
        let nan_yield = ReducedProperties {
            temperature: 20.0,
            proportional_limit: FP,
            yield_strength: f64::NAN,
            elastic_modulus: EA,
        };
        for strain in [0.0005, 0.01, 0.1, 0.18] {
            assert!(matches!(
                stress_reduced(&nan_yield, strain),
                Err(StressError::Domain(DomainError::InvalidMaterial(_)))
            ));
        }

        let json = r#"{"temperature":20.0,"proportional_limit":200e6,"yield_strength":-250e6,"elastic_modulus":210e9}"#;
        let negative_yield: ReducedProperties = serde_json::from_str(json).unwrap();
        assert!(matches!(
            stress_reduced(&negative_yield, 0.1),
            Err(StressError::Domain(DomainError::InvalidMaterial(
                MaterialPropertyError::NegativeReduced { .. }
            )))
        ));
    }

    #[test]
    fn vanished_modulus_is_reported() {
        assert!(matches!(
            steel().stress(0.01, 1200.0),
            Err(StressError::Numerical(NumericalError::ZeroStiffness { .. }))
        ));
    }
}
