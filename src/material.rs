//! Room-temperature and temperature-reduced material properties.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::errors::{MaterialPropertyError, NumericalError};

/// Room-temperature mechanical properties of a structural steel.
///
/// All three values share one pressure unit (pascals in the examples). Use
/// [`MaterialProperties::new`] to obtain a validated value; deserialized values
/// are checked again by every evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Stress below which the steel behaves linearly elastic.
    pub proportional_limit: f64,
    /// Stress at which the plastic plateau starts.
    pub yield_strength: f64,
    /// Slope of the linear elastic segment.
    pub elastic_modulus: f64,
}

impl MaterialProperties {
    /// Create validated room-temperature properties.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialPropertyError`] when any property is not a positive
    /// finite value or when the yield strength lies below the proportional limit.
    ///
    /// # Examples
    /// ```
    /// use firesteel::MaterialProperties;
    ///
    /// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
    /// assert_eq!(steel.yield_strength, 250.0e6);
    /// assert!(MaterialProperties::new(300.0e6, 250.0e6, 210.0e9).is_err());
    /// ```
    pub fn new(
        proportional_limit: f64,
        yield_strength: f64,
        elastic_modulus: f64,
    ) -> Result<Self, MaterialPropertyError> {
        let properties = Self {
            proportional_limit,
            yield_strength,
            elastic_modulus,
        };
        properties.validate()?;
        Ok(properties)
    }

    /// Check positivity, finiteness and the ordering `fy >= fp`.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    ///
    /// # Examples
    /// ```
    /// use firesteel::MaterialProperties;
    ///
    /// let steel: MaterialProperties = serde_json::from_str(
    ///     r#"{"proportional_limit":200e6,"yield_strength":0.0,"elastic_modulus":210e9}"#,
    /// )
    /// .unwrap();
    /// assert!(steel.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MaterialPropertyError> {
        for (property, value) in [
            ("proportional limit", self.proportional_limit),
            ("yield strength", self.yield_strength),
            ("elastic modulus", self.elastic_modulus),
        ] {
            if !(value.is_finite() && value > 0.0) {
                warn!("rejecting {property} = {value}");
                return Err(MaterialPropertyError::NonPositive { property, value });
            }
        }
        if self.yield_strength < self.proportional_limit {
            warn!(
                "rejecting yield strength {} below proportional limit {}",
                self.yield_strength, self.proportional_limit
            );
            return Err(MaterialPropertyError::YieldBelowProportionalLimit {
                proportional_limit: self.proportional_limit,
                yield_strength: self.yield_strength,
            });
        }
        Ok(())
    }
}

/// Material properties scaled to a specific temperature.
///
/// Produced fresh by every call to [`reduce`](crate::reduce); never cached.
/// Values built by hand or deserialized are checked by
/// [`stress_reduced`](crate::stress_reduced) before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReducedProperties {
    /// Temperature in degrees Celsius the properties were reduced to.
    pub temperature: f64,
    /// Reduced proportional limit `fp'`.
    pub proportional_limit: f64,
    /// Reduced yield strength `fy'`.
    pub yield_strength: f64,
    /// Reduced elastic modulus `Ea'`.
    pub elastic_modulus: f64,
}

impl ReducedProperties {
    /// Check that every property is finite and non-negative and that `fy' >= fp'`.
    ///
    /// Zero is accepted: all three properties vanish at 1200 °C.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    ///
    /// # Examples
    /// ```
    /// use firesteel::reduce;
    ///
    /// let mut reduced = reduce(200.0e6, 250.0e6, 210.0e9, 600.0).unwrap();
    /// assert!(reduced.validate().is_ok());
    /// reduced.yield_strength = f64::NAN;
    /// assert!(reduced.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), MaterialPropertyError> {
        for (property, value) in [
            ("proportional limit", self.proportional_limit),
            ("yield strength", self.yield_strength),
            ("elastic modulus", self.elastic_modulus),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                warn!("rejecting reduced {property} = {value}");
                return Err(MaterialPropertyError::NegativeReduced { property, value });
            }
        }
        if self.yield_strength < self.proportional_limit {
            warn!(
                "rejecting reduced yield strength {} below proportional limit {}",
                self.yield_strength, self.proportional_limit
            );
            return Err(MaterialPropertyError::YieldBelowProportionalLimit {
                proportional_limit: self.proportional_limit,
                yield_strength: self.yield_strength,
            });
        }
        Ok(())
    }

    /// Strain at the end of the linear elastic segment, `ep = fp' / Ea'`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericalError::ZeroStiffness`] when the reduced modulus is zero,
    /// which happens at the upper end of the temperature table.
    ///
    /// # Examples
    /// ```
    /// use firesteel::reduce;
    ///
    /// let ep = reduce(200.0e6, 250.0e6, 210.0e9, 20.0)
    ///     .unwrap()
    ///     .elastic_limit_strain()
    ///     .unwrap();
    /// assert!((ep - 200.0e6 / 210.0e9).abs() < 1e-15);
    /// ```
    pub fn elastic_limit_strain(&self) -> Result<f64, NumericalError> {
        if self.elastic_modulus <= 0.0 {
            return Err(NumericalError::ZeroStiffness {
                temperature: self.temperature,
            });
        }
        Ok(self.proportional_limit / self.elastic_modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_equal_proportional_limit_and_yield() {
        assert!(MaterialProperties::new(250.0e6, 250.0e6, 210.0e9).is_ok());
    }

    #[test]
    fn rejects_non_positive_and_non_finite_values() {
        assert_eq!(
            MaterialProperties::new(0.0, 250.0e6, 210.0e9),
            Err(MaterialPropertyError::NonPositive {
                property: "proportional limit",
                value: 0.0,
            })
        );
        assert!(MaterialProperties::new(200.0e6, f64::INFINITY, 210.0e9).is_err());
        assert!(MaterialProperties::new(200.0e6, 250.0e6, f64::NAN).is_err());
        assert!(MaterialProperties::new(200.0e6, 250.0e6, -210.0e9).is_err());
    }

    #[test]
    fn rejects_yield_below_proportional_limit() {
        let error = MaterialProperties::new(300.0e6, 250.0e6, 210.0e9).unwrap_err();
        assert!(matches!(
            error,
            MaterialPropertyError::YieldBelowProportionalLimit { .. }
        ));
    }

    #[test]
    fn deserialized_properties_can_be_revalidated() {
        let json = r#"{"proportional_limit":-1.0,"yield_strength":250e6,"elastic_modulus":210e9}"#;
        let properties: MaterialProperties = serde_json::from_str(json).unwrap();
        assert!(properties.validate().is_err());
    }

    #[test]
    fn reduced_properties_reject_nan_and_negative_values() {
        let reduced = ReducedProperties {
            temperature: 500.0,
            proportional_limit: 72.0e6,
            yield_strength: f64::NAN,
            elastic_modulus: 126.0e9,
        };
        assert!(matches!(
            reduced.validate(),
            Err(MaterialPropertyError::NegativeReduced {
                property: "yield strength",
                ..
            })
        ));

        let json = r#"{"temperature":20.0,"proportional_limit":200e6,"yield_strength":-250e6,"elastic_modulus":210e9}"#;
        let reduced: ReducedProperties = serde_json::from_str(json).unwrap();
        assert_eq!(
            reduced.validate(),
            Err(MaterialPropertyError::NegativeReduced {
                property: "yield strength",
                value: -250.0e6,
            })
        );
    }

    #[test]
    fn reduced_properties_keep_the_yield_ordering() {
        let reduced = ReducedProperties {
            temperature: 20.0,
            proportional_limit: 250.0e6,
            yield_strength: 200.0e6,
            elastic_modulus: 210.0e9,
        };
        assert!(matches!(
            reduced.validate(),
            Err(MaterialPropertyError::YieldBelowProportionalLimit { .. })
        ));
    }

    #[test]
    fn vanished_properties_are_valid() {
        let reduced = ReducedProperties {
            temperature: 1200.0,
            proportional_limit: 0.0,
            yield_strength: 0.0,
            elastic_modulus: 0.0,
        };
        assert_eq!(reduced.validate(), Ok(()));
    }

    #[test]
    fn zero_modulus_has_no_elastic_limit() {
        let reduced = ReducedProperties {
            temperature: 1200.0,
            proportional_limit: 0.0,
            yield_strength: 0.0,
            elastic_modulus: 0.0,
        };
        assert_eq!(
            reduced.elastic_limit_strain(),
            Err(NumericalError::ZeroStiffness {
                temperature: 1200.0
            })
        );
    }
}
