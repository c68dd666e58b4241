//! Selection between the basic and the strain-hardening law.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::StressError;
use crate::material::MaterialProperties;

/// Which stress-strain law to evaluate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressModel {
    /// Elastic, elliptical, plateau and descending segments.
    #[default]
    Basic,
    /// Basic law with strain hardening below 400 °C.
    Hardening,
}

impl StressModel {
    /// Both models, in display order.
    pub const ALL: [StressModel; 2] = [StressModel::Basic, StressModel::Hardening];

    /// Evaluate the selected law.
    ///
    /// # Errors
    ///
    /// Propagates the error of the selected law.
    ///
    /// # Examples
    /// ```
    /// use firesteel::{MaterialProperties, StressModel};
    ///
    /// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
    /// let basic = StressModel::Basic.evaluate(&steel, 0.1, 20.0).unwrap();
    /// let hardened = StressModel::Hardening.evaluate(&steel, 0.1, 20.0).unwrap();
    /// assert!(hardened > basic);
    /// ```
    pub fn evaluate(
        self,
        material: &MaterialProperties,
        strain: f64,
        temperature: f64,
    ) -> Result<f64, StressError> {
        match self {
            StressModel::Basic => material.stress(strain, temperature),
            StressModel::Hardening => material.stress_hardening(strain, temperature),
        }
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    ///
    /// # Examples
    /// ```
    /// use firesteel::StressModel;
    ///
    /// assert_eq!(StressModel::Hardening.name(), "hardening");
    /// assert_eq!("Hardening".parse::<StressModel>().unwrap(), StressModel::Hardening);
    /// ```
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StressModel::Basic => "basic",
            StressModel::Hardening => "hardening",
        }
    }
}

impl fmt::Display for StressModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown model name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown stress model '{0}' (expected 'basic' or 'hardening')")]
pub struct UnknownModel(pub String);

impl FromStr for StressModel {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StressModel::ALL
            .into_iter()
            .find(|model| model.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
