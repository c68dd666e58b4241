//! Uniformly sampled stress-strain curves.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, StressError};
use crate::material::MaterialProperties;
use crate::model::StressModel;

/// One sample of a stress-strain curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Dimensionless strain.
    pub strain: f64,
    /// Stress in the unit of the input properties.
    pub stress: f64,
}

/// Sample `model` at `temperature` (°C) on `samples` evenly spaced strains from
/// zero to `max_strain`. The last sample lands exactly on `max_strain`.
///
/// # Errors
///
/// Returns [`DomainError::TooFewSamples`] or [`DomainError::InvalidStrainRange`]
/// for an unusable request, and the first evaluation error otherwise. With the
/// basic law, a `max_strain` above 0.2 fails with a strain-beyond-rupture error.
///
/// # Examples
/// ```
/// use firesteel::{sample_curve, MaterialProperties, StressModel};
///
/// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
/// let curve = sample_curve(&steel, 20.0, StressModel::Basic, 0.2, 5).unwrap();
/// let strains: Vec<f64> = curve.iter().map(|point| point.strain).collect();
/// assert_eq!(strains, vec![0.0, 0.05, 0.1, 0.15000000000000002, 0.2]);
/// assert_eq!(curve[4].stress, 0.0);
/// ```
pub fn sample_curve(
    material: &MaterialProperties,
    temperature: f64,
    model: StressModel,
    max_strain: f64,
    samples: usize,
) -> Result<Vec<CurvePoint>, StressError> {
    if samples < 2 {
        return Err(DomainError::TooFewSamples(samples).into());
    }
    if !(max_strain.is_finite() && max_strain > 0.0) {
        return Err(DomainError::InvalidStrainRange(max_strain).into());
    }
    debug!("sampling {model} curve at {temperature} °C with {samples} points up to {max_strain}");

    let last = samples - 1;
    let step = max_strain / last as f64;
    (0..samples)
        .map(|index| {
            let strain = if index == last {
                max_strain
            } else {
                index as f64 * step
            };
            model
                .evaluate(material, strain, temperature)
                .map(|stress| CurvePoint { strain, stress })
        })
        .collect()
}

/// Sample with the largest stress, or `None` for an empty curve.
///
/// # Examples
/// ```
/// use firesteel::{peak_stress, sample_curve, MaterialProperties, StressModel};
///
/// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
/// let curve = sample_curve(&steel, 20.0, StressModel::Basic, 0.2, 5).unwrap();
/// assert_eq!(peak_stress(&curve).unwrap().stress, 250.0e6);
/// assert!(peak_stress(&[]).is_none());
/// ```
#[must_use]
pub fn peak_stress(curve: &[CurvePoint]) -> Option<CurvePoint> {
    curve
        .iter()
        .copied()
        .max_by(|a, b| a.stress.total_cmp(&b.stress))
}
