//! Unit-checked entry points built on [`uom`] quantities.

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};
use uom::si::pressure::pascal;
use uom::si::ratio::ratio;
use uom::si::thermodynamic_temperature::degree_celsius;

use crate::errors::{MaterialPropertyError, StressError};
use crate::material::MaterialProperties;
use crate::model::StressModel;

impl MaterialProperties {
    /// Create validated properties from typed pressures, stored in pascals.
    ///
    /// # Errors
    ///
    /// See [`MaterialProperties::new`].
    ///
    /// # Examples
    /// ```
    /// use firesteel::MaterialProperties;
    /// use uom::si::f64::Pressure;
    /// use uom::si::pressure::{gigapascal, megapascal};
    ///
    /// let steel = MaterialProperties::from_pressures(
    ///     Pressure::new::<megapascal>(200.0),
    ///     Pressure::new::<megapascal>(250.0),
    ///     Pressure::new::<gigapascal>(210.0),
    /// )
    /// .unwrap();
    /// assert!((steel.elastic_modulus - 210.0e9).abs() < 1.0);
    /// ```
    pub fn from_pressures(
        proportional_limit: Pressure,
        yield_strength: Pressure,
        elastic_modulus: Pressure,
    ) -> Result<Self, MaterialPropertyError> {
        Self::new(
            proportional_limit.get::<pascal>(),
            yield_strength.get::<pascal>(),
            elastic_modulus.get::<pascal>(),
        )
    }
}

/// Evaluate `model` for a material whose properties are in pascals.
///
/// # Errors
///
/// Propagates the error of the selected law.
///
/// # Examples
/// ```
/// use firesteel::{typed_stress, MaterialProperties, StressModel};
/// use uom::si::f64::{Ratio, ThermodynamicTemperature};
/// use uom::si::pressure::megapascal;
/// use uom::si::ratio::ratio;
/// use uom::si::thermodynamic_temperature::degree_celsius;
///
/// let steel = MaterialProperties::new(200.0e6, 250.0e6, 210.0e9).unwrap();
/// let sigma = typed_stress(
///     StressModel::Basic,
///     &steel,
///     Ratio::new::<ratio>(0.1),
///     ThermodynamicTemperature::new::<degree_celsius>(20.0),
/// )
/// .unwrap();
/// assert!((sigma.get::<megapascal>() - 250.0).abs() < 1e-9);
/// ```
pub fn typed_stress(
    model: StressModel,
    material: &MaterialProperties,
    strain: Ratio,
    temperature: ThermodynamicTemperature,
) -> Result<Pressure, StressError> {
    let sigma = model.evaluate(
        material,
        strain.get::<ratio>(),
        temperature.get::<degree_celsius>(),
    )?;
    Ok(Pressure::new::<pascal>(sigma))
}
