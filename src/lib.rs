#![warn(clippy::all)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_doc_code_examples)]
#![warn(clippy::missing_docs_in_private_items)]
#![doc = include_str!("../README.md")]

pub mod curve;
pub mod errors;
pub mod hardening;
pub mod material;
pub mod model;
pub mod reduction;
pub mod stress;
pub mod units;

pub use curve::{peak_stress, sample_curve, CurvePoint};
pub use errors::{DomainError, MaterialPropertyError, NumericalError, StressError};
pub use hardening::{stress_hardening, ultimate_strength};
pub use material::{MaterialProperties, ReducedProperties};
pub use model::{StressModel, UnknownModel};
pub use reduction::{reduce, reduce_material, ReductionFactors};
pub use stress::{stress, stress_reduced, LIMITING_STRAIN, ULTIMATE_STRAIN, YIELD_STRAIN};
pub use units::typed_stress;
