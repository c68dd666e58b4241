use std::fmt::Write;

use firesteel::{peak_stress, CurvePoint, ReducedProperties, ReductionFactors, StressModel};

use crate::cli::OutputFormat;

/// Pascals per megapascal, for readable tables.
const MEGA: f64 = 1.0e6;

/// Render the reduction factors and the properties they produce.
#[must_use]
pub fn render_factors(factors: &ReductionFactors, reduced: &ReducedProperties) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Reduction factors at {:.1} °C",
        reduced.temperature
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  yield strength      ky = {:.4}  fy = {:.2} MPa",
        factors.yield_strength,
        reduced.yield_strength / MEGA
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  proportional limit  kp = {:.4}  fp = {:.2} MPa",
        factors.proportional_limit,
        reduced.proportional_limit / MEGA
    )
    .expect("writing to string cannot fail");
    writeln!(
        &mut output,
        "  elastic modulus     kE = {:.4}  Ea = {:.2} GPa",
        factors.elastic_modulus,
        reduced.elastic_modulus / 1.0e9
    )
    .expect("writing to string cannot fail");

    output
}

/// Render a single stress evaluation.
#[must_use]
pub fn render_stress(model: StressModel, strain: f64, temperature: f64, stress: f64) -> String {
    format!(
        "{model} law at {temperature:.1} °C: strain = {strain:.5}, stress = {:.3} MPa ({stress:.6e} Pa)\n",
        stress / MEGA
    )
}

/// Render a sampled curve in the requested layout.
pub fn render_curve(
    model: StressModel,
    temperature: f64,
    curve: &[CurvePoint],
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    match format {
        OutputFormat::Json => {
            output = serde_json::to_string_pretty(curve)?;
            output.push('\n');
        }
        OutputFormat::Csv => {
            output.push_str("strain,stress\n");
            for point in curve {
                writeln!(&mut output, "{},{}", point.strain, point.stress)
                    .expect("writing to string cannot fail");
            }
        }
        OutputFormat::Table => {
            writeln!(
                &mut output,
                "{model} stress-strain curve at {temperature:.1} °C"
            )
            .expect("writing to string cannot fail");
            writeln!(&mut output, "{:>10}  {:>12}", "strain", "stress [MPa]")
                .expect("writing to string cannot fail");
            for point in curve {
                writeln!(
                    &mut output,
                    "{:>10.5}  {:>12.3}",
                    point.strain,
                    point.stress / MEGA
                )
                .expect("writing to string cannot fail");
            }
            if let Some(peak) = peak_stress(curve) {
                writeln!(
                    &mut output,
                    "Peak stress {:.3} MPa at strain {:.5}",
                    peak.stress / MEGA,
                    peak.strain
                )
                .expect("writing to string cannot fail");
            }
        }
    }
    Ok(output)
}
