use super::result::{IntegralResult, Quantity};
use crate::geometry::{SpanwiseLaws, WingPlanform};
use crate::laws::{integrate_product_segments, PiecewiseLinear};
use crate::utils::WingError;

fn integrate(
    quantity: Quantity,
    factor: f64,
    factors: &[&PiecewiseLinear],
) -> Result<IntegralResult, WingError> {
    let segments = integrate_product_segments(factors)?;
    Ok(IntegralResult::new(quantity, factor, segments))
}

/// `2 / S`, the weight of every chord-weighted mean.
fn mean_factor(area: f64) -> Result<f64, WingError> {
    if !area.is_finite() || area <= 0.0 {
        return Err(WingError::Degenerate(format!(
            "reference area must be positive, got {}",
            area
        )));
    }
    Ok(2.0 / area)
}

fn moment_factor(area: f64, mac: f64) -> Result<f64, WingError> {
    let factor = mean_factor(area)?;
    if !mac.is_finite() || mac <= 0.0 {
        return Err(WingError::Degenerate(format!(
            "mean aerodynamic chord must be positive, got {}",
            mac
        )));
    }
    Ok(factor / mac)
}

/// `S = 2 ∫ c(y) dy`
pub fn reference_area(planform: &WingPlanform) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let result = integrate(Quantity::ReferenceArea, 2.0, &[&chord])?;
    mean_factor(result.value)?;
    Ok(result)
}

/// `c̄ = (2/S) ∫ c²(y) dy`
pub fn mean_aerodynamic_chord(
    planform: &WingPlanform,
    area: f64,
) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    integrate(
        Quantity::MeanAerodynamicChord,
        mean_factor(area)?,
        &[&chord, &chord],
    )
}

/// `X_le,c̄ = (2/S) ∫ X_le(y) c(y) dy`
pub fn x_le_mac(planform: &WingPlanform, area: f64) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let leading_edge = planform.leading_edge_law()?;
    integrate(Quantity::XLeMac, mean_factor(area)?, &[&leading_edge, &chord])
}

/// `Y_c̄ = (2/S) ∫ y c(y) dy`
pub fn y_mac(planform: &WingPlanform, area: f64) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let y = planform.span_coordinate_law()?;
    integrate(Quantity::YMac, mean_factor(area)?, &[&y, &chord])
}

/// Wing zero-lift angle measured from the root chord,
/// `α_0L = (2/S) ∫ (α_0ℓ(y) - ε_g(y)) c(y) dy`.
pub fn zero_lift_angle(
    planform: &WingPlanform,
    laws: &SpanwiseLaws,
    area: f64,
) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let alpha = laws.effective_zero_lift_law(planform)?;
    integrate(Quantity::ZeroLiftAngle, mean_factor(area)?, &[&alpha, &chord])
}

/// Chord-weighted mean of the section zero-lift angle, twist excluded.
pub fn mean_zero_lift_angle(
    planform: &WingPlanform,
    laws: &SpanwiseLaws,
    area: f64,
) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let alpha = laws.zero_lift_law(planform)?;
    integrate(
        Quantity::MeanZeroLiftAngle,
        mean_factor(area)?,
        &[&alpha, &chord],
    )
}

pub fn mean_lift_slope(
    planform: &WingPlanform,
    laws: &SpanwiseLaws,
    area: f64,
) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let slope = laws.lift_slope_law(planform)?;
    integrate(Quantity::MeanLiftSlope, mean_factor(area)?, &[&slope, &chord])
}

pub fn mean_thickness(
    planform: &WingPlanform,
    laws: &SpanwiseLaws,
    area: f64,
) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let thickness = laws.thickness_law(planform)?;
    integrate(
        Quantity::MeanThickness,
        mean_factor(area)?,
        &[&thickness, &chord],
    )
}

/// Contribution of the section moments, `(2/(S c̄)) ∫ C_m,ac(y) c²(y) dy`.
pub fn cm_ac_basic(
    planform: &WingPlanform,
    laws: &SpanwiseLaws,
    area: f64,
    mac: f64,
) -> Result<IntegralResult, WingError> {
    let chord = planform.chord_law()?;
    let cm = laws.cm_ac_law(planform)?;
    integrate(
        Quantity::CmAcBasic,
        moment_factor(area, mac)?,
        &[&cm, &chord, &chord],
    )
}

/// Contribution of the additional lift distribution about the wing
/// aerodynamic centre `x_ac`, both measured from the root leading edge:
///
/// `(2/(S c̄)) ∫ c C_ℓα [α_0L - (α_0ℓ - ε_g)] [X_ac - (X_le + c/4)] dy`
///
/// The section lift at zero wing lift acts on the local quarter-chord line.
pub fn cm_ac_additional(
    planform: &WingPlanform,
    laws: &SpanwiseLaws,
    area: f64,
    mac: f64,
    wing_zero_lift_angle: f64,
    x_ac: f64,
) -> Result<IntegralResult, WingError> {
    let factor = moment_factor(area, mac)?;
    let (lower, upper) = (0.0, planform.semispan());

    let chord = planform.chord_law()?;
    let slope = laws.lift_slope_law(planform)?;
    let incidence = PiecewiseLinear::constant(lower, upper, wing_zero_lift_angle)?
        .add_scaled(&laws.effective_zero_lift_law(planform)?, -1.0)?;
    let arm = PiecewiseLinear::constant(lower, upper, x_ac)?
        .add_scaled(&planform.quarter_chord_law()?, -1.0)?;

    integrate(
        Quantity::CmAcAdditional,
        factor,
        &[&chord, &slope, &incidence, &arm],
    )
}
