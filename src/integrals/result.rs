use std::fmt;

use crate::laws::SegmentIntegral;

/// Physical unit of an integrated wing quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    SquareMetre,
    Metre,
    Radian,
    PerRadian,
    Dimensionless,
}

impl Unit {
    /// Unit in LaTeX, empty for dimensionless quantities.
    pub fn latex(&self) -> &'static str {
        match self {
            Unit::SquareMetre => r"\,\text{m}^2",
            Unit::Metre => r"\,\text{m}",
            Unit::Radian => r"\,\text{rad}",
            Unit::PerRadian => r"\,\text{rad}^{-1}",
            Unit::Dimensionless => "",
        }
    }
}

/// Aggregate quantities obtained by integrating span-wise laws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    ReferenceArea,
    MeanAerodynamicChord,
    XLeMac,
    YMac,
    ZeroLiftAngle,
    MeanZeroLiftAngle,
    MeanLiftSlope,
    MeanThickness,
    CmAcBasic,
    CmAcAdditional,
}

impl Quantity {
    pub const ALL: [Quantity; 10] = [
        Quantity::ReferenceArea,
        Quantity::MeanAerodynamicChord,
        Quantity::XLeMac,
        Quantity::YMac,
        Quantity::ZeroLiftAngle,
        Quantity::MeanZeroLiftAngle,
        Quantity::MeanLiftSlope,
        Quantity::MeanThickness,
        Quantity::CmAcBasic,
        Quantity::CmAcAdditional,
    ];

    /// LaTeX symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Quantity::ReferenceArea => "S",
            Quantity::MeanAerodynamicChord => r"\bar{c}",
            Quantity::XLeMac => r"X_{\mathrm{le},\bar{c}}",
            Quantity::YMac => r"Y_{\bar{c}}",
            Quantity::ZeroLiftAngle => r"\alpha_{0L,\mathrm{W}}",
            Quantity::MeanZeroLiftAngle => r"\bar{\alpha}_{0\ell}",
            Quantity::MeanLiftSlope => r"\bar{C}_{\ell_\alpha}",
            Quantity::MeanThickness => r"\overline{(t/c)}",
            Quantity::CmAcBasic => r"C_{M_{\mathrm{ac},\mathrm{a}}}",
            Quantity::CmAcAdditional => r"C_{M_{\mathrm{ac},\mathrm{b}}}",
        }
    }

    /// Integrand in LaTeX, in terms of the span-wise laws.
    pub fn integrand(&self) -> &'static str {
        match self {
            Quantity::ReferenceArea => "c(y)",
            Quantity::MeanAerodynamicChord => "c^2(y)",
            Quantity::XLeMac => r"X_{\mathrm{le}}(y)\, c(y)",
            Quantity::YMac => r"y\, c(y)",
            Quantity::ZeroLiftAngle => r"\left[\alpha_{0\ell}(y) - \varepsilon_{\mathrm{g}}(y)\right] c(y)",
            Quantity::MeanZeroLiftAngle => r"\alpha_{0\ell}(y)\, c(y)",
            Quantity::MeanLiftSlope => r"C_{\ell_\alpha}(y)\, c(y)",
            Quantity::MeanThickness => r"(t/c)(y)\, c(y)",
            Quantity::CmAcBasic => r"C_{m_{\mathrm{ac}}}(y)\, c^2(y)",
            Quantity::CmAcAdditional => {
                r"c(y)\, C_{\ell_\alpha}(y) \left[\alpha_{0L} - \alpha_{0\ell}(y) + \varepsilon_{\mathrm{g}}(y)\right] \left[X_{\mathrm{ac}} - X_{\mathrm{le}}(y) - \tfrac{1}{4} c(y)\right]"
            }
        }
    }

    /// Factor in front of the integral, in LaTeX.
    pub fn factor_symbol(&self) -> &'static str {
        match self {
            Quantity::ReferenceArea => "2",
            Quantity::CmAcBasic | Quantity::CmAcAdditional => r"\frac{2}{S\,\bar{c}}",
            _ => r"\frac{2}{S}",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quantity::ReferenceArea => "reference area",
            Quantity::MeanAerodynamicChord => "mean aerodynamic chord",
            Quantity::XLeMac => "leading edge of the mean aerodynamic chord",
            Quantity::YMac => "span station of the mean aerodynamic chord",
            Quantity::ZeroLiftAngle => "wing zero-lift angle",
            Quantity::MeanZeroLiftAngle => "mean section zero-lift angle",
            Quantity::MeanLiftSlope => "mean section lift-curve slope",
            Quantity::MeanThickness => "mean thickness ratio",
            Quantity::CmAcBasic => "basic pitching moment about the aerodynamic centre",
            Quantity::CmAcAdditional => "additional pitching moment about the aerodynamic centre",
        }
    }

    pub fn unit(&self) -> Unit {
        match self {
            Quantity::ReferenceArea => Unit::SquareMetre,
            Quantity::MeanAerodynamicChord | Quantity::XLeMac | Quantity::YMac => Unit::Metre,
            Quantity::ZeroLiftAngle | Quantity::MeanZeroLiftAngle => Unit::Radian,
            Quantity::MeanLiftSlope => Unit::PerRadian,
            Quantity::MeanThickness | Quantity::CmAcBasic | Quantity::CmAcAdditional => {
                Unit::Dimensionless
            }
        }
    }

    pub fn is_angle(&self) -> bool {
        self.unit() == Unit::Radian
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Value of an integrated quantity together with its derivation.
///
/// `value = factor * integral`, and `integral` is the sum of the segment
/// values. The segments keep the antiderivative of the integrand on each
/// refined span interval.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralResult {
    pub quantity: Quantity,
    pub value: f64,
    pub factor: f64,
    pub integral: f64,
    pub segments: Vec<SegmentIntegral>,
}

impl IntegralResult {
    pub fn new(quantity: Quantity, factor: f64, segments: Vec<SegmentIntegral>) -> Self {
        let integral: f64 = segments.iter().map(|s| s.value).sum();
        Self {
            quantity,
            value: factor * integral,
            factor,
            integral,
            segments,
        }
    }

    /// Span interval the integral was taken over.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((self.segments.first()?.lower, self.segments.last()?.upper))
    }
}

impl fmt::Display for IntegralResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.quantity.is_angle() {
            write!(
                f,
                "{} = {:.6} rad ({:.4} deg)",
                self.quantity,
                self.value,
                self.value.to_degrees()
            )
        } else {
            write!(f, "{} = {:.6}", self.quantity, self.value)
        }
    }
}
