use super::latex::{fmt_plain, fmt_sig, linear_law_latex, polynomial_latex, Latex};
use crate::config::WingConfig;
use crate::database::{AeroCenterEstimate, TaperBlend};
use crate::integrals::{IntegralResult, Quantity, Unit, WingAnalysis};
use crate::laws::PiecewiseLinear;
use crate::utils::{rad_to_deg, WingError, SIG_DIGITS_COARSE, SIG_DIGITS_FINE};

const C: usize = SIG_DIGITS_COARSE;
const F: usize = SIG_DIGITS_FINE;

/// Table of the planform data.
pub fn data_summary(config: &WingConfig, reference_area: f64) -> Latex {
    let p = &config.planform;
    let rows = [
        (r"\text{root chord,}\, c_{\mathrm{r}}", fmt_plain(p.root_chord), r"\,\text{m}"),
        (r"\text{kink chord,}\, c_{\mathrm{k}}", fmt_plain(p.kink_chord), r"\,\text{m}"),
        (r"\text{tip chord,}\, c_{\mathrm{t}}", fmt_plain(p.tip_chord), r"\,\text{m}"),
        (r"\text{semispan,}\, \frac{1}{2}b", fmt_plain(p.semispan()), r"\,\text{m}"),
        (
            r"\text{semispan, inner panel,}\, \frac{1}{2}b_{\mathrm{k}}",
            fmt_plain(p.kink_station()),
            r"\,\text{m}",
        ),
        (
            r"\text{semispan, outer panel,}\, \frac{1}{2}(b - b_{\mathrm{k}})",
            fmt_plain(0.5 * p.outer_span()),
            r"\,\text{m}",
        ),
        (
            r"\text{reference surface,}\, S",
            fmt_sig(reference_area, F),
            r"\,\text{m}^2",
        ),
        (
            r"\text{leading edge sweep, inner panel,}\, \Lambda_{\mathrm{le},1}",
            fmt_sig(rad_to_deg(p.sweep_le_inner), F),
            r"\,\text{deg}",
        ),
        (
            r"\text{leading edge sweep, outer panel,}\, \Lambda_{\mathrm{le},2}",
            fmt_sig(rad_to_deg(p.sweep_le_outer), F),
            r"\,\text{deg}",
        ),
    ];
    array("rl", &rows)
}

/// Extended parameter table: planform, section laws and flight condition.
pub fn parameters_list(config: &WingConfig, aspect_ratio: f64) -> Result<Latex, WingError> {
    let p = &config.planform;
    let l = &config.laws;
    let trailing_edge = p.trailing_edge_law()?;
    let te_sweep = |i: usize| {
        trailing_edge
            .segment(i)
            .map(|s| rad_to_deg(s.slope.atan()))
            .unwrap_or(f64::NAN)
    };
    let te_outer = if p.is_cranked() { te_sweep(1) } else { te_sweep(0) };
    let deg = |rad: f64| fmt_sig(rad_to_deg(rad), F);

    let rows = vec![
        (r"\text{root chord,}\, c_{\mathrm{r}}".to_string(), fmt_plain(p.root_chord), r"\,\text{m}"),
        (r"\text{kink chord,}\, c_{\mathrm{k}}".to_string(), fmt_plain(p.kink_chord), r"\,\text{m}"),
        (r"\text{tip chord,}\, c_{\mathrm{t}}".to_string(), fmt_plain(p.tip_chord), r"\,\text{m}"),
        (r"\text{span,}\, b".to_string(), fmt_plain(p.span), r"\,\text{m}"),
        (r"\text{inner panel span,}\, b_{\mathrm{k}}".to_string(), fmt_plain(p.kink_span), r"\,\text{m}"),
        (
            r"\text{outer panel span,}\, b - b_{\mathrm{k}}".to_string(),
            fmt_plain(p.outer_span()),
            r"\,\text{m}",
        ),
        (r"\text{aspect ratio,}\, \mathrm{AR}".to_string(), fmt_sig(aspect_ratio, F), ""),
        (
            r"\text{leading edge sweep,}\, \Lambda_{\mathrm{le},1},\, \Lambda_{\mathrm{le},2}".to_string(),
            format!("{},\\; {}", deg(p.sweep_le_inner), deg(p.sweep_le_outer)),
            r"\,\text{deg}",
        ),
        (
            r"\text{trailing edge sweep,}\, \Lambda_{\mathrm{te},1},\, \Lambda_{\mathrm{te},2}".to_string(),
            format!("{},\\; {}", fmt_sig(te_sweep(0), F), fmt_sig(te_outer, F)),
            r"\,\text{deg}",
        ),
        station_row(r"\text{twist,}\, \varepsilon_{\mathrm{g}}", l.twist, true),
        station_row(r"\text{zero-lift angle,}\, \alpha_{0\ell}", l.zero_lift_angle, true),
        station_row(r"\text{lift-curve slope,}\, C_{\ell_\alpha}", l.lift_slope, false),
        station_row(r"\text{section moment,}\, C_{m_{\mathrm{ac}}}", l.cm_ac, false),
        station_row(r"\text{thickness ratio,}\, t/c", l.thickness, false),
        (r"\text{Mach number,}\, M".to_string(), fmt_plain(config.mach), ""),
    ];
    let rows: Vec<(&str, String, &str)> = rows
        .iter()
        .map(|(label, value, unit)| (label.as_str(), value.clone(), *unit))
        .collect();
    Ok(array("ll", &rows))
}

fn station_row(
    label: &str,
    values: crate::geometry::StationValues,
    angle: bool,
) -> (String, String, &'static str) {
    let show = |v: f64| {
        if angle {
            fmt_sig(rad_to_deg(v), F)
        } else {
            fmt_sig(v, F)
        }
    };
    (
        format!(r"{}\ (\mathrm{{r, k, t}})", label),
        format!(
            "{},\\; {},\\; {}",
            show(values.root),
            show(values.kink),
            show(values.tip)
        ),
        if angle { r"\,\text{deg}" } else { "" },
    )
}

fn array(columns: &str, rows: &[(&str, String, &str)]) -> Latex {
    let mut out = format!("\\begin{{array}}{{{}}}\n", columns);
    for (label, value, unit) in rows {
        out.push_str(&format!("{}: & {}{} \\\\\n", label, value, unit));
    }
    out.push_str("\\end{array}");
    Latex::new(out)
}

/// Slope and intercept of every panel of `law`, e.g. `A_{c,1}`, `B_{c,1}`.
pub fn coefficients_workflow(symbol: &str, law: &PiecewiseLinear, unit: &str) -> Latex {
    let breaks = law.breaks();
    let single = law.segment_count() == 1;
    let mut out = String::from("\\begin{array}{ll}\n");
    for (i, (segment, w)) in law.segments().iter().zip(breaks.windows(2)).enumerate() {
        let index = if single {
            symbol.to_string()
        } else {
            format!("{},{}", symbol, i + 1)
        };
        let (y0, y1) = (w[0], w[1]);
        let (v0, v1) = (segment.evaluate(y0), segment.evaluate(y1));
        out.push_str(&format!(
            "A_{{{}}} = \\dfrac{{{}{} - ({}{})}}{{{}\\,\\text{{m}} - {}\\,\\text{{m}}}} = {} \\\\\n",
            index,
            fmt_sig(v1, C),
            unit,
            fmt_sig(v0, C),
            unit,
            fmt_sig(y1, C),
            fmt_sig(y0, C),
            fmt_sig(segment.slope, C)
        ));
        out.push_str(&format!(
            "B_{{{}}} = {}{} \\\\\n",
            index,
            fmt_sig(segment.intercept, C),
            unit
        ));
    }
    out.push_str("\\end{array}");
    Latex::new(out)
}

/// `\begin{cases}` rendering of a law; a break-point belongs to the inboard
/// panel.
pub fn piecewise_system(name: &str, law: &PiecewiseLinear, unit: &str) -> Latex {
    let breaks = law.breaks();
    let single = law.segment_count() == 1;
    let mut out = format!("\\begin{{equation}}\n{}(y) =\n\\begin{{cases}}\n", name);
    for (i, (segment, w)) in law.segments().iter().zip(breaks.windows(2)).enumerate() {
        let piece = if single {
            name.to_string()
        } else if name.contains('_') {
            format!("{{{}}}_{}", name, i + 1)
        } else {
            format!("{}_{}", name, i + 1)
        };
        let lower = if i == 0 { r"\le" } else { "<" };
        out.push_str(&format!(
            "{}(y) = {}{} & \\text{{if }} {}\\,\\text{{m}} {} y \\le {}\\,\\text{{m}} \\\\[0.5em]\n",
            piece,
            linear_law_latex(segment, "y", C),
            unit,
            fmt_sig(w[0], C),
            lower,
            fmt_sig(w[1], C)
        ));
    }
    out.push_str("\\end{cases}\n\\end{equation}");
    Latex::new(out)
}

pub fn aspect_ratio_workflow(span: f64, area: f64, aspect_ratio: f64) -> Latex {
    Latex::new(format!(
        "\\begin{{align*}}\n\\mathrm{{AR}} = \\frac{{b^2}}{{S}} = \\dfrac{{({}\\,\\text{{m}})^2}}{{{}\\,\\text{{m}}^2}} = {}\n\\end{{align*}}",
        fmt_sig(span, C),
        fmt_sig(area, C),
        fmt_sig(aspect_ratio, F)
    ))
}

/// Closed-form mean aerodynamic chord of a straight-tapered wing.
pub fn mean_chord_workflow(root_chord: f64, taper_ratio: f64, mac: f64) -> Latex {
    let l = fmt_sig(taper_ratio, C);
    Latex::new(format!(
        "\\begin{{align*}}\n\\bar{{c}} = \\frac{{2}}{{3}}c_\\mathrm{{r}}\\frac{{1 + \\lambda + \\lambda^2}}{{1+\\lambda}} = \\frac{{2}}{{3}}\\cdot {}\\,\\text{{m}} \\cdot\\dfrac{{1 + {} + {}^2}}{{1 + {}}} = {}\\,\\text{{m}}\n\\end{{align*}}",
        fmt_sig(root_chord, C),
        l,
        l,
        l,
        fmt_sig(mac, F)
    ))
}

pub fn x_le_mac_workflow(span: f64, taper_ratio: f64, sweep_le: f64, x_le_mac: f64) -> Latex {
    let l = fmt_sig(taper_ratio, C);
    Latex::new(format!(
        "\\begin{{align*}}\nX_{{\\mathrm{{le}},\\bar{{c}}}} = \\frac{{b}}{{6}}\\,\\frac{{1 + 2\\lambda}}{{1 + \\lambda}}\\tan\\Lambda_{{\\mathrm{{le}}}} = \\dfrac{{{}\\,\\text{{m}}}}{{6}}\\cdot\\dfrac{{1 + 2\\cdot {}}}{{1 + {}}}\\cdot\\tan({}\\,\\text{{deg}}) = {}\\,\\text{{m}}\n\\end{{align*}}",
        fmt_sig(span, C),
        l,
        l,
        fmt_sig(rad_to_deg(sweep_le), C),
        fmt_sig(x_le_mac, C)
    ))
}

pub fn y_mac_workflow(span: f64, taper_ratio: f64, y_mac: f64) -> Latex {
    let l = fmt_sig(taper_ratio, C);
    Latex::new(format!(
        "\\begin{{align*}}\nY_{{\\bar{{c}}}} = \\frac{{b}}{{6}}\\,\\frac{{1 + 2\\lambda}}{{1 + \\lambda}} = \\dfrac{{{}\\,\\text{{m}}}}{{6}}\\cdot\\dfrac{{1 + 2\\cdot {}}}{{1 + {}}} = {}\\,\\text{{m}}\n\\end{{align*}}",
        fmt_sig(span, C),
        l,
        l,
        fmt_sig(y_mac, C)
    ))
}

/// Worked derivation of an integrated quantity: the integral statement, the
/// numeric integrand on each panel, the antiderivatives between the panel
/// bounds and the result.
pub fn integral_workflow(result: &IntegralResult) -> Latex {
    let quantity = result.quantity;
    let unit = quantity.unit().latex();
    let factor = match quantity {
        Quantity::ReferenceArea => "2".to_string(),
        _ => fmt_sig(result.factor, F),
    };
    let upper = result.bounds().map(|(_, upper)| upper).unwrap_or(0.0);

    let mut out = String::from("\\begin{align*}\n");
    out.push_str(&format!(
        "{} & {{}}= {} \\int_0^{{{}}} {} \\,\\mathrm{{d}}y",
        quantity.symbol(),
        quantity.factor_symbol(),
        fmt_sig(upper, C),
        quantity.integrand()
    ));

    let integrands: Vec<String> = result
        .segments
        .iter()
        .map(|s| {
            let factors: String = s
                .factors
                .iter()
                .map(|f| format!("\\big({}\\big)", linear_law_latex(f, "y", F)))
                .collect();
            format!(
                "\\int_{{{}}}^{{{}}} {} \\,\\mathrm{{d}}y",
                fmt_sig(s.lower, C),
                fmt_sig(s.upper, C),
                factors
            )
        })
        .collect();
    out.push_str(&format!(
        " \\\\[1em]\n& {{}}= {} \\Big[ {} \\Big]",
        factor,
        integrands.join(" + ")
    ));

    let antiderivatives: Vec<String> = result
        .segments
        .iter()
        .map(|s| {
            format!(
                "\\big({}\\big)\\Bigr|_{{{}}}^{{{}}}",
                polynomial_latex(&s.antiderivative, "y", F),
                fmt_sig(s.lower, C),
                fmt_sig(s.upper, C)
            )
        })
        .collect();
    out.push_str(&format!(
        " \\\\[1em]\n& {{}}= {} \\Big[ {} \\Big]",
        factor,
        antiderivatives.join(" + ")
    ));

    out.push_str(&format!(
        " \\\\[1em]\n& {{}}= {} \\cdot {} = {}{}",
        factor,
        fmt_sig(result.integral, F),
        fmt_sig(result.value, F),
        unit
    ));
    if quantity.unit() == Unit::Radian {
        out.push_str(&format!(
            " = {}\\,\\text{{deg}}",
            fmt_sig(rad_to_deg(result.value), F)
        ));
    }
    out.push_str("\n\\end{align*}");
    Latex::new(out)
}

/// Linear interpolation in the taper ratio between two chart slices.
pub fn taper_blend_workflow(symbol: &str, blend: &TaperBlend) -> Latex {
    let (la, lb) = (fmt_sig(blend.lambda_a, C), fmt_sig(blend.lambda_b, C));
    let lambda = fmt_sig(blend.taper_ratio, C);
    Latex::new(format!(
        "\\begin{{equation}}\n{s} = {s} \\Big|_{{\\lambda={la}}} + \\frac{{{s} \\Big|_{{\\lambda={lb}}} - {s} \\Big|_{{\\lambda={la}}}}}{{{lb} - {la}}}\\,\\big( {l} - {la} \\big) = {va} + \\frac{{{vb} - {va}}}{{{lb} - {la}}}\\,\\big( {l} - {la} \\big) = {v}\n\\end{{equation}}",
        s = symbol,
        la = la,
        lb = lb,
        l = lambda,
        va = fmt_sig(blend.value_a, C),
        vb = fmt_sig(blend.value_b, C),
        v = fmt_sig(blend.value, C)
    ))
}

/// Chart readings combined into `x̄_ac = K_1 (X'_ac / c_r - K_2)`.
pub fn aerodynamic_center_workflow(estimate: &AeroCenterEstimate) -> Latex {
    let k2 = taper_blend_workflow("K_2", &estimate.k2);
    let xac = taper_blend_workflow(r"\frac{X_{\mathrm{ac}}'}{c_{\mathrm{r}}}", &estimate.xac_cr);
    let arguments = format!(
        "\\begin{{align*}}\n\\frac{{\\tan\\Lambda_{{\\mathrm{{le}}}}}}{{\\sqrt{{1 - M^2}}}} = {} ,\\qquad \\mathrm{{AR}}\\tan\\Lambda_{{\\mathrm{{le}}}} = {} ,\\qquad K_1\\big|_{{\\lambda={}}} = {}\n\\end{{align*}}",
        fmt_sig(estimate.x_compressible, F),
        fmt_sig(estimate.ar_tan_sweep, F),
        fmt_sig(estimate.taper_ratio, C),
        fmt_sig(estimate.k1, F)
    );
    let combination = format!(
        "\\begin{{equation}}\n\\frac{{\\bar{{x}}_{{\\mathrm{{ac}}}}}}{{\\bar{{c}}}} = K_1 \\left( \\frac{{X_{{\\mathrm{{ac}}}}'}}{{c_{{\\mathrm{{r}}}}}} - K_2 \\right) = {} \\left( {} - {} \\right) = {}\n\\end{{equation}}",
        fmt_sig(estimate.k1, F),
        fmt_sig(estimate.xac_cr.value, F),
        fmt_sig(estimate.k2.value, F),
        fmt_sig(estimate.x_ac_fraction, F)
    );
    Latex::join(&[Latex::new(arguments), k2, xac, Latex::new(combination)])
}

/// Complete derivation of one wing.
pub fn analysis_report(
    config: &WingConfig,
    analysis: &WingAnalysis,
    estimate: Option<&AeroCenterEstimate>,
) -> Result<Latex, WingError> {
    let p = &config.planform;
    let chord = p.chord_law()?;
    let mut parts = vec![
        data_summary(config, analysis.reference_area.value),
        parameters_list(config, analysis.aspect_ratio)?,
        coefficients_workflow("c", &chord, r"\,\text{m}"),
        piecewise_system("c", &chord, r"\,\text{m}"),
        piecewise_system(r"X_{\mathrm{le}}", &p.leading_edge_law()?, r"\,\text{m}"),
        piecewise_system(
            r"\varepsilon_{\mathrm{g}}",
            &config.laws.twist_law(p)?,
            r"\,\text{rad}",
        ),
        piecewise_system(
            r"\alpha_{0\ell}",
            &config.laws.zero_lift_law(p)?,
            r"\,\text{rad}",
        ),
        aspect_ratio_workflow(p.span, analysis.reference_area.value, analysis.aspect_ratio),
    ];
    if !p.is_cranked() {
        let l = p.taper_ratio();
        parts.push(mean_chord_workflow(
            p.root_chord,
            l,
            analysis.mean_aerodynamic_chord.value,
        ));
        parts.push(x_le_mac_workflow(
            p.span,
            l,
            p.sweep_le_inner,
            analysis.x_le_mac.value,
        ));
        parts.push(y_mac_workflow(p.span, l, analysis.y_mac.value));
    }
    parts.extend(analysis.results().iter().map(|r| integral_workflow(r)));
    if let Some(estimate) = estimate {
        parts.push(aerodynamic_center_workflow(estimate));
    }
    parts.push(Latex::new(format!(
        "\\begin{{equation}}\nC_{{M_{{\\mathrm{{ac}}}}}} = C_{{M_{{\\mathrm{{ac}},\\mathrm{{a}}}}}} + C_{{M_{{\\mathrm{{ac}},\\mathrm{{b}}}}}} = {} + ({}) = {}\n\\end{{equation}}",
        fmt_sig(analysis.cm_ac_basic.value, F),
        fmt_sig(analysis.cm_ac_additional.value, F),
        fmt_sig(analysis.cm_ac(), F)
    )));
    Ok(Latex::join(&parts))
}
