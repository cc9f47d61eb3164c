use std::fmt;

use crate::laws::{LinearLaw, Polynomial};

/// Rendered LaTeX fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Latex(String);

impl Latex {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Joins fragments, one per paragraph.
    pub fn join(parts: &[Latex]) -> Latex {
        let parts: Vec<&str> = parts.iter().map(Latex::as_str).collect();
        Latex(parts.join("\n\n"))
    }
}

impl fmt::Display for Latex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Latex> for String {
    fn from(latex: Latex) -> Self {
        latex.0
    }
}

/// General number format with `digits` significant digits.
///
/// Fixed notation keeps at least one decimal (`2.0`, `0.1235`); very small or
/// large magnitudes switch to scientific notation (`1e-05`, `1.23e+03`).
pub fn fmt_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        let fixed = trim_zeros(&fixed);
        if fixed.contains('.') {
            fixed.to_string()
        } else {
            format!("{}.0", fixed)
        }
    }
}

/// Shortest representation that reads back to the same value (`7.0`, `0.1`).
pub fn fmt_plain(value: f64) -> String {
    format!("{:?}", value)
}

fn trim_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Appends `coefficient * term` to a sum, folding the sign into the operator.
fn push_term(out: &mut String, coefficient: f64, term: &str, digits: usize) {
    let magnitude = fmt_sig(coefficient.abs(), digits);
    let body = if term.is_empty() {
        magnitude
    } else {
        format!("{}\\,{}", magnitude, term)
    };
    match (out.is_empty(), coefficient < 0.0) {
        (true, false) => out.push_str(&body),
        (true, true) => {
            out.push('-');
            out.push_str(&body);
        }
        (false, false) => {
            out.push_str(" + ");
            out.push_str(&body);
        }
        (false, true) => {
            out.push_str(" - ");
            out.push_str(&body);
        }
    }
}

/// Polynomial in `variable`, highest power first, zero terms dropped.
pub fn polynomial_latex(polynomial: &Polynomial, variable: &str, digits: usize) -> String {
    let mut out = String::new();
    for (power, &coefficient) in polynomial.coefficients().iter().enumerate().rev() {
        if coefficient == 0.0 {
            continue;
        }
        let term = match power {
            0 => String::new(),
            1 => variable.to_string(),
            _ => format!("{}^{{{}}}", variable, power),
        };
        push_term(&mut out, coefficient, &term, digits);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Linear law as `A y + B`, or `A (y - y_0) + B` when referred to `y_0 != 0`.
pub fn linear_law_latex(law: &LinearLaw, variable: &str, digits: usize) -> String {
    let mut out = String::new();
    if law.slope != 0.0 {
        let term = if law.origin == 0.0 {
            variable.to_string()
        } else {
            format!(
                "\\big({} - {}\\big)",
                variable,
                fmt_sig(law.origin, digits)
            )
        };
        push_term(&mut out, law.slope, &term, digits);
    }
    if law.intercept != 0.0 || out.is_empty() {
        push_term(&mut out, law.intercept, "", digits);
    }
    out
}
