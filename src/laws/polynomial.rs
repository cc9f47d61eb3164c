use std::ops::{Add, Mul, Neg, Sub};

/// Polynomial in the span variable `y`, coefficients in ascending powers.
///
/// Every integrand assembled by this crate is a product of linear laws, so
/// the antiderivative is exact and can be shown term by term.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<f64>) -> Self {
        let mut poly = Self { coeffs };
        poly.trim();
        poly
    }

    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// `slope * y + intercept`
    pub fn linear(slope: f64, intercept: f64) -> Self {
        Self::new(vec![intercept, slope])
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// Coefficient of `y^power`, zero past the degree.
    pub fn coefficient(&self, power: usize) -> f64 {
        self.coeffs.get(power).copied().unwrap_or(0.0)
    }

    /// `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn evaluate(&self, y: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |acc, &c| acc * y + c)
    }

    /// Antiderivative with zero constant of integration.
    pub fn antiderivative(&self) -> Polynomial {
        if self.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.0);
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(power, &c)| c / (power + 1) as f64),
        );
        Polynomial::new(coeffs)
    }

    pub fn derivative(&self) -> Polynomial {
        Polynomial::new(
            self.coeffs
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, &c)| c * power as f64)
                .collect(),
        )
    }

    /// Definite integral over `[lower, upper]`.
    pub fn integrate(&self, lower: f64, upper: f64) -> f64 {
        let primitive = self.antiderivative();
        primitive.evaluate(upper) - primitive.evaluate(lower)
    }

    pub fn scale(&self, factor: f64) -> Polynomial {
        Polynomial::new(self.coeffs.iter().map(|c| c * factor).collect())
    }

    fn trim(&mut self) {
        while self.coeffs.last() == Some(&0.0) {
            self.coeffs.pop();
        }
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new(
            (0..len)
                .map(|i| self.coefficient(i) + rhs.coefficient(i))
                .collect(),
        )
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Polynomial {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new(
            (0..len)
                .map(|i| self.coefficient(i) - rhs.coefficient(i))
                .collect(),
        )
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Polynomial {
        if self.is_zero() || rhs.is_zero() {
            return Polynomial::zero();
        }
        let mut coeffs = vec![0.0; self.coeffs.len() + rhs.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Polynomial::new(coeffs)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Polynomial {
        &self + &rhs
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Polynomial) -> Polynomial {
        &self - &rhs
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Polynomial {
        &self * &rhs
    }
}

impl Mul<f64> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.scale(rhs)
    }
}

impl Mul<f64> for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: f64) -> Polynomial {
        self.scale(rhs)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.scale(-1.0)
    }
}

impl std::iter::Product for Polynomial {
    fn product<I: Iterator<Item = Polynomial>>(iter: I) -> Self {
        iter.fold(Polynomial::constant(1.0), |acc, p| &acc * &p)
    }
}
