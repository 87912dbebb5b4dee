use crate::format::to_plaintext;
use std::fmt;

/// A polynomial stored as its coefficients, index = power of x.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

/// `x^power`, falling back to `powf` past the `i32` range of `powi`.
fn power_of(x: f64, power: usize) -> f64 {
    match i32::try_from(power) {
        Ok(power) => x.powi(power),
        Err(_) => x.powf(power as f64),
    }
}

impl Polynomial {
    pub fn new(coefficients: Vec<f64>) -> Self {
        // An empty list is the zero polynomial.
        if coefficients.is_empty() {
            return Polynomial { coefficients: vec![0.0] };
        }
        Polynomial { coefficients }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Direct summation of `c[i] * x^i`. No overflow guard: huge inputs give
    /// `inf` or `NaN` the way `f64` arithmetic does.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, coefficient)| coefficient * power_of(x, power))
            .sum()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_plaintext(&self.coefficients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_term_at_zero() {
        for coefficients in [
            vec![0.0],
            vec![7.5],
            vec![-2.0, 1.0],
            vec![3.0, 0.0, -4.0, 9.0],
            vec![1e-3, 2.0, 0.0, 0.0, 0.5],
        ] {
            let expected = coefficients[0];
            let polynomial = Polynomial::new(coefficients);
            assert_eq!(polynomial.evaluate(0.0), expected);
        }
    }

    #[test]
    fn evaluates_by_summation() {
        // 1 - 2x + 3x^2
        let polynomial = Polynomial::new(vec![1.0, -2.0, 3.0]);
        assert_relative_eq!(polynomial.evaluate(2.0), 9.0);
        assert_relative_eq!(polynomial.evaluate(-1.5), 1.0 + 3.0 + 6.75);
        assert_relative_eq!(polynomial.evaluate(0.1), 1.0 - 0.2 + 0.03, epsilon = 1e-12);
    }

    #[test]
    fn large_inputs_follow_float_semantics() {
        let polynomial = Polynomial::new(vec![0.0, 0.0, 1.0]);
        assert!(polynomial.evaluate(1e200).is_infinite());
    }

    #[test]
    fn powers_beyond_i32() {
        assert_eq!(power_of(2.0, 3), 8.0);
        assert_eq!(power_of(1.0, usize::MAX), 1.0);
        assert_eq!(power_of(0.5, i32::MAX as usize + 1), 0.0);
        assert!(power_of(2.0, i32::MAX as usize + 1).is_infinite());
    }

    #[test]
    fn degree_and_empty_list() {
        assert_eq!(Polynomial::new(vec![1.0, 2.0, 3.0]).degree(), 2);
        let zero = Polynomial::new(Vec::new());
        assert_eq!(zero.degree(), 0);
        assert_eq!(zero.coefficients(), &[0.0]);
    }

    #[test]
    fn displays_as_expression() {
        let polynomial = Polynomial::new(vec![2.0, 0.0, 3.0]);
        assert_eq!(polynomial.to_string(), "2 + 3x^2");
    }
}
