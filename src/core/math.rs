//! # Math
//!
//! The numeric kernels behind the engine: binary operators and the unary
//! function families. Nothing here touches operand text; callers parse and
//! format around these.
//!
//! Every kernel returns `None` when the result is not a finite number, which
//! the engine turns into the `"Error"` display.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::core::state::{AngleMode, Operation};

/// Largest n for which n! still fits in an `f64`.
pub const MAX_FACTORIAL_INPUT: f64 = 170.0;

impl Operation {
    /// Applies the operator to `(previous, current)`.
    pub fn apply(self, previous: f64, current: f64) -> Option<f64> {
        let result = match self {
            Operation::Add => previous + current,
            Operation::Sub => previous - current,
            Operation::Mul => previous * current,
            Operation::Div => {
                if current == 0.0 {
                    return None;
                }
                previous / current
            }
            Operation::Pow => previous.powf(current),
            Operation::Root => previous.powf(1.0 / current),
            // `%` is the truncated remainder: the sign follows `previous`.
            Operation::Mod => previous % current,
        };
        finite(result)
    }
}

/// Single-operand functions, trig and scientific families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sqrt,
    Square,
    Cube,
    Log10,
    Pow10,
    Ln,
    Exp,
    Reciprocal,
    Abs,
    Factorial,
    Percentage,
}

impl UnaryFn {
    pub fn is_trig(self) -> bool {
        matches!(
            self,
            UnaryFn::Sin | UnaryFn::Cos | UnaryFn::Tan | UnaryFn::Asin | UnaryFn::Acos | UnaryFn::Atan
        )
    }

    /// Evaluates the function at `x`.
    ///
    /// Forward trig reads `x` in `angle_mode` units. Inverse trig always
    /// answers in radians.
    pub fn evaluate(self, x: f64, angle_mode: AngleMode) -> Option<f64> {
        let forward = |x: f64| match angle_mode {
            AngleMode::Deg => x * (PI / 180.0),
            AngleMode::Rad => x,
        };

        let result = match self {
            UnaryFn::Sin => forward(x).sin(),
            UnaryFn::Cos => forward(x).cos(),
            UnaryFn::Tan => forward(x).tan(),
            UnaryFn::Asin => x.asin(),
            UnaryFn::Acos => x.acos(),
            UnaryFn::Atan => x.atan(),
            UnaryFn::Sqrt => x.sqrt(),
            UnaryFn::Square => x.powi(2),
            UnaryFn::Cube => x.powi(3),
            UnaryFn::Log10 => x.log10(),
            UnaryFn::Pow10 => 10f64.powf(x),
            UnaryFn::Ln => x.ln(),
            UnaryFn::Exp => x.exp(),
            UnaryFn::Reciprocal => 1.0 / x,
            UnaryFn::Abs => x.abs(),
            UnaryFn::Factorial => return factorial(x),
            UnaryFn::Percentage => x / 100.0,
        };
        finite(result)
    }
}

/// n! for a non-negative integer n ≤ 170; `None` for anything else.
pub fn factorial(n: f64) -> Option<f64> {
    if n < 0.0 || n.fract() != 0.0 || n > MAX_FACTORIAL_INPUT {
        return None;
    }
    let mut result = 1.0;
    let mut i = 2.0;
    while i <= n {
        result *= i;
        i += 1.0;
    }
    Some(result)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn test_operation_table() {
        assert_eq!(Operation::Add.apply(2.0, 3.0), Some(5.0));
        assert_eq!(Operation::Sub.apply(2.0, 3.0), Some(-1.0));
        assert_eq!(Operation::Mul.apply(2.0, 3.0), Some(6.0));
        assert_eq!(Operation::Div.apply(3.0, 2.0), Some(1.5));
        assert_eq!(Operation::Pow.apply(2.0, 10.0), Some(1024.0));
        assert!(close(Operation::Root.apply(27.0, 3.0), 3.0));
        assert_eq!(Operation::Mod.apply(7.0, 3.0), Some(1.0));
    }

    #[test]
    fn test_mod_sign_follows_dividend() {
        assert_eq!(Operation::Mod.apply(-7.0, 3.0), Some(-1.0));
        assert_eq!(Operation::Mod.apply(7.0, -3.0), Some(1.0));
    }

    #[test]
    fn test_operations_without_finite_result() {
        assert_eq!(Operation::Div.apply(1.0, 0.0), None);
        assert_eq!(Operation::Div.apply(1.0, -0.0), None);
        assert_eq!(Operation::Mod.apply(1.0, 0.0), None);
        assert_eq!(Operation::Pow.apply(10.0, 400.0), None);
        assert_eq!(Operation::Root.apply(-8.0, 2.0), None);
    }

    #[test]
    fn test_factorial_domain() {
        assert_eq!(factorial(0.0), Some(1.0));
        assert_eq!(factorial(1.0), Some(1.0));
        assert_eq!(factorial(5.0), Some(120.0));
        assert!(factorial(170.0).is_some_and(f64::is_finite));
        assert_eq!(factorial(171.0), None);
        assert_eq!(factorial(-3.0), None);
        assert_eq!(factorial(3.5), None);
    }

    #[test]
    fn test_forward_trig_respects_angle_mode() {
        assert!(close(UnaryFn::Sin.evaluate(90.0, AngleMode::Deg), 1.0));
        assert!(close(UnaryFn::Sin.evaluate(90.0, AngleMode::Rad), 0.8939966636005579));
        assert!(close(UnaryFn::Cos.evaluate(180.0, AngleMode::Deg), -1.0));
    }

    #[test]
    fn test_inverse_trig_ignores_angle_mode() {
        let deg = UnaryFn::Asin.evaluate(1.0, AngleMode::Deg);
        let rad = UnaryFn::Asin.evaluate(1.0, AngleMode::Rad);
        assert_eq!(deg, rad);
        assert!(close(deg, PI / 2.0));
        assert_eq!(UnaryFn::Acos.evaluate(2.0, AngleMode::Deg), None);
    }

    #[test]
    fn test_scientific_family() {
        assert_eq!(UnaryFn::Sqrt.evaluate(16.0, AngleMode::Deg), Some(4.0));
        assert_eq!(UnaryFn::Square.evaluate(-3.0, AngleMode::Deg), Some(9.0));
        assert_eq!(UnaryFn::Cube.evaluate(-2.0, AngleMode::Deg), Some(-8.0));
        assert!(close(UnaryFn::Log10.evaluate(1000.0, AngleMode::Deg), 3.0));
        assert_eq!(UnaryFn::Pow10.evaluate(3.0, AngleMode::Deg), Some(1000.0));
        assert_eq!(UnaryFn::Ln.evaluate(1.0, AngleMode::Deg), Some(0.0));
        assert_eq!(UnaryFn::Exp.evaluate(0.0, AngleMode::Deg), Some(1.0));
        assert_eq!(UnaryFn::Reciprocal.evaluate(4.0, AngleMode::Deg), Some(0.25));
        assert_eq!(UnaryFn::Abs.evaluate(-4.5, AngleMode::Deg), Some(4.5));
        assert_eq!(UnaryFn::Percentage.evaluate(50.0, AngleMode::Deg), Some(0.5));
    }

    #[test]
    fn test_scientific_domain_errors() {
        assert_eq!(UnaryFn::Sqrt.evaluate(-1.0, AngleMode::Deg), None);
        assert_eq!(UnaryFn::Log10.evaluate(0.0, AngleMode::Deg), None);
        assert_eq!(UnaryFn::Ln.evaluate(-1.0, AngleMode::Deg), None);
        assert_eq!(UnaryFn::Reciprocal.evaluate(0.0, AngleMode::Deg), None);
        assert_eq!(UnaryFn::Exp.evaluate(1000.0, AngleMode::Deg), None);
    }
}
