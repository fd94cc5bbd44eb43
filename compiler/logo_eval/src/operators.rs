//! Binary operator semantics.
//!
//! One entry point, [`evaluate_binary`], shared by infix expressions and the
//! prefix primitives registered under the operator symbols. The value set is
//! closed, so dispatch is a match on the operand pair. Combinations without
//! a rule fail with `TypeMismatch` instead of being coerced.
//!
//! | Operands | `+` | `-` `*` | `/` | ordering | `=` |
//! |---|---|---|---|---|---|
//! | int, int | checked | checked | floor division | yes | yes |
//! | int/float mix | float | float | float | yes | by value |
//! | string, string | concat | - | - | lexicographic | yes |
//! | list, list | concat | - | - | - | element-wise |

use std::cmp::Ordering;

use crate::errors::{ProgramError, ProgramResult};
use crate::node::InfixOp;
use crate::value::Value;

/// Apply `op` to two evaluated operands.
pub fn evaluate_binary(op: InfixOp, left: &Value, right: &Value) -> ProgramResult<Value> {
    match op {
        InfixOp::Eq => Ok(Value::from_bool(values_equal(left, right))),
        InfixOp::Lt | InfixOp::LtEq | InfixOp::Gt | InfixOp::GtEq => compare(op, left, right),
        InfixOp::Add | InfixOp::Sub | InfixOp::Mul | InfixOp::Div => arithmetic(op, left, right),
    }
}

/// Equality used by `=`: numbers compare by value across int/float.
pub fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            left.as_number() == right.as_number()
        }
        (Value::List(a), Value::List(b)) => {
            a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| values_equal(x, y))
        }
        _ => left == right,
    }
}

fn arithmetic(op: InfixOp, left: &Value, right: &Value) -> ProgramResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => int_arithmetic(op, *a, *b),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
            match (left.as_number(), right.as_number()) {
                (Some(a), Some(b)) => float_arithmetic(op, a, b),
                _ => Err(mismatch(op, left, right)),
            }
        }
        (Value::Str(a), Value::Str(b)) if op == InfixOp::Add => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::string(joined))
        }
        (Value::List(a), Value::List(b)) if op == InfixOp::Add => {
            Ok(Value::list(a.iter().chain(b.iter()).cloned().collect()))
        }
        _ => Err(mismatch(op, left, right)),
    }
}

fn int_arithmetic(op: InfixOp, a: i64, b: i64) -> ProgramResult<Value> {
    let result = match op {
        InfixOp::Add => a.checked_add(b).ok_or(ProgramError::IntegerOverflow("addition"))?,
        InfixOp::Sub => a
            .checked_sub(b)
            .ok_or(ProgramError::IntegerOverflow("subtraction"))?,
        InfixOp::Mul => a
            .checked_mul(b)
            .ok_or(ProgramError::IntegerOverflow("multiplication"))?,
        InfixOp::Div => {
            if b == 0 {
                return Err(ProgramError::DivisionByZero);
            }
            floor_div(a, b).ok_or(ProgramError::IntegerOverflow("division"))?
        }
        _ => unreachable!("comparison operators are dispatched before arithmetic"),
    };
    Ok(Value::Int(result))
}

/// Integer division rounding toward negative infinity (`-7 / 2 = -4`).
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let quotient = a.checked_div(b)?;
    let remainder = a.checked_rem(b)?;
    if remainder != 0 && ((remainder < 0) != (b < 0)) {
        quotient.checked_sub(1)
    } else {
        Some(quotient)
    }
}

fn float_arithmetic(op: InfixOp, a: f64, b: f64) -> ProgramResult<Value> {
    let result = match op {
        InfixOp::Add => a + b,
        InfixOp::Sub => a - b,
        InfixOp::Mul => a * b,
        InfixOp::Div => {
            if b == 0.0 {
                return Err(ProgramError::DivisionByZero);
            }
            a / b
        }
        _ => unreachable!("comparison operators are dispatched before arithmetic"),
    };
    Ok(Value::Float(result))
}

fn compare(op: InfixOp, left: &Value, right: &Value) -> ProgramResult<Value> {
    let ordering = match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => left
            .as_number()
            .zip(right.as_number())
            .and_then(|(a, b)| a.partial_cmp(&b)),
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => return Err(mismatch(op, left, right)),
    };

    // NaN compares false with everything.
    let holds = ordering.is_some_and(|ordering| match op {
        InfixOp::Lt => ordering == Ordering::Less,
        InfixOp::LtEq => ordering != Ordering::Greater,
        InfixOp::Gt => ordering == Ordering::Greater,
        InfixOp::GtEq => ordering != Ordering::Less,
        _ => false,
    });
    Ok(Value::from_bool(holds))
}

fn mismatch(op: InfixOp, left: &Value, right: &Value) -> ProgramError {
    ProgramError::TypeMismatch {
        op: op.as_symbol(),
        left: left.type_name(),
        right: right.type_name(),
    }
}
