use crate::error;
use crate::lang::{Error, Operator};

type Result<T> = std::result::Result<T, Error>;

/// ## Dyadic operation table
///
/// Every operator kind maps to exactly one pure binary function over
/// i64. The mapping is total over the closed `Operator` enum, so new
/// operators cannot appear without a matching operation.

pub struct Operation {}

impl Operation {
    pub fn lookup(operator: &Operator) -> fn(i64, i64) -> Result<i64> {
        use Operator::*;
        match operator {
            Plus => Operation::add,
            Minus => Operation::subtract,
            Multiply => Operation::multiply,
            Divide => Operation::divide,
        }
    }

    pub fn add(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_add(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_sub(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(Overflow)),
        }
    }

    pub fn multiply(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_mul(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(Overflow)),
        }
    }

    pub fn divide(lhs: i64, rhs: i64) -> Result<i64> {
        match lhs.checked_div(rhs) {
            Some(n) => Ok(n),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    // Only i64::MIN / -1 lands here.
                    Err(error!(Overflow))
                }
            }
        }
    }
}
