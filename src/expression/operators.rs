//! Operator overloading for boolean expressions

use super::BoolExpr;
use std::ops::{Add, BitXor, Mul, Not};

/// Logical AND operator for references: `&a * &b`
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let result = &a * &b;  // Equivalent to a.and(&b)
/// ```
impl Mul for &BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: &BoolExpr) -> BoolExpr {
        self.and(rhs)
    }
}

/// Logical AND operator: `a * b` (delegates to the reference version)
impl Mul for BoolExpr {
    type Output = BoolExpr;

    fn mul(self, rhs: BoolExpr) -> BoolExpr {
        self.and(&rhs)
    }
}

/// Logical OR operator for references: `&a + &b`
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let result = &a + &b;  // Equivalent to a.or(&b)
/// ```
impl Add for &BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: &BoolExpr) -> BoolExpr {
        self.or(rhs)
    }
}

/// Logical OR operator: `a + b` (delegates to the reference version)
impl Add for BoolExpr {
    type Output = BoolExpr;

    fn add(self, rhs: BoolExpr) -> BoolExpr {
        self.or(&rhs)
    }
}

/// Logical XOR operator for references: `&a ^ &b`
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let b = BoolExpr::variable("b");
/// let result = &a ^ &b;  // Equivalent to a.xor(&b)
/// ```
impl BitXor for &BoolExpr {
    type Output = BoolExpr;

    fn bitxor(self, rhs: &BoolExpr) -> BoolExpr {
        self.xor(rhs)
    }
}

/// Logical XOR operator: `a ^ b` (delegates to the reference version)
impl BitXor for BoolExpr {
    type Output = BoolExpr;

    fn bitxor(self, rhs: BoolExpr) -> BoolExpr {
        self.xor(&rhs)
    }
}

/// Logical NOT operator for references: `!&a`
///
/// # Examples
///
/// ```
/// use qmc_logic::BoolExpr;
///
/// let a = BoolExpr::variable("a");
/// let result = !&a;  // Equivalent to a.not()
/// ```
impl Not for &BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(self)
    }
}

/// Logical NOT operator: `!a` (delegates to the reference version)
impl Not for BoolExpr {
    type Output = BoolExpr;

    fn not(self) -> BoolExpr {
        BoolExpr::not(&self)
    }
}
