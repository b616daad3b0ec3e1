//! The fixed operator table.
//!
//! Operators live in a compile-time map keyed by their display symbol. Stack entries hold
//! `&'static Operation` references into this map, so a pushed operator is the registry's
//! own definition rather than a copy.

use phf::{Map, phf_map};
use std::f64::consts;

use crate::{CalcError, binary, unary};

/// Type alias for a function that operates on one f64 and returns an f64.
pub type UnaryHandler = fn(f64) -> f64;
/// Type alias for a function that operates on two f64s, topmost operand first.
pub type BinaryHandler = fn(f64, f64) -> f64;
pub type UnaryCheck = fn(f64) -> Option<CalcError>;
pub type BinaryCheck = fn(f64, f64) -> Option<CalcError>;

/// Precedence of anything that is not a binary operator. Such terms never need parentheses.
pub const MAX_PRECEDENCE: u8 = u8::MAX;

#[derive(Debug)]
pub enum Operation {
    Constant {
        symbol: &'static str,
        value: f64,
    },
    Unary {
        symbol: &'static str,
        apply: UnaryHandler,
        validate: Option<UnaryCheck>,
    },
    Binary {
        symbol: &'static str,
        apply: BinaryHandler,
        precedence: u8,
        validate: Option<BinaryCheck>,
    },
}

impl Operation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Constant { symbol, .. }
            | Operation::Unary { symbol, .. }
            | Operation::Binary { symbol, .. } => symbol,
        }
    }

    pub fn precedence(&self) -> u8 {
        match self {
            Operation::Binary { precedence, .. } => *precedence,
            _ => MAX_PRECEDENCE,
        }
    }
}

static KNOWN_OPS: Map<&'static str, Operation> = phf_map! {
    "×" => Operation::Binary { symbol: "×", apply: binary::multiply, precedence: 2, validate: None },
    "÷" => Operation::Binary { symbol: "÷", apply: binary::divide, precedence: 2, validate: Some(binary::validate_divisor) },
    "+" => Operation::Binary { symbol: "+", apply: binary::add, precedence: 1, validate: None },
    "−" => Operation::Binary { symbol: "−", apply: binary::subtract, precedence: 1, validate: None },
    "√" => Operation::Unary { symbol: "√", apply: f64::sqrt, validate: Some(unary::validate_root) },
    "sin" => Operation::Unary { symbol: "sin", apply: f64::sin, validate: None },
    "cos" => Operation::Unary { symbol: "cos", apply: f64::cos, validate: None },
    "±" => Operation::Unary { symbol: "±", apply: unary::negate, validate: None },
    "π" => Operation::Constant { symbol: "π", value: consts::PI },
};

/// Read-only handle on the operator table, owned by each brain.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRegistry {
    ops: &'static Map<&'static str, Operation>,
}

impl OperatorRegistry {
    pub fn standard() -> Self {
        OperatorRegistry { ops: &KNOWN_OPS }
    }

    pub fn lookup(&self, symbol: &str) -> Option<&'static Operation> {
        self.ops.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.ops.contains_key(symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> {
        self.ops.keys().copied()
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_key_their_own_definition() {
        let registry = OperatorRegistry::standard();
        for symbol in registry.symbols() {
            assert_eq!(registry.lookup(symbol).map(Operation::symbol), Some(symbol));
        }
        assert_eq!(registry.symbols().count(), 9);
    }

    #[test]
    fn lookup_returns_the_same_definition() {
        let registry = OperatorRegistry::standard();
        let first = registry.lookup("÷").unwrap();
        let second = registry.lookup("÷").unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(registry.lookup("/").is_none());
        assert!(registry.contains("÷"));
        assert!(!registry.contains("/"));
    }

    #[test]
    fn only_binary_operators_bind_weaker_than_max() {
        let registry = OperatorRegistry::standard();
        assert_eq!(registry.lookup("×").unwrap().precedence(), 2);
        assert_eq!(registry.lookup("−").unwrap().precedence(), 1);
        assert_eq!(registry.lookup("√").unwrap().precedence(), MAX_PRECEDENCE);
        assert_eq!(registry.lookup("π").unwrap().precedence(), MAX_PRECEDENCE);
    }
}
