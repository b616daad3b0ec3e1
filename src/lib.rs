//! Expression engine for an RPN calculator.
//!
//! A [`CalculatorBrain`] records operands, variables, constants and operators in the order
//! they were entered. It can evaluate that stack, print it as infix text, and hand it to
//! another brain as a plain token list.

use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

mod binary;
mod describe;
mod error;
mod evaluate;
pub mod graph;
pub mod ops;
mod program;
pub mod repl;
mod unary;

pub use error::{CalcError, Result};
pub use graph::{GraphConfig, GraphStats, Grapher};
pub use ops::{Operation, OperatorRegistry};
pub use program::Program;

/// One pushed unit of the stack.
#[derive(Debug, Clone)]
pub enum StackEntry {
    Operand(f64),
    /// Resolved against the brain's variable values at evaluation time.
    Variable(String),
    /// A constant or operator, pointing at its registry definition.
    Operation(&'static Operation),
}

impl PartialEq for StackEntry {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StackEntry::Operand(a), StackEntry::Operand(b)) => a == b,
            (StackEntry::Variable(a), StackEntry::Variable(b)) => a == b,
            (StackEntry::Operation(a), StackEntry::Operation(b)) => std::ptr::eq(*a, *b),
            _ => false,
        }
    }
}

impl fmt::Display for StackEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StackEntry::Operand(value) => f.write_str(&format_operand(*value)),
            StackEntry::Variable(name) => f.write_str(name),
            StackEntry::Operation(op) => f.write_str(op.symbol()),
        }
    }
}

/// Shortest decimal text that parses back to exactly `value` (`3` for 3.0, `0.1` for 0.1).
///
/// Magnitudes of at least 1e16 or below 1e-6 use exponent notation (`1e300`).
pub fn format_operand(value: f64) -> String {
    let magnitude = value.abs();
    if value.is_finite() && value != 0.0 && !(1e-6..1e16).contains(&magnitude) {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, Default)]
pub struct CalculatorBrain {
    op_stack: Vec<StackEntry>,
    known_ops: OperatorRegistry,
    variable_values: HashMap<String, f64>,
}

impl CalculatorBrain {
    pub fn new() -> Self {
        CalculatorBrain {
            op_stack: Vec::new(),
            known_ops: OperatorRegistry::standard(),
            variable_values: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.known_ops
    }

    pub fn entries(&self) -> &[StackEntry] {
        &self.op_stack
    }

    pub fn len(&self) -> usize {
        self.op_stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.op_stack.is_empty()
    }

    // --- Stack mutators ---

    pub fn push_operand(&mut self, value: f64) {
        debug!("push operand {value}");
        self.op_stack.push(StackEntry::Operand(value));
    }

    /// Pushes a reference to a variable. Unbound names only fail once evaluated.
    pub fn push_variable(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("push variable {name}");
        self.op_stack.push(StackEntry::Variable(name));
    }

    /// Pushes the registered operator or constant named `symbol`.
    pub fn perform_operation(&mut self, symbol: &str) -> Result<()> {
        let op = self
            .known_ops
            .lookup(symbol)
            .ok_or_else(|| CalcError::UnknownOperation(symbol.to_string()))?;
        debug!("push operation {symbol}");
        self.op_stack.push(StackEntry::Operation(op));
        Ok(())
    }

    /// Removes the most recently pushed entry. Does nothing on an empty stack.
    pub fn undo_last_op(&mut self) {
        if let Some(entry) = self.op_stack.pop() {
            debug!("undo {entry}");
        }
    }

    /// Empties the stack, keeping variable values.
    pub fn clear(&mut self) {
        self.op_stack.clear();
    }

    /// Empties the stack and forgets every variable value.
    pub fn reset(&mut self) {
        self.op_stack.clear();
        self.variable_values.clear();
    }

    // --- Variables ---

    pub fn variables(&self) -> &HashMap<String, f64> {
        &self.variable_values
    }

    pub fn variables_mut(&mut self) -> &mut HashMap<String, f64> {
        &mut self.variable_values
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: f64) {
        self.variable_values.insert(name.into(), value);
    }

    pub fn variable(&self, name: &str) -> Option<f64> {
        self.variable_values.get(name).copied()
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<f64> {
        self.variable_values.remove(name)
    }

    // --- Queries ---

    /// Value of the most recent expression on the stack.
    pub fn evaluate(&self) -> Result<f64> {
        evaluate::evaluate(&self.op_stack, &self.variable_values).map(|(result, _)| result)
    }

    /// True when the whole stack is exactly one expression that evaluates without error.
    pub fn is_complete(&self) -> bool {
        matches!(
            evaluate::evaluate(&self.op_stack, &self.variable_values),
            Ok((_, remaining)) if remaining.is_empty()
        )
    }

    /// Infix rendering of every expression on the stack, oldest first, comma separated.
    pub fn description(&self) -> String {
        describe::describe(&self.op_stack)
    }

    /// Only the newest expression of [`description`](Self::description).
    pub fn latest_description(&self) -> String {
        let description = self.description();
        match description.rsplit_once(',') {
            Some((_, latest)) => latest.to_string(),
            None => description,
        }
    }

    /// Description suffixed with `" ="` once the stack is complete.
    pub fn display_text(&self) -> String {
        if self.is_complete() {
            format!("{} =", self.description())
        } else {
            self.description()
        }
    }

    /// Display symbol of every entry in push order.
    pub fn history(&self) -> Vec<String> {
        self.op_stack.iter().map(StackEntry::to_string).collect()
    }

    // --- Serialization bridge ---

    pub fn program(&self) -> Program {
        Program::from_entries(&self.op_stack)
    }

    /// Replaces the stack with `program`. Tokens that are neither registered symbols nor
    /// decimal numbers are dropped.
    pub fn load_program(&mut self, program: &Program) {
        self.load_program_with_variables(program, &[]);
    }

    /// Like [`load_program`](Self::load_program), but tokens equal to one of `variables`
    /// become variable references instead of being dropped.
    pub fn load_program_with_variables(&mut self, program: &Program, variables: &[&str]) {
        let mut entries = Vec::with_capacity(program.len());
        for token in program.tokens() {
            if let Some(op) = self.known_ops.lookup(token) {
                entries.push(StackEntry::Operation(op));
            } else if let Ok(value) = token.parse::<f64>() {
                entries.push(StackEntry::Operand(value));
            } else if variables.contains(&token.as_str()) {
                entries.push(StackEntry::Variable(token.clone()));
            } else {
                warn!("dropping unrecognized token '{token}'");
            }
        }
        debug!("loaded {} of {} tokens", entries.len(), program.len());
        self.op_stack = entries;
    }

    pub fn from_program(program: &Program) -> Self {
        let mut brain = Self::new();
        brain.load_program(program);
        brain
    }
}

impl fmt::Display for CalculatorBrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
