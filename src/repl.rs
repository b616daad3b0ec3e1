//! Line-based driver: the text stand-in for the calculator keypad.

use log::debug;
use std::io::{self, BufRead, Write};
use thousands::Separable;

use crate::{CalcError, CalculatorBrain, GraphConfig, Grapher};

/// The single memory slot the keypad can store into and recall.
pub const MEMORY_VARIABLE: &str = "M";

/// What the loop should do once a line has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStatus {
    Continue,
    Graph,
    Exit,
}

/// Maps keyboard-friendly spellings onto registry symbols.
fn ascii_alias(token: &str) -> &str {
    match token {
        "*" => "×",
        "/" => "÷",
        "-" => "−",
        "sqrt" => "√",
        "pi" => "π",
        "+-" | "neg" => "±",
        _ => token,
    }
}

/// Processes a single input token against the brain.
pub fn process_token(brain: &mut CalculatorBrain, token: &str) -> Result<(), CalcError> {
    match token {
        "undo" => brain.undo_last_op(),
        "clear" | "c" => brain.clear(),
        MEMORY_VARIABLE => brain.push_variable(MEMORY_VARIABLE),
        "->M" | "→M" => {
            let value = brain.evaluate()?;
            brain.set_variable(MEMORY_VARIABLE, value);
        }
        _ => {
            // Thousands separators are accepted in numerals
            let cleaned: String = token.chars().filter(|c| *c != ',').collect();
            if let Ok(value) = cleaned.parse::<f64>() {
                brain.push_operand(value);
            } else {
                brain.perform_operation(ascii_alias(token))?;
            }
        }
    }
    Ok(())
}

/// Processes one line of input. Everything after `#` is a comment.
///
/// Tokens before a failing one stay on the stack.
pub fn process_line(brain: &mut CalculatorBrain, line: &str) -> Result<LineStatus, CalcError> {
    let input = line.split('#').next().unwrap_or("").trim();
    for token in input.split_whitespace() {
        match token {
            "exit" => return Ok(LineStatus::Exit),
            "graph" => return Ok(LineStatus::Graph),
            _ => process_token(brain, token)?,
        }
    }
    Ok(LineStatus::Continue)
}

/// The result line shown under the history label.
pub fn format_result(brain: &CalculatorBrain) -> String {
    match brain.evaluate() {
        Ok(value) => value.separate_with_commas(),
        Err(e) => format!("Error: {e}"),
    }
}

fn print_graph(brain: &CalculatorBrain) {
    let config = GraphConfig {
        variable: MEMORY_VARIABLE.to_string(),
        ..GraphConfig::default()
    };
    let mut grapher = Grapher::from_program(&brain.program(), config);
    println!("y = {}", grapher.description());
    for (x, y) in grapher.samples().into_iter().step_by(20) {
        match y {
            Some(y) => println!("  {x:>8.3} | {y:.6}"),
            None => println!("  {x:>8.3} | undefined"),
        }
    }
}

pub fn main_app_loop() {
    let mut brain = CalculatorBrain::new();

    println!("Welcome to calculator-brain. Type 'exit' to quit.");
    println!("Operators: × ÷ + − √ sin cos ± π (or * / - sqrt pi +-), M, ->M, undo, clear, graph");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("I/O Error: {e}");
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("I/O Error: {e}");
                continue;
            }
            None => break,
        };

        match process_line(&mut brain, &line) {
            Ok(LineStatus::Exit) => break,
            Ok(LineStatus::Graph) => print_graph(&brain),
            Ok(LineStatus::Continue) => {}
            Err(e) => eprintln!("Error: {e}"),
        }
        debug!("stack: {:?}", brain.history());

        println!("{}", brain.display_text());
        println!("{}", format_result(&brain));
    }
}
