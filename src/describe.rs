use crate::StackEntry;
use crate::ops::{MAX_PRECEDENCE, Operation};

/// Result of describing one expression off the tail of a stack.
struct Parsed<'a> {
    text: Option<String>,
    remaining: &'a [StackEntry],
    precedence: u8,
}

fn parenthesize(text: String, inner: u8, outer: u8) -> String {
    if inner < outer {
        format!("({text})")
    } else {
        text
    }
}

fn describe_one(ops: &[StackEntry]) -> Parsed<'_> {
    let Some((op, remaining)) = ops.split_last() else {
        return Parsed {
            text: None,
            remaining: &[],
            precedence: 0,
        };
    };

    match op {
        StackEntry::Operand(_)
        | StackEntry::Variable(_)
        | StackEntry::Operation(Operation::Constant { .. }) => Parsed {
            text: Some(op.to_string()),
            remaining,
            precedence: MAX_PRECEDENCE,
        },
        StackEntry::Operation(Operation::Unary { symbol, .. }) => {
            let inner = describe_one(remaining);
            let operand = inner.text.unwrap_or_else(|| "?".to_string());
            Parsed {
                text: Some(format!("{symbol}({operand})")),
                remaining: inner.remaining,
                precedence: MAX_PRECEDENCE,
            }
        }
        StackEntry::Operation(Operation::Binary {
            symbol, precedence, ..
        }) => {
            let precedence = *precedence;
            let op1 = describe_one(remaining);
            let Some(operand1) = op1.text else {
                return Parsed {
                    text: Some(format!("?{symbol}?")),
                    remaining: op1.remaining,
                    precedence,
                };
            };
            let operand1 = parenthesize(operand1, op1.precedence, precedence);

            let op2 = describe_one(op1.remaining);
            let Some(operand2) = op2.text else {
                return Parsed {
                    text: Some(format!("?{symbol}{operand1}")),
                    remaining: op2.remaining,
                    precedence,
                };
            };
            let operand2 = parenthesize(operand2, op2.precedence, precedence);

            Parsed {
                text: Some(format!("{operand2}{symbol}{operand1}")),
                remaining: op2.remaining,
                precedence,
            }
        }
    }
}

/// Renders every expression on the stack, oldest first, joined by commas.
/// An empty stack renders as a single space.
pub(crate) fn describe(ops: &[StackEntry]) -> String {
    let mut fragments = Vec::new();
    let mut remaining = ops;
    while !remaining.is_empty() {
        let parsed = describe_one(remaining);
        fragments.extend(parsed.text);
        remaining = parsed.remaining;
    }

    if fragments.is_empty() {
        return " ".to_string();
    }
    fragments.reverse();
    fragments.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::evaluate;
    use crate::ops::OperatorRegistry;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn op(symbol: &str) -> StackEntry {
        StackEntry::Operation(OperatorRegistry::standard().lookup(symbol).unwrap())
    }

    fn stack(input: &str) -> Vec<StackEntry> {
        input
            .split_whitespace()
            .map(|token| match token.parse::<f64>() {
                Ok(value) => StackEntry::Operand(value),
                Err(_) if token == "x" => StackEntry::Variable(token.to_string()),
                Err(_) => op(token),
            })
            .collect()
    }

    #[test]
    fn describing_consumes_what_evaluating_consumes() {
        let variables = HashMap::from([("x".to_string(), 2.0)]);
        for input in [
            "1 2 3 + 4 × 5 √",
            "π x ÷ sin 7 ± 3 4 − 2 ×",
            "x x × 1 + √ 9",
            "2 5 cos 6 2 ÷ − 8",
        ] {
            let ops = stack(input);
            let mut remaining = ops.as_slice();
            let mut expressions = 0;
            while !remaining.is_empty() {
                let (_, evaluated) = evaluate(remaining, &variables).unwrap();
                let described = describe_one(remaining);
                assert!(described.text.is_some());
                assert_eq!(described.remaining, evaluated, "in {input}");
                remaining = evaluated;
                expressions += 1;
            }
            assert_eq!(expressions, describe(&ops).split(',').count(), "in {input}");
        }
    }

    #[test]
    fn starved_operators_show_question_marks() {
        assert_eq!(describe(&[op("+")]), "?+?");
        assert_eq!(describe(&[StackEntry::Operand(3.0), op("+")]), "?+3");
        assert_eq!(describe(&[op("√")]), "√(?)");
    }

    #[test]
    fn right_operand_of_lower_precedence_is_wrapped() {
        // 2 3 4 + ×
        let ops = vec![
            StackEntry::Operand(2.0),
            StackEntry::Operand(3.0),
            StackEntry::Operand(4.0),
            op("+"),
            op("×"),
        ];
        assert_eq!(describe(&ops), "2×(3+4)");
    }

    #[test]
    fn equal_precedence_is_not_wrapped() {
        // 3 4 2 − −
        let ops = vec![
            StackEntry::Operand(3.0),
            StackEntry::Operand(4.0),
            StackEntry::Operand(2.0),
            op("−"),
            op("−"),
        ];
        assert_eq!(describe(&ops), "3−4−2");
    }

    #[test]
    fn separate_expressions_are_comma_joined_oldest_first() {
        let ops = vec![
            StackEntry::Operand(1.0),
            StackEntry::Variable("x".to_string()),
            op("π"),
            op("cos"),
        ];
        assert_eq!(describe(&ops), "1,x,cos(π)");
    }
}
