//! Factor-label record of one conversion.
//!
//! Every conversion is written as a chain of factors, e.g.
//! `4.000 g H2 × (1 mol H2 / 2.016 g H2) × (2 mol H2O / 2 mol H2) × (18.015 g H2O / 1 mol H2O) = 35.744 g H2O`.
//! The chain keeps the exact values used in the arithmetic; `decimals` only affects rendering.
//! Units met both above and below the line are reported by `cancelled_units`.
use serde::Serialize;
use std::fmt;

/// a number with its unit, e.g. 2.016 "g H2"
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Term {
    pub value: f64,
    pub unit: String,
    /// digits after the decimal point when rendered
    pub decimals: usize,
}

impl Term {
    pub fn new(value: f64, unit: &str, decimals: usize) -> Self {
        Self {
            value,
            unit: unit.to_string(),
            decimals,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*} {}", self.decimals, self.value, self.unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    Start,
    Multiply,
    Divide,
    Equals,
}

impl Operator {
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Start => "",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Equals => "=",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Factor {
    Term(Term),
    Fraction { numerator: Term, denominator: Term },
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Factor::Term(term) => write!(f, "{}", term),
            Factor::Fraction {
                numerator,
                denominator,
            } => write!(f, "({} / {})", numerator, denominator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep {
    pub operator: Operator,
    pub factor: Factor,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversionTrace {
    pub steps: Vec<TraceStep>,
}

impl ConversionTrace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    fn push(&mut self, operator: Operator, factor: Factor) {
        // the first factor of a chain has no operator in front of it
        let operator = if self.steps.is_empty() {
            Operator::Start
        } else {
            operator
        };
        self.steps.push(TraceStep { operator, factor });
    }

    pub fn multiply(&mut self, term: Term) {
        self.push(Operator::Multiply, Factor::Term(term));
    }

    pub fn divide(&mut self, term: Term) {
        self.push(Operator::Divide, Factor::Term(term));
    }

    pub fn multiply_fraction(&mut self, numerator: Term, denominator: Term) {
        self.push(
            Operator::Multiply,
            Factor::Fraction {
                numerator,
                denominator,
            },
        );
    }

    pub fn equals(&mut self, term: Term) {
        self.push(Operator::Equals, Factor::Term(term));
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// the term after the last "=" sign
    pub fn result(&self) -> Option<&Term> {
        self.steps.iter().rev().find_map(|step| match (&step.operator, &step.factor) {
            (Operator::Equals, Factor::Term(term)) => Some(term),
            _ => None,
        })
    }

    /// Units standing both in a numerator and in a denominator of the chain, in the order they
    /// first appear below the line. The final result is not part of the chain.
    pub fn cancelled_units(&self) -> Vec<String> {
        let last_equals = self
            .steps
            .iter()
            .rposition(|step| step.operator == Operator::Equals)
            .unwrap_or(self.steps.len());
        let mut above: Vec<&str> = Vec::new();
        let mut below: Vec<&str> = Vec::new();
        for step in &self.steps[..last_equals] {
            let divided = step.operator == Operator::Divide;
            match &step.factor {
                Factor::Term(term) => {
                    if divided {
                        below.push(&term.unit);
                    } else {
                        above.push(&term.unit);
                    }
                }
                Factor::Fraction {
                    numerator,
                    denominator,
                } => {
                    if divided {
                        above.push(&denominator.unit);
                        below.push(&numerator.unit);
                    } else {
                        above.push(&numerator.unit);
                        below.push(&denominator.unit);
                    }
                }
            }
        }
        let mut cancelled: Vec<String> = Vec::new();
        for unit in below {
            if above.contains(&unit) && !cancelled.iter().any(|c| c == unit) {
                cancelled.push(unit.to_string());
            }
        }
        cancelled
    }
}

impl fmt::Display for ConversionTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            match step.operator {
                Operator::Start => write!(f, "{}", step.factor)?,
                op => write!(f, " {} {}", op.symbol(), step.factor)?,
            }
        }
        Ok(())
    }
}
