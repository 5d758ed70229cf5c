//! Clause parsing and evaluation.
//!
//! A [`Clause`] is one `field operator value` comparison, such as
//! `minplayers >= 2` or `name ~= go`. Parsing is a single left-to-right scan:
//! everything before the first operator character is the field, the longest
//! operator token is taken next, and the rest is the operand.

use crate::error::{Result, SeekerError};
use crate::field::{Field, ValueKind};
use crate::op::Op;
use crate::record::BoardGame;
use crate::value::{fold_text, Number, Value};

/// A single parsed filter predicate.
///
/// # Example
///
/// ```
/// use gameplan_seeker::{BoardGame, Clause, Field, Op};
///
/// let clause = Clause::parse("Min Players >= 3").unwrap();
/// assert_eq!(clause.field, Field::MinPlayers);
/// assert_eq!(clause.op, Op::Gte);
///
/// assert!(clause.matches(&BoardGame::new("Catan").with_players(3, 4)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    /// The field to compare.
    pub field: Field,
    /// The comparison operator.
    pub op: Op,
    /// The value to compare against.
    pub value: ClauseValue,
}

/// Operand of a clause, already converted to the field's value kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Folded text: lowercase, whitespace removed.
    Text(String),
    /// Numeric operand.
    Number(Number),
}

impl Clause {
    /// Parses one clause.
    ///
    /// # Errors
    ///
    /// - [`SeekerError::Syntax`] when there is no field, no recognised
    ///   operator, or no operand
    /// - [`SeekerError::UnknownField`] when the field does not resolve
    /// - [`SeekerError::UnsupportedOperator`] for `~=` on a numeric field
    /// - [`SeekerError::TypeMismatch`] when a numeric field gets a
    ///   non-numeric operand
    pub fn parse(text: &str) -> Result<Clause> {
        let clause = text.trim();
        if clause.is_empty() {
            return Err(SeekerError::syntax(text, "empty clause"));
        }

        let op_start = clause
            .find(Op::starts_token)
            .ok_or_else(|| SeekerError::syntax(clause, "missing operator"))?;
        let field_text = &clause[..op_start];
        if field_text.trim().is_empty() {
            return Err(SeekerError::syntax(clause, "missing field"));
        }

        let (op, op_len) = Op::parse_prefix(&clause[op_start..])
            .ok_or_else(|| SeekerError::syntax(clause, "unrecognized operator"))?;
        let operand = clause[op_start + op_len..].trim();
        if operand.is_empty() {
            return Err(SeekerError::syntax(clause, "missing value"));
        }

        let field = Field::resolve(field_text)?;
        let value = match field.kind() {
            ValueKind::Text => ClauseValue::Text(fold_text(operand)),
            kind => {
                if !op.is_number_op() {
                    return Err(SeekerError::UnsupportedOperator {
                        op,
                        field: field.as_str(),
                        kind: kind.as_str(),
                    });
                }
                ClauseValue::Number(parse_number(field, operand)?)
            }
        };

        let clause = Clause { field, op, value };
        log::trace!("parsed clause {clause}");
        Ok(clause)
    }

    /// Evaluates this clause against a game.
    pub fn matches(&self, game: &BoardGame) -> bool {
        match (&self.value, self.field.value(game)) {
            (ClauseValue::Text(pattern), Value::Text(s)) => self.match_text(s, pattern),
            (ClauseValue::Number(clause_num), Value::Number(field_num)) => {
                self.match_number(field_num, *clause_num)
            }
            // Kinds are checked at parse time
            _ => false,
        }
    }

    fn match_text(&self, field: &str, pattern: &str) -> bool {
        let folded = fold_text(field);
        match self.op {
            Op::Contains => folded.contains(pattern),
            op => op.eval_ordering(folded.as_str().cmp(pattern)),
        }
    }

    fn match_number(&self, field: Number, clause: Number) -> bool {
        match field.compare(clause) {
            Some(ordering) => self.op.eval_ordering(ordering),
            None => false, // NaN comparison
        }
    }
}

/// Converts a numeric operand, integer first, then real.
fn parse_number(field: Field, operand: &str) -> Result<Number> {
    let compact: String = operand.chars().filter(|c| !c.is_whitespace()).collect();
    if let Ok(n) = compact.parse::<i64>() {
        return Ok(Number::Int(n));
    }
    match compact.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Number::Real(n)),
        _ => Err(SeekerError::TypeMismatch {
            field: field.as_str(),
            expected: field.kind().as_str(),
            value: operand.to_string(),
        }),
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            ClauseValue::Text(s) => write!(f, "{}{}{}", self.field, self.op, s),
            ClauseValue::Number(Number::Int(n)) => write!(f, "{}{}{}", self.field, self.op, n),
            ClauseValue::Number(Number::Real(n)) => write!(f, "{}{}{}", self.field, self.op, n),
        }
    }
}
