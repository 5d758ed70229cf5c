//! Comparison operators for query clauses.
//!
//! The [`Op`] enum defines the seven operators of the query language. All of
//! them apply to text fields; `~=` (contains) is rejected on numeric fields.

use std::cmp::Ordering;

/// Comparison operator for a query clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `~=`, substring match. Text only.
    Contains,
    /// `>`
    Gt,
    /// `>=`
    Gte,
    /// `<`
    Lt,
    /// `<=`
    Lte,
}

/// Operator tokens, two-character forms first so `<` never shadows `<=`.
const TOKENS: [(&str, Op); 7] = [
    ("==", Op::Eq),
    ("!=", Op::Ne),
    ("~=", Op::Contains),
    (">=", Op::Gte),
    ("<=", Op::Lte),
    (">", Op::Gt),
    ("<", Op::Lt),
];

impl Op {
    /// Returns `true` if this operator is valid for numeric comparisons.
    pub fn is_number_op(self) -> bool {
        !matches!(self, Op::Contains)
    }

    /// Returns `true` if the first character can start an operator token.
    pub(crate) fn starts_token(c: char) -> bool {
        matches!(c, '=' | '!' | '~' | '<' | '>')
    }

    /// Matches the longest operator token at the start of `input`.
    ///
    /// Returns the operator and the number of bytes it spans.
    pub fn parse_prefix(input: &str) -> Option<(Op, usize)> {
        TOKENS
            .iter()
            .find(|(token, _)| input.starts_with(token))
            .map(|(token, op)| (*op, token.len()))
    }

    /// Evaluates a comparison given an ordering result.
    ///
    /// `Contains` is not an ordering operator and always yields `false`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Eq => ordering == Ordering::Equal,
            Op::Ne => ordering != Ordering::Equal,
            Op::Gt => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            Op::Contains => false,
        }
    }

    /// Returns the query-language token for this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::Contains => "~=",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
