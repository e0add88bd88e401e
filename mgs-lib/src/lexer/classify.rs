use super::{
    keywords::{ALL_OPERATORS, ALL_TYPES},
    token::Kind,
};
use lazy_static::lazy_static;
use std::collections::HashSet;

lazy_static! {
    static ref TYPE_SET: HashSet<&'static str> = ALL_TYPES.iter().copied().collect();
    static ref OPERATOR_SET: HashSet<&'static str> = ALL_OPERATORS.iter().copied().collect();
}

pub fn is_type(text: &str) -> bool {
    TYPE_SET.contains(text)
}

pub fn is_operator(text: &str) -> bool {
    OPERATOR_SET.contains(text)
}

/// Classifies a token by exact match against the reserved tables.
///
/// Type keywords are checked first, then operators. Anything else,
/// including the empty string, is a [`Kind::Value`].
pub fn classify(text: &str) -> Kind {
    if is_type(text) {
        Kind::Type
    } else if is_operator(text) {
        Kind::Operator
    } else {
        Kind::Value
    }
}
