pub const TYPE_INT: &str = "int";
pub const TYPE_FLOAT: &str = "float";
pub const ALL_TYPES: &[&str] = &[TYPE_INT, TYPE_FLOAT];

pub const OP_ADD: &str = "+";
pub const OP_SUB: &str = "-";
pub const OP_MUL: &str = "*";
pub const OP_DIV: &str = "/";
pub const ALL_OPERATORS: &[&str] = &[OP_ADD, OP_SUB, OP_MUL, OP_DIV];

/// The only character that ends a pending token.
pub const DELIMITER: char = ' ';
