pub mod lex;
pub mod shared;
