pub mod classify;
pub mod error;
pub mod keywords;
pub mod stream;
pub mod token;
pub mod tokenize;

pub use classify::classify;
pub use error::LexError;
pub use stream::TokenStream;
pub use token::{Kind, TextLocation, Token};
pub use tokenize::{tokenize_line, tokenize_stream, Tokenizer, TokenizerOptions};
