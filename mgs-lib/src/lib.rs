pub mod lexer;
pub mod source;

pub use lexer::{
    classify, tokenize_line, tokenize_stream, Kind, LexError, TextLocation, Token, TokenStream,
    Tokenizer, TokenizerOptions,
};
pub use source::{FileSource, LineSource, TextSource};
