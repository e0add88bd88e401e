use super::{
    keywords::DELIMITER,
    stream::TokenStream,
    token::{TextLocation, Token},
};

/// Behaviour switches for the two places where the reference lexer is
/// lossy. The default reproduces it exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Emit a non-empty pending token when the line ends without a
    /// trailing space. Off by default: such a token is discarded.
    pub flush_at_end_of_line: bool,
    /// Drop the empty tokens produced by consecutive spaces. Off by
    /// default: they are emitted as empty `Value` tokens.
    pub skip_empty: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    options: TokenizerOptions,
}

impl Tokenizer {
    pub fn new(options: TokenizerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    pub fn tokenize_line(&self, line: &str) -> Vec<Token> {
        self.tokenize_line_at(line, 1)
    }

    /// Splits one line (without its terminator) on the space character.
    ///
    /// Only `' '` delimits; tabs and every other character are part of the
    /// pending token. Each space flushes the pending buffer, even when it is
    /// empty.
    pub fn tokenize_line_at(&self, line: &str, line_num: usize) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pending = String::new();
        let mut start_column = 1;

        for (idx, c) in line.chars().enumerate() {
            match c {
                DELIMITER => {
                    let location = TextLocation::new(line_num, start_column);
                    self.flush(&mut tokens, std::mem::take(&mut pending), location);
                    start_column = idx + 2;
                }
                _ => pending.push(c),
            }
        }

        if self.options.flush_at_end_of_line && !pending.is_empty() {
            tokens.push(Token::classified(
                pending,
                TextLocation::new(line_num, start_column),
            ));
        }

        tokens
    }

    /// Lazily tokenizes a sequence of lines, in order.
    pub fn tokenize_stream<I, E>(&self, lines: I) -> TokenStream<I::IntoIter>
    where
        I: IntoIterator<Item = Result<String, E>>,
    {
        TokenStream::new(*self, lines.into_iter())
    }

    fn flush(&self, tokens: &mut Vec<Token>, text: String, location: TextLocation) {
        if text.is_empty() && self.options.skip_empty {
            return;
        }
        tokens.push(Token::classified(text, location));
    }
}

pub fn tokenize_line(line: &str) -> Vec<Token> {
    Tokenizer::default().tokenize_line(line)
}

pub fn tokenize_stream<I, E>(lines: I) -> TokenStream<I::IntoIter>
where
    I: IntoIterator<Item = Result<String, E>>,
{
    Tokenizer::default().tokenize_stream(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::Kind;

    fn kinds_and_text(tokens: &[Token]) -> Vec<(Kind, &str)> {
        tokens.iter().map(|t| (t.kind, t.text.as_str())).collect()
    }

    fn eol_flushing() -> Tokenizer {
        Tokenizer::new(TokenizerOptions {
            flush_at_end_of_line: true,
            ..Default::default()
        })
    }

    #[test]
    fn test_trailing_token_is_dropped() {
        let tokens = tokenize_line("int x");
        assert_eq!(kinds_and_text(&tokens), vec![(Kind::Type, "int")]);
    }

    #[test]
    fn test_trailing_space_flushes_everything() {
        let tokens = tokenize_line("x + y ");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(Kind::Value, "x"), (Kind::Operator, "+"), (Kind::Value, "y")]
        );
    }

    #[test]
    fn test_lone_keyword_without_space() {
        assert!(tokenize_line("float").is_empty());
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize_line("").is_empty());
        assert!(eol_flushing().tokenize_line("").is_empty());
    }

    #[test]
    fn test_consecutive_spaces_emit_empty_values() {
        let tokens = tokenize_line("a  * b ");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![
                (Kind::Value, "a"),
                (Kind::Value, ""),
                (Kind::Operator, "*"),
                (Kind::Value, "b"),
            ]
        );
    }

    #[test]
    fn test_leading_space_emits_empty_value() {
        let tokens = tokenize_line(" int ");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(Kind::Value, ""), (Kind::Type, "int")]
        );
    }

    #[test]
    fn test_only_space_delimits() {
        let tokens = tokenize_line("int\tx -\r ");
        assert_eq!(kinds_and_text(&tokens), vec![(Kind::Value, "int\tx"), (Kind::Value, "-\r")]);
    }

    #[test]
    fn test_flush_at_end_of_line() {
        let tokenizer = eol_flushing();
        assert_eq!(
            kinds_and_text(&tokenizer.tokenize_line("int x")),
            vec![(Kind::Type, "int"), (Kind::Value, "x")]
        );
        assert_eq!(
            kinds_and_text(&tokenizer.tokenize_line("float")),
            vec![(Kind::Type, "float")]
        );
        // a trailing space leaves nothing pending, so no extra token
        assert_eq!(tokenizer.tokenize_line("x + y ").len(), 3);
    }

    #[test]
    fn test_skip_empty() {
        let tokenizer = Tokenizer::new(TokenizerOptions {
            skip_empty: true,
            ..Default::default()
        });
        let tokens = tokenizer.tokenize_line("  a   / b ");
        assert_eq!(
            kinds_and_text(&tokens),
            vec![(Kind::Value, "a"), (Kind::Operator, "/"), (Kind::Value, "b")]
        );
    }

    #[test]
    fn test_token_locations() {
        let tokens = Tokenizer::default().tokenize_line_at("int  ab - ", 4);
        let locations: Vec<(usize, usize)> = tokens
            .iter()
            .map(|t| (t.location.line, t.location.column))
            .collect();
        assert_eq!(locations, vec![(4, 1), (4, 5), (4, 6), (4, 9)]);
    }

    #[test]
    fn test_locations_count_chars() {
        let tokens = eol_flushing().tokenize_line("héllo wörld");
        assert_eq!(tokens[1].text, "wörld");
        assert_eq!(tokens[1].location, TextLocation::new(1, 7));
    }

    #[test]
    fn test_no_length_cap() {
        let long = "v".repeat(10_000);
        let tokens = tokenize_line(&format!("{long} "));
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text.len(), 10_000);
    }

    #[test]
    fn test_token_count_matches_spaces() {
        let lines = ["", "a", "a ", "a b c ", "   ", "int x = 5 ;"];
        for line in lines {
            let spaces = line.chars().filter(|c| *c == ' ').count();
            assert_eq!(tokenize_line(line).len(), spaces, "{line:?}");
        }
    }
}
