use super::{token::Token, tokenize::Tokenizer};
use std::iter::FusedIterator;

/// Lazy, single-pass token sequence over a line source.
///
/// Lines are pulled only when the tokens of the previous line have been
/// handed out. The first line error is yielded once and ends the stream.
pub struct TokenStream<I> {
    lines: I,
    tokenizer: Tokenizer,
    pending: std::vec::IntoIter<Token>,
    lines_read: usize,
    done: bool,
}

impl<I> TokenStream<I> {
    pub(crate) fn new(tokenizer: Tokenizer, lines: I) -> Self {
        Self {
            lines,
            tokenizer,
            pending: Vec::new().into_iter(),
            lines_read: 0,
            done: false,
        }
    }

    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Gives the line source back, e.g. to release it once the stream has
    /// been consumed.
    pub fn into_inner(self) -> I {
        self.lines
    }
}

impl<I, E> Iterator for TokenStream<I>
where
    I: Iterator<Item = Result<String, E>>,
{
    type Item = Result<Token, E>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.next() {
                return Some(Ok(token));
            }
            if self.done {
                return None;
            }
            match self.lines.next() {
                Some(Ok(line)) => {
                    self.lines_read += 1;
                    self.pending = self
                        .tokenizer
                        .tokenize_line_at(&line, self.lines_read)
                        .into_iter();
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                None => {
                    self.done = true;
                    return None;
                }
            }
        }
    }
}

impl<I, E> FusedIterator for TokenStream<I> where I: Iterator<Item = Result<String, E>> {}
