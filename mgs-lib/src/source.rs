use crate::lexer::LexError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// A line-oriented text source feeding the tokenizer.
///
/// Lines are yielded without their `\n` / `\r\n` terminator. `close` is
/// called once the tokens have been consumed; a failure there does not
/// invalidate tokens already produced. The default `close` always
/// succeeds, and [`FileSource`] keeps it: std releases the descriptor on
/// drop and never reports close errors, so a file-backed run cannot
/// produce [`LexError::FileClose`].
pub trait LineSource: Iterator<Item = Result<String, LexError>> {
    fn close(self) -> Result<(), LexError>
    where
        Self: Sized,
    {
        Ok(())
    }
}

pub struct FileSource {
    path: PathBuf,
    reader: BufReader<File>,
    failed: bool,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LexError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| LexError::FileOpen {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self {
            path,
            reader: BufReader::new(file),
            failed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for FileSource {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(0) => None,
            Ok(_) => {
                if buf.ends_with(b"\n") {
                    buf.pop();
                    if buf.ends_with(b"\r") {
                        buf.pop();
                    }
                }
                // bytes that are not UTF-8 become U+FFFD and classify as values
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(source) => {
                self.failed = true;
                Some(Err(LexError::FileRead {
                    path: self.path.display().to_string(),
                    source,
                }))
            }
        }
    }
}

impl LineSource for FileSource {}

/// In-memory source over a borrowed string.
pub struct TextSource<'a> {
    lines: std::str::Lines<'a>,
}

impl<'a> TextSource<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.lines() }
    }
}

impl Iterator for TextSource<'_> {
    type Item = Result<String, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lines.next().map(|line| Ok(line.to_string()))
    }
}

impl LineSource for TextSource<'_> {}
