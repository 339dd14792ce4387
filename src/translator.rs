use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use bstr::ByteSlice;
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::directive::{self, LineKind, SetVar};

pub const LINE_ENDING: &[u8] = b"\r\n";

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("opening input '{path}'")]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("creating output '{path}'")]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("reading input line {line}")]
    Read { line: usize, source: std::io::Error },

    #[error("writing output")]
    Write {
        #[from]
        source: std::io::Error,
    },
}

/// Token (`$(name)`) to value, both as raw bytes. Later definitions overwrite earlier ones.
///
/// Substitution walks the map in hash order, so a value that contains another
/// token, or a token that contains another token, gives an order dependent
/// result.
#[derive(Debug, Default)]
pub struct Variables {
    tokens: FxHashMap<Vec<u8>, Vec<u8>>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, var: &SetVar) {
        self.tokens.insert(var.token(), var.value.to_vec());
    }

    pub fn get(&self, token: &[u8]) -> Option<&[u8]> {
        self.tokens.get(token).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Replaces every occurrence of every known token. Unknown `$(...)` are
    /// left as they are.
    pub fn substitute<'a>(&self, line: &'a [u8]) -> Cow<'a, [u8]> {
        let mut line = Cow::Borrowed(line);
        for (token, value) in self.tokens.iter() {
            if line.contains_str(token) {
                line = Cow::Owned(line.replace(token, value));
            }
        }

        line
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub variables: usize,
}

#[derive(Debug, Default)]
pub struct Translator {
    variables: Variables,
}

impl Translator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    /// Returns the line to emit (without line ending), or `None` for
    /// directive lines.
    pub fn translate_line<'a>(&mut self, line: &'a [u8]) -> Option<Cow<'a, [u8]>> {
        match directive::classify(line) {
            LineKind::SetVar => {
                let var = SetVar::parse(line);
                tracing::info!(name = ?var.name.as_bstr(), "found variable");
                self.variables.define(&var);
                None
            }
            LineKind::Directive => {
                tracing::debug!(directive = %line.as_bstr(), "ignoring directive");
                None
            }
            LineKind::Content => Some(self.variables.substitute(line)),
        }
    }

    /// Lines end at `\n` with an optional `\r` before it. Bytes are copied
    /// through as they are, whatever their encoding.
    pub fn translate<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<Summary, TranslateError> {
        let mut summary = Summary::default();
        for (i, line) in reader.split(b'\n').enumerate() {
            let line = line.map_err(|source| TranslateError::Read { line: i + 1, source })?;
            let line = line.strip_suffix(b"\r").unwrap_or(&line);
            summary.lines_read += 1;

            let Some(translated) = self.translate_line(line) else {
                continue;
            };

            writer.write_all(&translated)?;
            writer.write_all(LINE_ENDING)?;
            summary.lines_written += 1;
        }

        writer.flush()?;
        summary.variables = self.variables.len();
        Ok(summary)
    }
}

pub fn translate_file(input: &Path, output: &Path) -> Result<Summary, TranslateError> {
    let fin = File::open(input).map_err(|source| TranslateError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;

    let fout = File::create(output).map_err(|source| TranslateError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    let summary = Translator::new().translate(BufReader::new(fin), BufWriter::new(fout))?;
    tracing::debug!(
        lines_read = summary.lines_read,
        lines_written = summary.lines_written,
        variables = summary.variables,
        "translation done"
    );

    Ok(summary)
}
