//! CSV Field Encoding
//!
//! Fields containing a comma, quote or line break are quoted with inner
//! quotes doubled. Everything else is written as is, which keeps output for
//! plain names identical to backups made before quoting existed.

/// Append one record (with trailing `\n`) to `out`
pub(crate) fn push_record(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

/// A parsed data record and the physical line it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Record {
    pub line: usize,
    pub fields: Vec<String>,
}

/// A quoted field was still open at end of input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct UnterminatedQuote {
    pub line: usize,
}

/// Iterator over the records of a CSV body. Blank lines are skipped.
pub(crate) struct Records<'a> {
    lines: std::iter::Enumerate<std::str::Split<'a, char>>,
    first_line: usize,
}

impl<'a> Records<'a> {
    /// `first_line` is the 1-based line number of the first line of `body`
    pub(crate) fn new(body: &'a str, first_line: usize) -> Self {
        Self {
            lines: body.split('\n').enumerate(),
            first_line,
        }
    }
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

impl Iterator for Records<'_> {
    type Item = Result<Record, UnterminatedQuote>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (index, raw) = self.lines.next()?;
            let line = strip_cr(raw);
            if line.trim().is_empty() {
                continue;
            }

            let start = self.first_line + index;
            let mut parser = FieldParser::default();
            parser.feed(line);
            while parser.in_quotes {
                match self.lines.next() {
                    Some((_, raw)) => {
                        parser.current.push('\n');
                        parser.feed(strip_cr(raw));
                    }
                    None => return Some(Err(UnterminatedQuote { line: start })),
                }
            }
            return Some(Ok(Record { line: start, fields: parser.finish() }));
        }
    }
}

#[derive(Default)]
struct FieldParser {
    fields: Vec<String>,
    current: String,
    in_quotes: bool,
    // no character of the current field consumed yet
    started: bool,
}

impl FieldParser {
    fn feed(&mut self, line: &str) {
        let mut chars = line.chars().peekable();
        while let Some(c) = chars.next() {
            if self.in_quotes {
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        self.current.push('"');
                    } else {
                        self.in_quotes = false;
                    }
                } else {
                    self.current.push(c);
                }
                continue;
            }

            match c {
                ',' => {
                    self.fields.push(std::mem::take(&mut self.current));
                    self.started = false;
                }
                '"' if !self.started => {
                    self.in_quotes = true;
                    self.started = true;
                }
                _ => {
                    self.current.push(c);
                    self.started = true;
                }
            }
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.fields.push(self.current);
        self.fields
    }
}
