//! Reading and writing vector sets as delimited text.
//!
//! The line format is one vector per line, entries separated by a single
//! delimiter character (`,` unless configured otherwise), no trailing
//! delimiter. Lines whose first character is not a digit, a sign, or an
//! opening parenthesis are headers or comments and are skipped.
//!
//! Entries are real or complex numeric literals. The complex form accepts a
//! trailing `i` or `j` on the imaginary term, an optional enclosing
//! parenthesis pair, and the real and imaginary terms in either order:
//! `1.4j`, `(1.21+0j)`, `i+1` and `-2.5-0.5i` all parse. A parenthesized or
//! `i`/`j`-marked entry makes its whole vector complex, even when the
//! imaginary value is zero.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::vector::Vector;

/// Read a vector set from a delimited text file.
///
/// Line numbers in errors are 1-based and count every line of the file,
/// including skipped ones.
pub fn read_vector_set<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Vec<Vector>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut vectors = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let Some(first) = line.chars().next() else {
            continue;
        };
        if !(first.is_ascii_digit() || first == '+' || first == '-' || first == '(') {
            continue;
        }
        vectors.push(parse_vector_line(&line, delimiter, index + 1)?);
    }
    Ok(vectors)
}

/// Write vectors to a text file, one per line, in the same format the
/// reader accepts. Complex-tagged vectors render both components of every
/// entry.
pub fn write_vector_set<P: AsRef<Path>>(path: P, vectors: &[Vector], delimiter: char) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for v in vectors {
        writeln!(writer, "{}", v.to_delimited(delimiter))?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse an inline set literal such as `[[1,0,i],[-1,i,1],[0,-1,i+1]]`.
///
/// Whitespace is ignored and `[]` is the empty set. Entries are separated
/// by commas. The `line` of an [`Error::UnparseableEntry`] is the 1-based
/// vector position within the literal, or 0 when the bracket envelope
/// itself is malformed.
pub fn parse_vector_set_literal(text: &str) -> Result<Vec<Vector>> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if compact == "[]" {
        return Ok(Vec::new());
    }
    let inner = compact
        .strip_prefix("[[")
        .and_then(|t| t.strip_suffix("]]"))
        .ok_or_else(|| Error::UnparseableEntry { text: text.trim().to_string(), line: 0 })?;

    inner
        .split("],[")
        .enumerate()
        .map(|(i, row)| parse_vector_line(row, ',', i + 1))
        .collect()
}

/// Parse one delimited line into a vector, promoting it to complex when any
/// entry was written in complex notation.
fn parse_vector_line(line: &str, delimiter: char, line_no: usize) -> Result<Vector> {
    let mut entries = Vec::new();
    let mut complex_notation = false;
    for raw in line.trim_end().split(delimiter) {
        let text = raw.trim();
        let (value, written_complex) =
            parse_entry(text).ok_or_else(|| Error::UnparseableEntry {
                text: text.to_string(),
                line: line_no,
            })?;
        complex_notation |= written_complex;
        entries.push(value);
    }
    let v = Vector::new(entries);
    Ok(if complex_notation { v.promote() } else { v })
}

/// Parse a single entry. Returns the value and whether it was *written* in
/// complex notation (parenthesized or carrying an `i`/`j` term).
fn parse_entry(text: &str) -> Option<(Scalar, bool)> {
    let text = text.trim();
    let (inner, had_parens) = match text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        Some(inner) => (inner.trim(), true),
        None => (text, false),
    };
    if inner.is_empty() {
        return None;
    }

    let terms = split_terms(inner);
    if terms.len() > 2 {
        return None;
    }

    let mut re: Option<f64> = None;
    let mut im: Option<f64> = None;
    for term in terms {
        let (value, is_imag) = parse_term(term)?;
        let slot = if is_imag { &mut im } else { &mut re };
        if slot.is_some() {
            // two real terms or two imaginary terms
            return None;
        }
        *slot = Some(value);
    }

    let written_complex = had_parens || im.is_some();
    Some((Scalar::new(re.unwrap_or(0.0), im.unwrap_or(0.0)), written_complex))
}

/// Split at the sign that separates two terms, keeping each sign attached
/// to its term. A sign in the first position or right after an exponent
/// marker does not split.
fn split_terms(s: &str) -> Vec<&str> {
    let bytes = s.as_bytes();
    let mut cuts = Vec::new();
    for (i, &b) in bytes.iter().enumerate().skip(1) {
        if (b == b'+' || b == b'-') && !matches!(bytes[i - 1], b'e' | b'E') {
            cuts.push(i);
        }
    }

    let mut terms = Vec::new();
    let mut start = 0;
    for cut in cuts {
        terms.push(&s[start..cut]);
        start = cut;
    }
    terms.push(&s[start..]);
    terms
}

/// Parse one term: a real number, or an imaginary one marked by a trailing
/// `i` or `j` (a bare marker counts as 1). Non-finite values are rejected.
fn parse_term(term: &str) -> Option<(f64, bool)> {
    let term = term.trim();
    if let Some(num) = term.strip_suffix(['i', 'j']) {
        let value = match num.trim() {
            "" | "+" => 1.0,
            "-" => -1.0,
            other => finite(other.parse().ok()?)?,
        };
        Some((value, true))
    } else {
        Some((finite(term.parse().ok()?)?, false))
    }
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
