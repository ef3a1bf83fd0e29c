//! Parameter file parser
//!
//! Reads `name=number` lines into a [`ParameterSet`]. Blank lines and lines
//! starting with `#` are skipped. Any other line that does not start with an
//! assignment is dropped without an error.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`.
//!
//! The number is matched as a run of decimal digits (any script) and dots, so
//! `1.2.3` passes the tokenizer and only fails when converted to `f64`. Text
//! following the numeric run is ignored: `T_kelvin=300 K` reads as
//! `T_kelvin = 300`.

use crate::types::{ParameterSet, Result, SimulationError};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Code points of the digit zero in every Unicode decimal digit block
///
/// Each block holds the digits 0-9 at consecutive code points.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Parse a parameter file
pub fn parse_file(path: &Path) -> Result<ParameterSet> {
    log::info!("Parsing parameter file: {:?}", path);

    let file = File::open(path).map_err(|source| SimulationError::InputAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let params = parse_lines(BufReader::new(file), path)?;

    log::info!("Parsed {} parameters from {:?}", params.len(), path);
    Ok(params)
}

/// Parse parameters from any buffered reader
pub fn parse_reader<R: BufRead>(reader: R) -> Result<ParameterSet> {
    parse_lines(reader, Path::new("<reader>"))
}

/// Parse parameters from an in-memory string
pub fn parse_str(content: &str) -> Result<ParameterSet> {
    parse_reader(content.as_bytes())
}

fn parse_lines<R: BufRead>(mut reader: R, origin: &Path) -> Result<ParameterSet> {
    let input_error = |source| SimulationError::InputAccess {
        path: origin.to_path_buf(),
        source,
    };

    let mut params = ParameterSet::new();
    let mut buf = Vec::new();
    let mut line_no = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(input_error)? == 0 {
            break;
        }

        let chunk = std::str::from_utf8(&buf)
            .map_err(|e| input_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);

        for line in chunk.split('\r') {
            line_no += 1;
            parse_line(line, line_no, &mut params)?;
        }
    }

    Ok(params)
}

fn parse_line(line: &str, line_no: usize, params: &mut ParameterSet) -> Result<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }

    let Some((key, value)) = match_assignment(line) else {
        log::trace!("Skipping line {}: {:?}", line_no, line);
        return Ok(());
    };

    let number = to_ascii_digits(value)
        .parse::<f64>()
        .map_err(|source| SimulationError::InvalidNumber {
            line: line_no,
            key: key.to_string(),
            value: value.to_string(),
            source,
        })?;

    if let Some(previous) = params.insert(key, number) {
        log::debug!(
            "Line {}: '{}' redefined ({} -> {})",
            line_no,
            key,
            previous,
            number
        );
    }
    Ok(())
}

/// Match `name=number` at the start of a trimmed line
///
/// Returns the name (word characters) and the raw numeric text (decimal
/// digits and dots). Both must be non-empty.
fn match_assignment(line: &str) -> Option<(&str, &str)> {
    let name_end = line
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map(|(i, _)| i)
        .unwrap_or(line.len());
    if name_end == 0 {
        return None;
    }

    let rest = line[name_end..].strip_prefix('=')?;
    let value_end = rest
        .char_indices()
        .find(|&(_, c)| !(c == '.' || decimal_value(c).is_some()))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    if value_end == 0 {
        return None;
    }

    Some((&line[..name_end], &rest[..value_end]))
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Value of a decimal digit from any script
fn decimal_value(c: char) -> Option<u32> {
    let cp = c as u32;
    let zero = match DECIMAL_ZEROS.binary_search(&cp) {
        Ok(i) => DECIMAL_ZEROS[i],
        Err(0) => return None,
        Err(i) => DECIMAL_ZEROS[i - 1],
    };
    let value = cp - zero;
    (value < 10).then_some(value)
}

/// Rewrite the digits of a matched value as ASCII, leaving dots alone
fn to_ascii_digits(value: &str) -> String {
    value
        .chars()
        .map(|c| match decimal_value(c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}
