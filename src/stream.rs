// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-by-line driver: read a line, translate it, write it, repeat.

use crate::error::{NpAlphaError, Result};
use crate::translate::Translator;
use std::io::{BufRead, ErrorKind, Write};

/// Totals for one run, reported in verbose mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineStats {
    pub lines: usize,
    pub input_bytes: usize,
    pub output_bytes: usize,
}

/// Translate every line from `reader` into `writer` until end of input.
///
/// Each line is written and flushed before the next one is read. A closed
/// output pipe ends the run normally.
pub fn run<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    translator: &Translator<'_>,
) -> Result<LineStats> {
    let mut stats = LineStats::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = read_line(reader, &mut line)?;
        if read == 0 {
            break;
        }

        let written = match emit(translator, &line, writer) {
            Ok(written) => written,
            Err(NpAlphaError::Io(err)) if err.kind() == ErrorKind::BrokenPipe => break,
            Err(err) => return Err(err),
        };

        stats.lines += 1;
        stats.input_bytes += read;
        stats.output_bytes += written;
    }

    Ok(stats)
}

/// Append one line (newline included) to `line`, returning the bytes read.
///
/// The buffer grows with `try_reserve`, so an oversized line is reported as
/// `ResourceExhaustion` instead of aborting.
fn read_line<R: BufRead>(reader: &mut R, line: &mut Vec<u8>) -> Result<usize> {
    let mut total = 0;
    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        if available.is_empty() {
            return Ok(total);
        }

        let newline = available.iter().position(|&byte| byte == b'\n');
        let take = newline.map_or(available.len(), |pos| pos + 1);
        line.try_reserve(take)
            .map_err(|_| NpAlphaError::ResourceExhaustion {
                requested: line.len().saturating_add(take),
            })?;
        line.extend_from_slice(&available[..take]);
        reader.consume(take);
        total += take;

        if newline.is_some() {
            return Ok(total);
        }
    }
}

fn emit<W: Write>(translator: &Translator<'_>, line: &[u8], writer: &mut W) -> Result<usize> {
    let written = translator.write_line(line, writer)?;
    writer.flush()?;
    Ok(written)
}
