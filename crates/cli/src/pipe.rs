// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feed input lines into a rotating logger.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rotlog::{RotatingLogger, Severity};

/// A named line source.
pub struct Source {
    pub name: String,
    pub reader: Box<dyn BufRead>,
}

/// Open every file up front, or stdin when `files` is empty, so a missing
/// input fails before the logger rotates anything.
pub fn open_sources(files: &[PathBuf]) -> Result<Vec<Source>> {
    if files.is_empty() {
        return Ok(vec![Source {
            name: "<stdin>".to_string(),
            reader: Box::new(io::stdin().lock()),
        }]);
    }
    files.iter().map(|path| open_file(path)).collect()
}

fn open_file(path: &Path) -> Result<Source> {
    let file = File::open(path).with_context(|| format!("cannot read {}", path.display()))?;
    Ok(Source {
        name: path.display().to_string(),
        reader: Box::new(BufReader::new(file)),
    })
}

/// Log every line of every source at `level`. Returns the number of lines read.
///
/// Invalid UTF-8 is replaced rather than rejected, and a trailing `\r` is
/// dropped so CRLF input produces clean lines.
pub fn pipe(logger: &RotatingLogger, sources: Vec<Source>, level: Severity) -> Result<u64> {
    let mut count = 0;
    let mut buf = Vec::new();
    for mut source in sources {
        loop {
            buf.clear();
            let read = source
                .reader
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed reading {}", source.name))?;
            if read == 0 {
                break;
            }
            logger.log(level, &String::from_utf8_lossy(trim_terminator(&buf)));
            count += 1;
        }
        tracing::debug!(source = %source.name, lines = count, "source drained");
    }
    Ok(count)
}

fn trim_terminator(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
#[path = "pipe_tests.rs"]
mod tests;
