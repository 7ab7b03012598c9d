use std::collections::BTreeSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::domain::DomainSuffix;
use crate::error::SyncError;

pub const DEFAULT_STORE: &str = "customize/Proxy-Domain.list";

/// Reads the domain suffixes already recorded in the list. A missing file
/// counts as an empty list.
pub fn read_existing_domains(path: &Path) -> Result<BTreeSet<DomainSuffix>, SyncError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("{} does not exist", path.display());
            return Ok(Default::default());
        }
        Err(e) => return Err(SyncError::io(path, e)),
    };

    parse_existing_domains(BufReader::new(file)).map_err(|e| SyncError::io(path, e))
}

/// Lines that aren't `DOMAIN-SUFFIX,` entries are skipped.
pub fn parse_existing_domains(reader: impl BufRead) -> std::io::Result<BTreeSet<DomainSuffix>> {
    let mut domains = BTreeSet::new();
    for line in reader.lines() {
        if let Some(domain) = DomainSuffix::from_store_line(&line?) {
            domains.insert(domain);
        }
    }
    Ok(domains)
}

// True when the file has content that doesn't end in a line break.
fn needs_line_break(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }

    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}

/// Appends one `DOMAIN-SUFFIX,<suffix>` line per domain, in sorted order.
/// Existing lines are never touched. On failure the number of lines that
/// made it to disk is unknown; running again is safe since known domains are
/// skipped on the next read.
pub fn append_domains(path: &Path, domains: &BTreeSet<DomainSuffix>) -> Result<(), SyncError> {
    if domains.is_empty() {
        log::info!("No new domains to append");
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .read(true)
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| SyncError::io(path, e))?;

    let line_break = needs_line_break(&mut file).map_err(|e| SyncError::io(path, e))?;

    let mut writer = BufWriter::new(file);
    if line_break {
        log::debug!("{} doesn't end with a line break, adding one", path.display());
        writeln!(writer).map_err(|e| SyncError::io(path, e))?;
    }

    for domain in domains {
        let line = domain.to_store_line();
        writeln!(writer, "{line}").map_err(|e| SyncError::io(path, e))?;
        log::info!("Added: {line}");
    }

    writer.flush().map_err(|e| SyncError::io(path, e))
}
