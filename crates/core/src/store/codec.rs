//! Line-oriented record codec
//!
//! Each record kind persists as one colon-delimited line per record, with a
//! trailing newline. Rows that fail to parse are skipped with a warning so
//! one corrupt line cannot take the whole collection down with it.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::error::{Error, Result};

/// A record kind backed by one flat file inside the data directory
pub trait Record: Sized {
    const FILE_NAME: &'static str;

    /// Serialize to one colon-delimited line, without the newline
    fn to_line(&self) -> Result<String>;

    /// Parse one persisted line; `None` marks an unreadable row
    fn parse_line(line: &str) -> Option<Self>;
}

/// Rejects a field value that would corrupt the line format
pub fn check_field(value: &str) -> Result<()> {
    if value.contains(':') || value.contains('\n') {
        return Err(Error::ReservedCharacter(value.to_string()));
    }
    Ok(())
}

/// Joins field values with the delimiter, rejecting reserved characters
pub fn join_fields(fields: &[&str]) -> Result<String> {
    for field in fields {
        check_field(field)?;
    }
    Ok(fields.join(":"))
}

/// Loads every parseable record, in file order. A missing file is an empty
/// collection.
pub fn load_all<R: Record>(dir: &Path) -> Result<Vec<R>> {
    let path = dir.join(R::FILE_NAME);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match R::parse_line(line) {
            Some(record) => records.push(record),
            None => warn!(
                file = R::FILE_NAME,
                line = index + 1,
                "skipping unparseable record"
            ),
        }
    }
    Ok(records)
}

/// Appends one record to the backing file, creating it if needed
pub fn append<R: Record>(dir: &Path, record: &R) -> Result<()> {
    let line = record.to_line()?;
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(R::FILE_NAME))?;
    writeln!(file, "{line}")?;
    Ok(())
}

/// Replaces the entire backing file with the given records.
///
/// Writes a sibling temp file and renames it over the original, so a reader
/// never observes a half-written collection.
pub fn rewrite_all<R: Record>(dir: &Path, records: &[R]) -> Result<()> {
    let mut contents = String::new();
    for record in records {
        contents.push_str(&record.to_line()?);
        contents.push('\n');
    }

    let path = dir.join(R::FILE_NAME);
    let tmp = dir.join(format!("{}.tmp", R::FILE_NAME));
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}
