use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
};

use chrono::Local;
use log::debug;

use crate::{
    args::OutputMethod,
    output::{StreamMapWriter, STREAM_MAP_FILE},
    parsers::parser::{ReadError, TableSource},
    records::stream_segment::{FieldNames, StreamSegment},
};

#[derive(Debug)]
pub enum ExportError {
    Read(ReadError),
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Read(err) => write!(f, "reading the coverage table failed: {}", err),
            ExportError::Io(err) => write!(f, "writing {} failed: {}", STREAM_MAP_FILE, err),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Read(err) => Some(err),
            ExportError::Io(err) => Some(err),
        }
    }
}

impl From<ReadError> for ExportError {
    fn from(err: ReadError) -> Self {
        ExportError::Read(err)
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        ExportError::Io(err)
    }
}

#[derive(Debug)]
pub struct ExportReport {
    pub path: String,
    pub replaced_existing: bool,
    pub rows: usize,
}

/// Output path of the stream map. The workspace is used as a plain prefix,
/// callers supply the trailing separator.
pub fn stream_map_path(workspace: &str) -> String {
    format!("{}{}", workspace, STREAM_MAP_FILE)
}

/// Exports the channel segments of `table` to `<workspace>stream.map.dat`.
///
/// A stale stream map at the output path is removed before anything is read,
/// so a failure further on leaves either no file or a truncated one. Rows are
/// written in table order. Progress lines go to `status`.
pub fn export_stream_map<S: TableSource, W: Write>(
    source: &S,
    table: &str,
    workspace: &str,
    fields: &FieldNames,
    method: OutputMethod,
    status: &mut W,
) -> Result<ExportReport, ExportError> {
    let path = stream_map_path(workspace);
    let mut replaced_existing = false;

    if method == OutputMethod::File {
        if Path::new(&path).exists() {
            fs::remove_file(&path)?;
            replaced_existing = true;
            writeln!(status, "{} sucessfully deleted", STREAM_MAP_FILE)?;
        }
        writeln!(status, "creating new {} file", STREAM_MAP_FILE)?;
    }

    let rows = source.read_rows(table, &fields.as_array())?;
    debug!("Projected {} segments from {:?}", rows.len(), table);

    let mut writer = StreamMapWriter::new(method, &path)?;
    writer.write_header(Local::now().naive_local(), workspace)?;
    for values in &rows {
        writer.write_segment(&StreamSegment::from(*values))?;
    }
    writer.flush_and_close()?;

    Ok(ExportReport {
        path,
        replaced_existing,
        rows: rows.len(),
    })
}
