use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use chrono::NaiveDateTime;
use log::debug;

use crate::{args::OutputMethod, records::stream_segment::StreamSegment};

pub const STREAM_MAP_FILE: &str = "stream.map.dat";

/// Number of lines produced by [`header`].
pub const HEADER_LINES: usize = 9;

/// Builds the comment block that precedes the segment rows.
///
/// The `SINK?` column is advertised for the downstream model but never
/// written by [`format_segment`].
pub fn header(generated: NaiveDateTime, workspace: &str) -> String {
    let mut info = String::new();
    info.push_str("###### This file has been automatically generated #####\n");
    info.push_str("######             EDIT WITH CARE!!!              #####\n");
    info.push_str(&format!(
        "# Generated: {}\n",
        generated.format("%Y-%m-%d %H:%M:%S%.6f")
    ));
    info.push_str("# Created by streammapfile.py\n");
    info.push_str(&format!("# Workspace {}\n", workspace));
    info.push_str("#                   Segment  Cut/Bank     Cut     Segment\n");
    info.push_str("#  Col  Row  ID      Length   Height     Width     Aspect   SINK?\n");
    info.push_str("#                     (m)      (m)        (m)       (d)    (optional)\n");
    info.push_str("# \n");
    debug_assert_eq!(info.lines().count(), HEADER_LINES);
    info
}

/// Renders a segment as `%5d %5d %5d %11.4f %10.4f %9.4f %10.4f`.
pub fn format_segment(segment: &StreamSegment) -> String {
    format!(
        "{:5} {:5} {:5} {:11.4} {:10.4} {:9.4} {:10.4}",
        segment.col,
        segment.row,
        segment.id,
        segment.length,
        segment.height,
        segment.width,
        segment.aspect
    )
}

pub struct StreamMapWriter {
    writer: BufWriter<Box<dyn Write>>,
}

impl StreamMapWriter {
    /// Opens the output target. For [`OutputMethod::File`] the file at `path`
    /// is created, or truncated if it already exists.
    pub fn new(method: OutputMethod, path: &str) -> io::Result<Self> {
        let writer: BufWriter<Box<dyn Write>> = match method {
            OutputMethod::File => {
                let file = File::create(path)?;
                BufWriter::new(Box::new(file))
            }
            OutputMethod::Print => BufWriter::new(Box::new(io::stdout())),
        };

        Ok(StreamMapWriter { writer })
    }

    pub fn write_header(&mut self, generated: NaiveDateTime, workspace: &str) -> io::Result<()> {
        debug!("Writing header to output");
        self.writer.write_all(header(generated, workspace).as_bytes())
    }

    pub fn write_segment(&mut self, segment: &StreamSegment) -> io::Result<()> {
        writeln!(self.writer, "{}", format_segment(segment))
    }

    /// Flushes the writer, the underlying file is closed when it is dropped.
    pub fn flush_and_close(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
