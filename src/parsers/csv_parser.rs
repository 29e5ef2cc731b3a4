use super::parser::{ReadError, TableSource};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;
use std::collections::HashMap;
use std::fs::File;

/// Reads attribute tables that were exported from the coverage as CSV with
/// a header row.
pub struct CsvParser;

/// Maps each trimmed header name to the column it first appears in.
fn preprocess_headers(headers: &StringRecord) -> HashMap<String, usize> {
    let mut columns = HashMap::new();

    for (index, header) in headers.iter().enumerate() {
        columns.entry(header.trim().to_string()).or_insert(index);
    }

    columns
}

fn locate_fields<const N: usize>(
    columns: &HashMap<String, usize>,
    fields: &[&str; N],
) -> Result<[usize; N], ReadError> {
    let mut indices = [0usize; N];
    for (slot, field) in indices.iter_mut().zip(fields.iter()) {
        *slot = *columns
            .get(*field)
            .ok_or_else(|| ReadError::MissingField(field.to_string()))?;
    }
    Ok(indices)
}

fn project_record<const N: usize>(
    record: &StringRecord,
    indices: &[usize; N],
    fields: &[&str; N],
) -> Result<[f64; N], ReadError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);
    let mut row = [0.0f64; N];

    for ((value, &index), field) in row.iter_mut().zip(indices.iter()).zip(fields.iter()) {
        let raw = record.get(index).unwrap_or("");
        *value = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ReadError::InvalidValue {
                field: field.to_string(),
                line,
                value: raw.to_string(),
            })?;
    }

    Ok(row)
}

impl TableSource for CsvParser {
    fn read_rows<const N: usize>(
        &self,
        source: &str,
        fields: &[&str; N],
    ) -> Result<Vec<[f64; N]>, ReadError> {
        debug!("Opening the attribute table: {:?} ...", source);
        let file = File::open(source)?;
        let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(file);

        let columns = preprocess_headers(rdr.headers()?);
        let indices = locate_fields(&columns, fields)?;

        let mut rows = Vec::new();
        for result in rdr.records() {
            let record = result?;
            rows.push(project_record(&record, &indices, fields)?);
        }

        debug!("Read {} rows from {:?}", rows.len(), source);
        Ok(rows)
    }
}
