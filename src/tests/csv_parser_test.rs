#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use crate::{
        parsers::{
            csv_parser::CsvParser,
            parser::{ReadError, TableSource},
        },
        records::stream_segment::StreamSegment,
    };

    fn write_table(dir: &TempDir, contents: &str) -> String {
        let path = dir.path().join("outcover.csv");
        fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_read_rows_in_table_order() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(
            &dir,
            "OBJECTID,COL,ROW,arcid,Shape_Length,effdepth,effwidth,rd_aspect\n\
             1,12,40,7,103.25,0.5,1.5,270\n\
             2,3,9,2,55.125,0.75,2,45.5\n\
             3,12,41,5,10,1,1,0\n",
        );

        let rows = CsvParser.read_rows(&table, &StreamSegment::FIELDS).unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], [12.0, 40.0, 7.0, 103.25, 0.5, 1.5, 270.0]);
        assert_eq!(rows[1], [3.0, 9.0, 2.0, 55.125, 0.75, 2.0, 45.5]);
        assert_eq!(rows[2][2], 5.0);
    }

    #[test]
    fn test_read_rows_follows_requested_field_order() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(&dir, "a,b,c\n1,2,3\n");

        let rows = CsvParser.read_rows(&table, &["c", "a"]).unwrap();

        assert_eq!(rows, vec![[3.0, 1.0]]);
    }

    #[test]
    fn test_headers_are_trimmed_and_first_duplicate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(&dir, " COL , ROW,COL\n 4 ,5,99\n");

        let rows = CsvParser.read_rows(&table, &["COL", "ROW"]).unwrap();

        assert_eq!(rows, vec![[4.0, 5.0]]);
    }

    #[test]
    fn test_missing_field() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(&dir, "COL,ROW,arcid\n1,2,3\n");

        let err = CsvParser
            .read_rows(&table, &StreamSegment::FIELDS)
            .unwrap_err();

        match err {
            ReadError::MissingField(name) => assert_eq!(name, "Shape_Length"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_value_reports_field_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let table = write_table(&dir, "COL,ROW\n1,2\n3,\n");

        let err = CsvParser.read_rows(&table, &["COL", "ROW"]).unwrap_err();

        match err {
            ReadError::InvalidValue { field, line, value } => {
                assert_eq!(field, "ROW");
                assert_eq!(line, 3);
                assert_eq!(value, "");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_table_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let table = dir.path().join("absent.csv");

        let err = CsvParser
            .read_rows(table.to_str().unwrap(), &["COL"])
            .unwrap_err();

        assert!(matches!(err, ReadError::Io(_)));
    }

    #[test]
    fn test_non_finite_values_are_invalid() {
        let dir = tempfile::tempdir().unwrap();

        for cell in ["NaN", "inf", "-inf", "1e400"] {
            let table = write_table(&dir, &format!("COL,ROW\n1,{}\n", cell));

            let err = CsvParser.read_rows(&table, &["COL", "ROW"]).unwrap_err();

            match err {
                ReadError::InvalidValue { field, value, .. } => {
                    assert_eq!(field, "ROW");
                    assert_eq!(value, cell);
                }
                other => panic!("unexpected error for {}: {:?}", cell, other),
            }
        }
    }
}
