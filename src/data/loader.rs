use std::{fs::File, io, path::Path};

use csv::{ReaderBuilder, StringRecord};
use log::{debug, warn};
use ndarray::Array2;

use super::{DataErr, Result};

/// Reads the given columns of every CSV record as `f64`.
///
/// Records that are too short or hold a value that is not a number are logged and skipped.
///
/// # Arguments
/// * `reader` - The CSV source.
/// * `columns` - The indices of the columns to keep, in output order.
/// * `has_headers` - Whether the first record is a header and must be skipped.
/// * `max_rows` - The maximum amount of records to consider, all of them if `None`.
///
/// # Returns
/// A matrix with one row per valid record and one column per entry of `columns`.
pub fn read_columns<R: io::Read>(
    reader: R,
    columns: &[usize],
    has_headers: bool,
    max_rows: Option<usize>,
) -> Result<Array2<f64>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(reader);

    let limit = max_rows.unwrap_or(usize::MAX);
    let mut rows = Vec::new();
    let mut skipped = 0;

    for (line, record) in rdr.records().take(limit).enumerate() {
        match parse_record(&record?, columns) {
            Ok(row) => rows.push(row),
            Err(reason) => {
                warn!(record = line; "skipping record: {reason}");
                skipped += 1;
            }
        }
    }

    if rows.is_empty() {
        return Err(DataErr::NoRows);
    }

    debug!("read {} rows, skipped {skipped}", rows.len());
    Ok(Array2::from_shape_fn((rows.len(), columns.len()), |(i, j)| {
        rows[i][j]
    }))
}

/// Opens the CSV file at `path` and reads it with `read_columns`.
pub fn load_columns(
    path: impl AsRef<Path>,
    columns: &[usize],
    has_headers: bool,
    max_rows: Option<usize>,
) -> Result<Array2<f64>> {
    let file = File::open(path)?;
    read_columns(io::BufReader::new(file), columns, has_headers, max_rows)
}

fn parse_record(record: &StringRecord, columns: &[usize]) -> std::result::Result<Vec<f64>, String> {
    columns
        .iter()
        .map(|&column| {
            let field = record
                .get(column)
                .ok_or_else(|| format!("missing column {column}"))?;

            field
                .trim()
                .parse()
                .map_err(|e| format!("column {column} ({field:?}): {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    const CSV: &str = "\
id,a,b,c
0,1.5,2,3
1,4,5,6
2,7,8,9
";

    #[test]
    fn keeps_selected_columns_in_order() {
        let rows = read_columns(CSV.as_bytes(), &[3, 1], true, None).unwrap();
        assert_eq!(rows, array![[3.0, 1.5], [6.0, 4.0], [9.0, 7.0]]);
    }

    #[test]
    fn header_is_data_when_disabled() {
        let err = read_columns("a,b\n".as_bytes(), &[0, 1], false, None).unwrap_err();
        assert!(matches!(err, DataErr::NoRows));

        let rows = read_columns("1,2\n3,4\n".as_bytes(), &[0, 1], false, None).unwrap();
        assert_eq!(rows, array![[1.0, 2.0], [3.0, 4.0]]);
    }

    #[test]
    fn skips_unparseable_and_short_records() {
        let csv = "x,y\n1,2\nfoo,3\n4\n 5 , 6 \n";
        let rows = read_columns(csv.as_bytes(), &[0, 1], true, None).unwrap();
        assert_eq!(rows, array![[1.0, 2.0], [5.0, 6.0]]);
    }

    #[test]
    fn limits_considered_records() {
        let rows = read_columns(CSV.as_bytes(), &[0], true, Some(2)).unwrap();
        assert_eq!(rows, array![[0.0], [1.0]]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_columns("/nonexistent/data.csv", &[0], true, None).unwrap_err();
        assert!(matches!(err, DataErr::Io(_)));
    }
}
