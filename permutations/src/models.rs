pub use {
    csv,
    std::io::{self, Error, ErrorKind, Result},
};

use crate::{Row, rows_count};

/// `.in` files are space separated, newline terminated and have no header.
/// The first record holds a single field, the rest hold `n` fields each.
pub fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'));
    builder
}

pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true);
    builder
}

pub fn write_size<W>(writer: &mut csv::Writer<W>, n: usize) -> csv::Result<()>
where
    W: io::Write,
{
    writer.write_record(&[n.to_string()])
}

pub fn write_row<W>(writer: &mut csv::Writer<W>, row: &[usize]) -> csv::Result<()>
where
    W: io::Write,
{
    for value in row {
        writer.write_field(value.to_string())?;
    }
    writer.write_record(None::<&[u8]>)
}

/// Whether `row` holds every value of `1..=n` exactly once.
pub fn is_permutation(row: &[usize], n: usize) -> bool {
    if row.len() != n {
        return false;
    }
    let mut seen = vec![false; n + 1];
    for &value in row {
        if value < 1 || value > n || seen[value] {
            return false;
        }
        seen[value] = true;
    }
    true
}

fn parse_value(s: &str) -> Result<usize> {
    s.trim().parse::<usize>().map_err(|_| {
        Error::new(
            ErrorKind::InvalidData,
            format!("expected type: <integer>, found {s:?}"),
        )
    })
}

/// A `.in` file as read back from disk. Files are written row by row through
/// [`crate::generate`], never through this model.
#[derive(Debug, Clone, PartialEq)]
pub struct InputModel {
    pub n: usize,
    pub rows: Vec<Row>,
}

impl InputModel {
    pub fn deserialize_csv<R>(reader: &mut csv::Reader<R>) -> Result<Self>
    where
        R: io::Read,
    {
        let mut records = reader.records();

        let first = records.next().ok_or(Error::new(
            ErrorKind::InvalidInput,
            "missing field: \"n\"",
        ))??;
        if first.len() != 1 {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("first line must hold only \"n\", found {} fields", first.len()),
            ));
        }
        let n = parse_value(&first[0])?;
        let expected_rows = rows_count(n).ok_or_else(|| {
            Error::new(ErrorKind::InvalidData, format!("size {n} is too large"))
        })?;

        let rows = records
            .map(|record| -> Result<Row> {
                let record = record?;
                if record.len() != n {
                    return Err(Error::new(
                        ErrorKind::InvalidData,
                        format!("row has {} values, expected {n}", record.len()),
                    ));
                }
                record.iter().map(parse_value).collect::<Result<Row>>()
            })
            .collect::<Result<Vec<Row>>>()?;

        if rows.len() != expected_rows {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!("found {} rows, expected {expected_rows}", rows.len()),
            ));
        }

        Ok(Self { n, rows })
    }

    pub fn is_valid(&self) -> bool {
        rows_count(self.n) == Some(self.rows.len())
            && self.rows.iter().all(|row| is_permutation(row, self.n))
    }
}
