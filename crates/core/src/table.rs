//! In-memory delimited table that is loaded once and written back once.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// A cell value; empty fields load as `None`.
pub type Cell = Option<String>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    records: Vec<Vec<Cell>>,
    separator: u8,
}

/// Borrowed view of one record, addressed by column name.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    headers: &'a [String],
    cells: &'a [Cell],
}

impl<'a> Row<'a> {
    /// Column names paired with their cells, in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, Option<&'a str>)> + 'a {
        let (headers, cells) = (self.headers, self.cells);
        headers
            .iter()
            .zip(cells.iter())
            .map(|(name, cell)| (name.as_str(), cell.as_deref()))
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a str> {
        let (headers, cells) = (self.headers, self.cells);
        let index = headers.iter().position(|name| name == column)?;
        cells[index].as_deref()
    }
}

fn to_cell(field: &str) -> Cell {
    if field.is_empty() {
        None
    } else {
        Some(field.to_string())
    }
}

impl Table {
    /// Builds a table from already split records. Short records are padded with `None`.
    #[cfg(test)]
    fn new(headers: Vec<String>, records: Vec<Vec<Cell>>, separator: u8) -> Self {
        let width = headers.len();
        let records = records
            .into_iter()
            .map(|mut record| {
                record.resize(width, None);
                record
            })
            .collect();

        Self {
            headers,
            records,
            separator,
        }
    }

    /// Reads a table with a header line from any reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not valid delimited text or if records
    /// have a different number of fields than the header.
    pub fn from_reader<R: io::Read>(reader: R, separator: u8) -> csv::Result<Self> {
        let mut reader = ReaderBuilder::new()
            .delimiter(separator)
            .has_headers(true)
            .from_reader(reader);

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut records = Vec::new();
        for record in reader.records() {
            records.push(record?.iter().map(to_cell).collect());
        }

        Ok(Self {
            headers,
            records,
            separator,
        })
    }

    /// Loads the table stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or is malformed.
    pub fn load(path: &str, separator: u8) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io_error("CSV".to_string(), path.to_string(), e))?;

        let table = Self::from_reader(file, separator)
            .map_err(|e| Error::csv_error("reading".to_string(), path.to_string(), e))?;

        debug!(
            "Loaded {} rows with columns {:?} from `{}`",
            table.len(),
            table.headers,
            path
        );

        Ok(table)
    }

    /// Writes the header line and all records using the table's separator.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `writer` fails.
    pub fn to_writer<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.separator)
            .from_writer(writer);

        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(record.iter().map(|cell| cell.as_deref().unwrap_or("")))?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Replaces the file at `path` with the current contents.
    ///
    /// The table is written to a temporary file next to `path` first, so a
    /// failed write leaves the existing file untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or moved into place.
    pub fn save(&self, path: &str) -> Result<()> {
        let io_error = |e| Error::io_error("CSV".to_string(), path.to_string(), e);

        let target = Path::new(path);
        let directory = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(directory).map_err(io_error)?;
        if let Ok(metadata) = fs::metadata(target) {
            file.as_file()
                .set_permissions(metadata.permissions())
                .map_err(io_error)?;
        }

        self.to_writer(&mut file)
            .map_err(|e| Error::csv_error("writing".to_string(), path.to_string(), e))?;

        file.persist(target).map_err(|e| io_error(e.error))?;

        debug!("Saved {} rows to `{}`", self.len(), path);
        Ok(())
    }

    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of `name`; an exact match is preferred over a case-insensitive one.
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .or_else(|| {
                let name = name.to_lowercase();
                self.headers
                    .iter()
                    .position(|header| header.to_lowercase() == name)
            })
    }

    /// Index of `name`, appending it as an empty column if it does not exist yet.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(index) = self.column_index(name) {
            return index;
        }

        debug!("Adding missing column `{}`", name);
        self.headers.push(name.to_string());
        for record in &mut self.records {
            record.push(None);
        }
        self.headers.len() - 1
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Row<'_> {
        Row {
            headers: &self.headers,
            cells: &self.records[index],
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.records[row][column].as_deref()
    }

    pub fn set_cell(&mut self, row: usize, column: usize, value: Cell) {
        self.records[row][column] = value;
    }

    /// True if any record has a value in `column`.
    #[must_use]
    pub fn has_labels(&self, column: usize) -> bool {
        self.records.iter().any(|record| record[column].is_some())
    }

    pub fn clear_column(&mut self, column: usize) {
        for record in &mut self.records {
            record[column] = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "date;text;amount;label\n2021-01-02;REWE Markt;12.5;\n2021-01-03;Shell;40;Car\n";

    fn sample() -> Table {
        Table::from_reader(SAMPLE.as_bytes(), b';').unwrap()
    }

    #[test]
    fn test_from_reader_maps_empty_fields_to_none() {
        let table = sample();
        assert_eq!(table.headers(), ["date", "text", "amount", "label"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cell(0, 3), None);
        assert_eq!(table.cell(1, 3), Some("Car"));
    }

    #[test]
    fn test_round_trip_keeps_separator_and_order() {
        let mut output = Vec::new();
        sample().to_writer(&mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), SAMPLE);
    }

    #[test]
    fn test_ragged_records_are_rejected() {
        let result = Table::from_reader("a,b\n1,2,3\n".as_bytes(), b',');
        assert!(result.is_err());
    }

    #[test]
    fn test_column_index_prefers_exact_match() {
        let table = Table::new(vec!["Label".to_string(), "label".to_string()], vec![], b',');
        assert_eq!(table.column_index("label"), Some(1));
        assert_eq!(table.column_index("LABEL"), Some(0));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_ensure_column_appends_empty_column() {
        let mut table = Table::from_reader("text\nfoo\nbar\n".as_bytes(), b',').unwrap();
        let column = table.ensure_column("label");
        assert_eq!(column, 1);
        assert_eq!(table.cell(1, column), None);
        assert!(!table.has_labels(column));
        assert_eq!(table.ensure_column("label"), 1);
    }

    #[test]
    fn test_has_labels_and_clear_column() {
        let mut table = sample();
        assert!(table.has_labels(3));
        table.clear_column(3);
        assert!(!table.has_labels(3));
    }

    #[test]
    fn test_row_view() {
        let table = sample();
        let row = table.row(0);
        assert_eq!(row.get("text"), Some("REWE Markt"));
        assert_eq!(row.get("label"), None);
        let names: Vec<&str> = row.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["date", "text", "amount", "label"]);
    }

    #[test]
    fn test_save_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "old\n").unwrap();

        sample().save(path.to_str().unwrap()).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_failed_save_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, SAMPLE).unwrap();

        let broken = Table {
            headers: vec!["a".to_string(), "b".to_string()],
            records: vec![vec![Some("1".to_string())]],
            separator: b',',
        };
        let result = broken.save(path.to_str().unwrap());

        assert!(matches!(result, Err(Error::Csv { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), SAMPLE);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_new_pads_short_records() {
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Some("1".to_string())]],
            b',',
        );
        assert_eq!(table.cell(0, 1), None);
    }
}
