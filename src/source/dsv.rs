use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::RecordSource;
use crate::Error;

/// Delimiter-separated record stream over any reader.
///
/// Rows of unequal length are passed through as-is; the loaders decide which
/// rows are usable. The first row is not treated specially here; header
/// handling belongs to the loaders.
#[derive(Debug)]
pub struct DsvSource<R: Read> {
    reader: csv::Reader<R>,
}

impl DsvSource<File> {
    /// Open a comma-separated file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to open file '{}': {}", path.display(), e),
            )
        })?;
        Ok(Self::new(file))
    }
}

impl<R: Read> DsvSource<R> {
    /// Comma-separated records over `reader`.
    pub fn new(reader: R) -> Self {
        Self::with_delimiter(reader, b',')
    }

    /// Records separated by an arbitrary single-byte delimiter.
    pub fn with_delimiter(reader: R, delimiter: u8) -> Self {
        let reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(delimiter)
            .from_reader(reader);
        Self { reader }
    }
}

impl<R: Read> RecordSource for DsvSource<R> {
    fn next_record(&mut self) -> Result<Option<Vec<String>>, Error> {
        let mut record = csv::StringRecord::new();
        if self.reader.read_record(&mut record)? {
            Ok(Some(record.iter().map(str::to_owned).collect()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn drain(mut src: impl RecordSource) -> Vec<Vec<String>> {
        let mut rows = Vec::new();
        while let Some(row) = src.next_record().unwrap() {
            rows.push(row);
        }
        rows
    }

    #[test]
    fn yields_fields_in_row_order() {
        let src = DsvSource::new(Cursor::new("a,b\n1,2\n3,4\n"));
        let rows = drain(src);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["a", "b"]);
        assert_eq!(rows[2], ["3", "4"]);
    }

    #[test]
    fn keeps_short_and_long_rows() {
        let src = DsvSource::new(Cursor::new("a,b\nonly\n1,2,extra\n"));
        let rows = drain(src);
        assert_eq!(rows[1], ["only"]);
        assert_eq!(rows[2], ["1", "2", "extra"]);
    }

    #[test]
    fn honors_quoting_and_delimiter() {
        let src = DsvSource::with_delimiter(Cursor::new("\"x;y\";z\n"), b';');
        let rows = drain(src);
        assert_eq!(rows[0], ["x;y", "z"]);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DsvSource::from_path(Path::new("/nonexistent/stops.csv")).unwrap_err();
        assert!(matches!(err, Error::IoError(_)));
    }
}
