use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for reading and writing a text data file.
///
/// Implementors keep enough of the original text to write the file back
/// out with only the records they changed being different.
pub trait DataFile: Sized {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads the whole file from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the content is not valid UTF-8.
    fn read_from(reader: &mut impl BufRead) -> Result<Self, Self::Error>;

    /// Writes the file, including every unmodified line, to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(&self, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Reads the file from a path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    /// Writes the file to a path, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
