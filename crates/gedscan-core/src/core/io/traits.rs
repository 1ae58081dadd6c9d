use crate::core::models::tree::FamilyTree;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading genealogical file formats into a [`FamilyTree`].
pub trait GenealogyFile {
    /// Format-specific information gathered while reading.
    type Metadata;

    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Reads a family tree from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed tree and associated metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_from(
        &self,
        reader: &mut impl BufRead,
    ) -> Result<(FamilyTree, Self::Metadata), Self::Error>;

    /// Reads a family tree from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the parsed tree and associated metadata.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read.
    fn read_from_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(FamilyTree, Self::Metadata), Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read_from(&mut reader)
    }
}
