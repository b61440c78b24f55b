use std::path::Path;

use super::sample_struct::Sample;
use crate::error::{Result, TreeError};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
/// # Example
/// The following code is a simple example to read a CSV file.
/// ```no_run
/// use simpletree::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .label_column("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SampleReader<P> {
    file: Option<P>,
    has_header: bool,
    label: Option<String>,
}


impl<P> Default for SampleReader<P> {
    fn default() -> Self {
        Self { file: None, has_header: false, label: None, }
    }
}


impl<P> SampleReader<P> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }


    /// Set the column name that is used for the class label.
    /// Without it, the label must be designated
    /// when building the decision tree.
    pub fn label_column<T: Into<String>>(mut self, column: T) -> Self {
        self.label = Some(column.into());
        self
    }
}


impl<P> SampleReader<P>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }


    /// Reads the file based on the arguments,
    /// and returns [`Sample`].
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file.ok_or(TreeError::MissingFile)?;

        let sample = Sample::from_csv(file, self.has_header)?;
        match self.label {
            Some(label) => sample.set_label(label),
            None => Ok(sample),
        }
    }
}
