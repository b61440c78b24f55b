//! Struct `Sample` represents a table of categorical records
//! read from a delimited text file or a dataframe.

/// Defines `Sample`.
pub mod sample_struct;
/// Defines `SampleReader`.
pub mod reader;


pub use reader::SampleReader;
pub use sample_struct::Sample;
