use polars::prelude::*;

use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::ops::Index;
use std::sync::Arc;

use crate::error::{Result, TreeError};
use crate::record::{Row, Schema};


/// Struct `Sample` holds a table of categorical records.
/// Every row shares the same [`Schema`].
#[derive(Debug, Clone)]
pub struct Sample {
    schema: Arc<Schema>,
    rows: Vec<Row>,
}


impl Sample {
    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Every column is cast to a string column;
    /// `target` becomes the last column and the label.
    /// This method takes the ownership for the given pair
    /// `data` and `target`.
    pub fn from_dataframe(data: DataFrame, target: Series) -> Result<Self> {
        let n_sample = data.height();
        if target.len() != n_sample {
            return Err(PolarsError::ShapeMismatch(
                "the target length differs from the data height".into()
            ).into());
        }
        let label = target.name().to_string();

        let mut columns = data.get_columns().to_vec();
        columns.push(target);

        let names = columns.iter()
            .map(|series| series.name().to_string())
            .collect::<Vec<_>>();

        let mut table = vec![Vec::with_capacity(names.len()); n_sample];
        for series in columns.iter() {
            let series = series.cast(&DataType::Utf8)?;
            let name = series.name();
            for (row, value) in series.utf8()?.into_iter().enumerate() {
                let value = value.ok_or_else(|| {
                    TreeError::MissingValue { field: name.to_string(), row }
                })?;
                table[row].push(value.to_string());
            }
        }

        let schema = Arc::new(Schema::new(names).with_label(label));
        let rows = table.into_iter()
            .map(|values| Row::new(Arc::clone(&schema), values))
            .collect();

        Ok(Self { schema, rows, })
    }


    /// Read a CSV format file to `Sample` type.
    /// See [`Sample::from_reader`] for the format.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        let path = file.as_ref();
        let file = File::open(path)
            .map_err(|e| {
                TreeError::io(format!("cannot open {}", path.display()), e)
            })?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read comma-separated values from [`BufReader`].
    ///
    /// Values are trimmed and kept as strings.
    /// Without a header, the columns are named `Feat. [1]`, `Feat. [2]`, ...
    /// after the width of the first line.
    /// A line may hold fewer values than the header
    /// (the trailing fields are absent), but not more.
    /// Blank lines are skipped.
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        let mut names: Option<Vec<String>> = None;
        let mut table = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                TreeError::io(format!("cannot read line {}", i + 1), e)
            })?;
            if line.trim().is_empty() { continue; }

            let xs = line.split(',')
                .map(|x| x.trim().to_string())
                .collect::<Vec<_>>();

            // The first line is either the header
            // or the width of a dummy header.
            if names.is_none() {
                if has_header {
                    names = Some(xs);
                    continue;
                }
                let dummy = (1..=xs.len())
                    .map(|i| format!("Feat. [{i}]"))
                    .collect();
                names = Some(dummy);
            }
            let expected = names.as_ref().map_or(0, |names| names.len());

            if xs.len() > expected {
                return Err(TreeError::Malformed {
                    line: i + 1,
                    expected,
                    got: xs.len(),
                });
            }
            table.push(xs);
        }

        let schema = Arc::new(Schema::new(names.unwrap_or_default()));
        let rows = table.into_iter()
            .map(|values| Row::new(Arc::clone(&schema), values))
            .collect();

        Ok(Self { schema, rows, })
    }


    /// Designate the column named `label` as the class label.
    pub fn set_label<S: AsRef<str>>(self, label: S) -> Result<Self> {
        let label = label.as_ref();
        if !self.schema.contains(label) {
            return Err(TreeError::UnknownLabel(label.to_string()));
        }

        let schema = (*self.schema).clone().with_label(label);
        let schema = Arc::new(schema);
        let rows = self.rows.into_iter()
            .map(|row| row.with_schema(Arc::clone(&schema)))
            .collect();

        Ok(Self { schema, rows, })
    }


    /// Returns the schema shared by the rows.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }


    /// Returns the rows of this sample.
    pub fn rows(&self) -> &[Row] {
        &self.rows[..]
    }


    /// Returns the rows with the label removed,
    /// ready to be classified.
    pub fn queries(&self) -> Vec<Row> {
        match self.schema.label() {
            Some(label) => {
                self.rows.iter()
                    .map(|row| row.without(label))
                    .collect()
            },
            None => self.rows.clone(),
        }
    }


    /// Returns the pair of the number of rows and columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.schema.fields().len())
    }


    /// Returns `true` if this sample has no row.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}


impl Index<usize> for Sample {
    type Output = Row;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.rows[idx]
    }
}
