use rand::prelude::*;
use colored::Colorize;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates
/// pairs of training/test records for cross validation.
/// The records are cut into `n_folds` contiguous blocks
/// whose sizes differ by one at most,
/// so every record lands in exactly one test set.
/// The `i`'th test set is the `i`'th block;
/// the training set is everything else.
/// With fewer records than folds, there is one fold per record.
/// # Example
/// ```no_run
/// use simpletree::prelude::*;
/// use simpletree::research::{CrossValidation, zero_one_loss};
///
/// let sample = SampleReader::default()
///     .file("/path/to/transport.csv")
///     .has_header(true)
///     .label_column("transportation")
///     .read()
///     .unwrap();
/// let cv = CrossValidation::new(sample.rows())
///     .n_folds(5)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let mut tree = DecisionTreeBuilder::new().build();
///     tree.learn(&train).unwrap();
///     let loss = zero_one_loss(&test, &tree, "transportation").unwrap();
///     println!("[test: {loss}]");
/// }
/// ```
pub struct CrossValidation<'a, R> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    records: &'a [R],
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a, R> CrossValidation<'a, R> {
    /// Construct a new instance of `CrossValidation.`
    /// By default, 5 folds over the records in the given order.
    #[inline]
    pub fn new(records: &'a [R]) -> Self {
        let n_folds = 5;
        let ix = (0..records.len()).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            seed: 1234,
            verbose: false,
            n_folds,
            records,
            ix,
        }
    }


    /// Set the number of folds.
    /// Default value is `5.`
    /// `0` yields no fold; `1` tests on every record with an empty
    /// training set.
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        self.n_folds = n_folds;
        self
    }


    /// Returns the number of train/test pairs this iterator yields.
    #[inline]
    pub fn len_folds(&self) -> usize {
        self.n_folds.min(self.records.len())
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the records.
    /// By default, `CrossValidation` does not shuffle them.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }
}


impl<R: Clone> CrossValidation<'_, R> {
    /// Returns the training/test records for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Vec<R>, Vec<R>) {
        let n_records = self.records.len();
        let n_folds = self.len_folds();
        let start = i * n_records / n_folds;
        let end = (i + 1) * n_records / n_folds;

        let mut train = Vec::with_capacity(n_records - (end - start));
        let mut test = Vec::with_capacity(end - start);
        for (k, &ii) in self.ix.iter().enumerate() {
            let record = self.records[ii].clone();
            if (start..end).contains(&k) {
                test.push(record);
            } else {
                train.push(record);
            }
        }
        (train, test)
    }
}


impl<R: Clone> Iterator for CrossValidation<'_, R> {
    type Item = (Vec<R>, Vec<R>);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.len_folds() { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        if self.verbose {
            let train_size = output.0.len();
            let test_size = output.1.len();
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
