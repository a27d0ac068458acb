use std::fmt;

/// Descriptive statistics summarizing a dataset.
///
/// This structure contains common measures of central tendency and
/// dispersion for a dataset of `f32` values.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of values in the dataset.
    pub count: usize,
    /// The minimum value in the dataset.
    pub min: f32,
    /// The maximum value in the dataset.
    pub max: f32,
    /// The arithmetic mean (average) of the dataset.
    pub mean: f32,
    /// The median value of the dataset. For an even count this is the mean of
    /// the two middle values.
    pub median: f32,
    /// The population variance of the dataset.
    pub variance: f32,
    /// The population standard deviation of the dataset.
    pub std_dev: f32,
}

impl DescriptiveStats {
    /// Computes descriptive statistics from unsorted values.
    ///
    /// Returns `None` if the dataset is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use solitaire_stats::descriptive::DescriptiveStats;
    /// let values = [5.0, 2.0, 4.0, 1.0, 3.0];
    /// let stats = DescriptiveStats::new(values).unwrap();
    /// assert_eq!(stats.min, 1.0);
    /// assert_eq!(stats.max, 5.0);
    /// assert_eq!(stats.mean, 3.0);
    /// assert_eq!(stats.median, 3.0);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f32::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from integer counts such as game scores.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_counts<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = usize>,
    {
        Self::new(values.into_iter().map(|v| v as f32))
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// Returns `None` if the dataset is empty.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f32]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f32;
        let mean = sorted_values.iter().copied().sum::<f32>() / n;
        let mid = count / 2;
        let median = if count % 2 == 0 {
            f32::midpoint(sorted_values[mid - 1], sorted_values[mid])
        } else {
            sorted_values[mid]
        };
        let variance = sorted_values
            .iter()
            .map(|v| (v - mean).powi(2))
            .sum::<f32>()
            / n;

        Some(Self {
            count,
            min,
            max,
            mean,
            median,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

impl fmt::Display for DescriptiveStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "min={:.2} median={:.2} mean={:.2} max={:.2} sd={:.2}",
            self.min, self.median, self.mean, self.max, self.std_dev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(DescriptiveStats::new([]).is_none());
        assert!(DescriptiveStats::from_counts([]).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([7.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert_eq!(stats.min, 7.0);
        assert_eq!(stats.median, 7.0);
        assert_eq!(stats.variance, 0.0);
    }

    #[test]
    fn test_even_count_median() {
        let stats = DescriptiveStats::from_counts([40, 10, 30, 20]).unwrap();
        assert_eq!(stats.median, 25.0);
        assert_eq!(stats.mean, 25.0);
        assert_eq!(stats.variance, 125.0);
    }

    #[test]
    fn test_display() {
        let stats = DescriptiveStats::new([1.0, 3.0]).unwrap();
        assert_eq!(
            stats.to_string(),
            "min=1.00 median=2.00 mean=2.00 max=3.00 sd=1.00"
        );
    }

    #[test]
    #[should_panic(expected = "sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = DescriptiveStats::from_sorted(&[2.0, 1.0]);
    }
}
