//! Statistical summaries for training reports.
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//!
//! # Examples
//!
//! ```
//! use solitaire_stats::descriptive::DescriptiveStats;
//!
//! let fitness = [120, 80, 400, 260];
//! let stats = DescriptiveStats::from_counts(fitness).unwrap();
//! assert_eq!(stats.max, 400.0);
//! assert_eq!(stats.mean, 215.0);
//! ```

pub mod descriptive;
