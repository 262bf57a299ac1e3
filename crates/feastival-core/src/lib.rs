//! Date filtering engine for the Feastival calendar dataset.
//!
//! This crate answers "what is celebrated on date X?" over a static calendar
//! dataset: a mapping from `yyyy-MM-dd` date labels to lists of event names.
//! It provides the two filtering operations ([`filter`] and [`filter_range`])
//! and the dataset file loader ([`DatasetStore`]).

pub mod filter;
pub mod store;

pub use filter::{day_portion, filter, filter_range, Dataset, FilterError, FilterResult};
pub use store::{DatasetStore, DatasetStoreError};
