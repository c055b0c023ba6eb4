//! bikeshare-explorer
//!
//! A small library + CLI for exploring historical US bikeshare trip data.
//! Pairs with the `bikeshare` binary.
//!
//! ### Features
//! - Load one of three fixed city tables (Chicago, New York City, Washington)
//! - Narrow by month and/or day of week
//! - Descriptive statistics: popular travel times, popular stations, trip
//!   duration aggregates, rider demographics
//! - Paginated raw-data viewer and an interactive session loop
//!
//! ### Example
//! ```no_run
//! use bikeshare_explorer::{City, DayFilter, Filters, MonthFilter, dataset, report, stats};
//!
//! let filters = Filters {
//!     city: City::Chicago,
//!     month: MonthFilter::All,
//!     day: DayFilter::All,
//! };
//! let trips = dataset::load_trips("data".as_ref(), &filters)?;
//! let times = stats::time_summary(&trips);
//! println!("{}", report::time_report(times.as_ref()));
//! # Ok::<(), bikeshare_explorer::dataset::DatasetError>(())
//! ```

pub mod dataset;
pub mod input;
pub mod models;
pub mod pager;
pub mod report;
pub mod session;
pub mod stats;

pub use models::{City, DayFilter, Filters, MonthFilter, Trip};
pub use session::Session;
