//! The interactive session loop: one iteration selects filters, loads the
//! table, prints the four reports, offers the raw-data pager, then asks
//! whether to restart.

use crate::dataset;
use crate::input::{Prompter, ask_yes_no, select_filters};
use crate::models::Trip;
use crate::pager::Pager;
use crate::report;
use crate::stats;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

const RULE: &str = "----------------------------------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Running,
    Done,
}

/// Drives the whole tool against any prompt source and output sink.
pub struct Session<P, W> {
    prompter: P,
    out: W,
    data_dir: PathBuf,
}

impl<P: Prompter, W: Write> Session<P, W> {
    pub fn new(prompter: P, out: W, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            prompter,
            out,
            data_dir: data_dir.into(),
        }
    }

    /// Run iterations until the user declines to restart. Only a dataset
    /// configuration problem (missing or malformed backing file) or a broken
    /// output stream ends the session with an error.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "Hello! Let's explore some US bikeshare data!")?;
        let mut state = State::Running;
        while state == State::Running {
            self.run_once()?;
            let restart = ask_yes_no(
                &mut self.prompter,
                "\nWould you like to restart? Enter yes or no.\n",
            )?;
            state = if restart { State::Running } else { State::Done };
        }
        Ok(())
    }

    fn run_once(&mut self) -> Result<()> {
        let filters = select_filters(&mut self.prompter)?;
        log::info!("exploring {} data", filters.city);
        let trips = dataset::load_trips(&self.data_dir, &filters)
            .with_context(|| format!("loading trip data for {}", filters.city))?;

        let started = Instant::now();
        let body = report::time_report(stats::time_summary(&trips).as_ref());
        self.emit("Calculating The Most Frequent Times of Travel...", &body, started)?;

        let started = Instant::now();
        let body = report::station_report(stats::station_summary(&trips).as_ref());
        self.emit("Calculating The Most Popular Stations and Trip...", &body, started)?;

        let started = Instant::now();
        let body = report::duration_report(stats::duration_summary(&trips).as_ref());
        self.emit("Calculating Trip Duration...", &body, started)?;

        let started = Instant::now();
        let body = report::user_report(stats::user_summary(&trips, filters.city).as_ref(), filters.city);
        self.emit("Calculating User Stats...", &body, started)?;

        self.page_raw_data(&trips)?;
        Ok(())
    }

    fn emit(&mut self, title: &str, body: &str, started: Instant) -> Result<()> {
        writeln!(self.out, "\n{title}\n")?;
        writeln!(self.out, "{body}")?;
        writeln!(self.out, "\nThis took {:.3} seconds.", started.elapsed().as_secs_f64())?;
        writeln!(self.out, "{RULE}")?;
        Ok(())
    }

    fn page_raw_data(&mut self, trips: &[Trip]) -> Result<()> {
        let mut pager = Pager::new(trips);
        let mut wants = ask_yes_no(
            &mut self.prompter,
            "\nWould you like to see 5 rows of raw data? Enter yes or no.\n",
        )?;
        while wants {
            match pager.next_page() {
                Some(page) => {
                    for trip in page {
                        writeln!(self.out, "{}", report::trip_line(trip))?;
                    }
                }
                None => {
                    writeln!(self.out, "No more data to show.")?;
                    break;
                }
            }
            wants = ask_yes_no(
                &mut self.prompter,
                "Would you like to see 5 more rows? Enter yes or no.\n",
            )?;
        }
        Ok(())
    }
}
