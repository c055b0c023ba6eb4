//! Interactive prompting, isolated behind the [`Prompter`] trait so the
//! session loop can be driven by canned answers in tests.

use crate::models::{City, DayFilter, Filters, MonthFilter};
use anyhow::{Result, bail};
use chrono::{Month, Weekday};
use std::collections::VecDeque;
use std::io::{self, Write};

/// A source of answers to interactive prompts.
///
/// `Ok(None)` means the input stream ended. That is the one way out of the
/// otherwise unbounded re-prompt loops: a closed stdin terminates the
/// session instead of spinning on an empty reader.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Prompter backed by stdin/stdout.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(prompt.as_bytes())?;
        stdout.flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Prompter that replays a fixed answer script; once the script runs out it
/// reports end of input. Used by the test suite.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every prompt asked, in order.
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I>(answers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.transcript.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Months offered at the filter prompt. The shipped tables cover the first
/// half of the year only, so the vocabulary stops at June.
const MONTH_CHOICES: [(&str, Month); 6] = [
    ("january", Month::January),
    ("february", Month::February),
    ("march", Month::March),
    ("april", Month::April),
    ("may", Month::May),
    ("june", Month::June),
];

const DAY_CHOICES: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

pub(crate) fn parse_month_choice(answer: &str) -> Option<MonthFilter> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("all") {
        return Some(MonthFilter::All);
    }
    MONTH_CHOICES
        .iter()
        .find(|(name, _)| answer.eq_ignore_ascii_case(name))
        .map(|(_, m)| MonthFilter::Month(*m))
}

pub(crate) fn parse_day_choice(answer: &str) -> Option<DayFilter> {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("all") {
        return Some(DayFilter::All);
    }
    DAY_CHOICES
        .iter()
        .find(|(name, _)| answer.eq_ignore_ascii_case(name))
        .map(|(_, d)| DayFilter::Day(*d))
}

fn required(answer: Option<String>) -> Result<String> {
    match answer {
        Some(a) => Ok(a),
        None => bail!("input ended before a valid choice was made"),
    }
}

/// Collect one validated (city, month, day) selection, re-prompting on any
/// answer outside the vocabulary.
pub fn select_filters<P: Prompter>(prompter: &mut P) -> Result<Filters> {
    let city = loop {
        let answer = required(
            prompter.ask("Would you like to see data for Chicago, New York City, or Washington?\n")?,
        )?;
        if let Some(city) = City::parse(&answer) {
            break city;
        }
    };
    let month = loop {
        let answer = required(prompter.ask(
            "Which month - January, February, March, April, May, or June? Type \"all\" for no month filter.\n",
        )?)?;
        if let Some(month) = parse_month_choice(&answer) {
            break month;
        }
    };
    let day = loop {
        let answer = required(prompter.ask(
            "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday? Type \"all\" for no day filter.\n",
        )?)?;
        if let Some(day) = parse_day_choice(&answer) {
            break day;
        }
    };
    Ok(Filters { city, month, day })
}

/// Yes/no prompt. Only a case-insensitive "yes" is affirmative; anything
/// else, including end of input, counts as "no".
pub fn ask_yes_no<P: Prompter>(prompter: &mut P, prompt: &str) -> io::Result<bool> {
    let answer = prompter.ask(prompt)?;
    Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("yes")))
}
