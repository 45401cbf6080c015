//! The numbered menu loop.
//!
//! Platform-independent: every interaction goes through the
//! [`Console`] trait. Load, find, and both sorts are timed with
//! `std::time::Instant` and reported in milliseconds and seconds.

use std::time::{Duration, Instant};

use bidstore_core::{display, Bid};
use bidstore_ingest::parse_money;

use crate::console::{Console, ConsoleError, LineEvent};
use crate::session::Session;

const MENU: &str = "\
Menu:
  1. Enter a Bid
  2. Load Bids
  3. Display All Bids
  4. Find Bid
  5. Remove Bid
  6. Selection Sort All Bids
  7. Quick Sort All Bids
  9. Exit";

/// Run the menu until the user exits.
pub fn run(console: &mut impl Console, session: &mut Session) -> Result<(), ConsoleError> {
    loop {
        console.write_line(MENU)?;

        let choice = match console.read_line("Enter choice: ")? {
            LineEvent::Line(line) => line.trim().to_string(),
            LineEvent::Interrupt => continue,
            LineEvent::Eof => break,
        };

        match choice.as_str() {
            "1" => enter_bid(console, session)?,
            "2" => load_bids(console, session)?,
            "3" => {
                for line in session.listing() {
                    console.write_line(&line)?;
                }
            }
            "4" => find_bid(console, session)?,
            "5" => remove_bid(console, session)?,
            "6" => {
                let (count, elapsed) = timed(|| session.sort_selection());
                console.write_line(&format!("{} bids sorted", count))?;
                console.write_line(&format_timing(elapsed))?;
            }
            "7" => {
                let (count, elapsed) = timed(|| session.sort_quick());
                console.write_line(&format!("{} bids sorted", count))?;
                console.write_line(&format_timing(elapsed))?;
            }
            "9" | "exit" | "quit" => break,
            "" => {}
            other => {
                console.write_error(&format!("{} is not a menu option", other))?;
            }
        }
    }

    console.write_line("Good bye.")
}

fn enter_bid(console: &mut impl Console, session: &mut Session) -> Result<(), ConsoleError> {
    let Some(id) = prompt(console, "Enter Id: ")? else {
        return Ok(());
    };
    let Some(title) = prompt(console, "Enter title: ")? else {
        return Ok(());
    };
    let Some(fund) = prompt(console, "Enter fund: ")? else {
        return Ok(());
    };
    let Some(amount_raw) = prompt(console, "Enter amount: ")? else {
        return Ok(());
    };

    let bid = Bid::new(id, title, fund, parse_money(&amount_raw));
    match session.enter(bid.clone()) {
        Ok(()) => console.write_line(&display::format_bid(&bid)),
        Err(e) => console.write_error(&e.to_string()),
    }
}

fn load_bids(console: &mut impl Console, session: &mut Session) -> Result<(), ConsoleError> {
    let (result, elapsed) = timed(|| session.load());
    match result {
        Ok(report) => {
            console.write_line(&format!("{} bids read", report.inserted))?;
            if report.skipped > 0 {
                console.write_error(&format!("{} bids rejected by the store", report.skipped))?;
            }
            console.write_line(&format_timing(elapsed))
        }
        Err(e) => console.write_error(&e.to_string()),
    }
}

fn find_bid(console: &mut impl Console, session: &mut Session) -> Result<(), ConsoleError> {
    let Some(id) = prompt_key(console, session)? else {
        return Ok(());
    };

    let (result, elapsed) = timed(|| session.find(&id).map(|found| found.cloned()));
    match result {
        Ok(found) => {
            console.write_line(&display::format_search_result(&id, found.as_ref()))?;
            console.write_line(&format_timing(elapsed))
        }
        Err(e) => console.write_error(&e.to_string()),
    }
}

fn remove_bid(console: &mut impl Console, session: &mut Session) -> Result<(), ConsoleError> {
    let Some(id) = prompt_key(console, session)? else {
        return Ok(());
    };

    match session.remove(&id) {
        Ok(true) => console.write_line(&format!("Bid Id {} removed.", id)),
        Ok(false) => console.write_line(&display::format_not_found(&id)),
        Err(e) => console.write_error(&e.to_string()),
    }
}

/// Prompt for a bid id, falling back to the session default on blank
/// input.
fn prompt_key(
    console: &mut impl Console,
    session: &Session,
) -> Result<Option<String>, ConsoleError> {
    let label = format!("Bid Id [{}]: ", session.default_key());
    match prompt_allow_blank(console, &label)? {
        Some(id) if id.is_empty() => Ok(Some(session.default_key().to_string())),
        other => Ok(other),
    }
}

/// Prompt for one non-blank field; `None` means the user cancelled.
fn prompt(console: &mut impl Console, label: &str) -> Result<Option<String>, ConsoleError> {
    match prompt_allow_blank(console, label)? {
        Some(value) if value.is_empty() => Ok(None),
        other => Ok(other),
    }
}

fn prompt_allow_blank(
    console: &mut impl Console,
    label: &str,
) -> Result<Option<String>, ConsoleError> {
    match console.read_line(label)? {
        LineEvent::Line(line) => Ok(Some(line.trim().to_string())),
        LineEvent::Interrupt | LineEvent::Eof => Ok(None),
    }
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

fn format_timing(elapsed: Duration) -> String {
    format!(
        "time: {} ms\ntime: {} seconds",
        elapsed.as_millis(),
        elapsed.as_secs_f64()
    )
}
