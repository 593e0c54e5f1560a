//! Line-based stdin prompts with validation.
//!
//! Each prompt re-asks until the input is valid, so the store only ever
//! sees validated values. The `*_or_blank` variants accept an empty
//! entry, which the edit flow treats as "leave the field unchanged".

use crate::types::Priority;
use chrono::{Local, NaiveDate};
use colored::Colorize;
use std::io::{self, Write};

/// Print a prompt without a trailing newline and read one trimmed line.
fn read_line(prompt: &str) -> io::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Prompt until a non-empty value is entered.
pub fn prompt_required(label: &str) -> io::Result<String> {
    loop {
        let value = read_line(&format!("{label}: "))?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("{}", format!("{label} must not be empty").red());
    }
}

/// Prompt once; an empty answer is allowed.
pub fn prompt_optional(label: &str) -> io::Result<String> {
    read_line(&format!("{label}: "))
}

/// Prompt for a due date in `YYYY-MM-DD` form. Rejects malformed dates
/// and dates before today. `allow_blank` lets an empty entry through as
/// `None`.
fn prompt_due_date(allow_blank: bool) -> io::Result<Option<NaiveDate>> {
    loop {
        let value = read_line("Due date (YYYY-MM-DD): ")?;
        if value.is_empty() && allow_blank {
            return Ok(None);
        }
        match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Err(_) => println!("{}", "Invalid date format".red()),
            Ok(date) if date < Local::now().date_naive() => {
                println!("{}", "Due date must not be in the past".red());
            }
            Ok(date) => return Ok(Some(date)),
        }
    }
}

/// Prompt until a valid due date is entered.
pub fn prompt_due_date_required() -> io::Result<NaiveDate> {
    loop {
        if let Some(date) = prompt_due_date(false)? {
            return Ok(date);
        }
    }
}

/// Prompt for a due date, accepting a blank entry as `None`.
pub fn prompt_due_date_or_blank() -> io::Result<Option<NaiveDate>> {
    prompt_due_date(true)
}

/// Prompt for a priority from a numbered menu. `allow_blank` lets an
/// empty entry through as `None`.
fn prompt_priority(allow_blank: bool) -> io::Result<Option<Priority>> {
    loop {
        let value = read_line("Priority (1 - high, 2 - medium, 3 - low): ")?;
        match value.as_str() {
            "" if allow_blank => return Ok(None),
            "1" => return Ok(Some(Priority::High)),
            "2" => return Ok(Some(Priority::Medium)),
            "3" => return Ok(Some(Priority::Low)),
            _ => println!("{}", "Invalid choice".red()),
        }
    }
}

/// Prompt until a priority is chosen.
pub fn prompt_priority_required() -> io::Result<Priority> {
    loop {
        if let Some(priority) = prompt_priority(false)? {
            return Ok(priority);
        }
    }
}

/// Prompt for a priority, accepting a blank entry as `None`.
pub fn prompt_priority_or_blank() -> io::Result<Option<Priority>> {
    prompt_priority(true)
}

/// Prompt for a task id until a valid integer is entered.
pub fn prompt_task_id() -> io::Result<u64> {
    loop {
        let value = read_line("Task id: ")?;
        match value.parse() {
            Ok(id) => return Ok(id),
            Err(_) => println!("{}", "Task id must be an integer".red()),
        }
    }
}
