//! Interactive confirmation of `baseValue`, one record at a time.
//!
//! The editor walks the list in two phases. While `Editing`, each record is
//! shown and the user confirms, replaces or supplies its value. The quit
//! sentinel switches to `Draining`, where the current record and every record
//! after it are copied through in abbreviated form without prompting.

use crate::domain::model::{CleanedRecord, EditOutcome, EditReport, Record};
use crate::domain::ports::Prompter;
use crate::utils::error::{EditorError, Result};
use serde_json::Value;

pub const CHANGE_PROMPT: &str =
    "Change baseValue? (Enter to keep, a new number to replace, q to quit): ";
pub const ENTER_PROMPT: &str = "Enter baseValue (q to quit): ";
pub const INVALID_KEEP_WARNING: &str = "Not a valid number, keeping the current value";
pub const VALUE_REQUIRED: &str = "baseValue cannot be empty, please enter a value";
pub const INVALID_NUMBER: &str = "Please enter a valid number";

#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Edited(CleanedRecord, EditOutcome),
    Quit,
}

#[derive(Debug)]
enum Reply {
    Quit,
    Empty,
    Number(i64),
    Invalid(EditorError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Editing,
    Draining,
}

/// 分類使用者輸入；輸入結束 (EOF) 等同於 q
fn classify(reply: Option<String>) -> Reply {
    let Some(input) = reply else {
        tracing::warn!("Console input closed, treating as quit");
        return Reply::Quit;
    };

    if input.eq_ignore_ascii_case("q") {
        return Reply::Quit;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Reply::Empty;
    }

    match trimmed.parse::<i64>() {
        Ok(number) => Reply::Number(number),
        Err(source) => Reply::Invalid(EditorError::ValueParse { input, source }),
    }
}

pub fn display_value(value: Option<&Value>, placeholder: &str) -> String {
    match value {
        None | Some(Value::Null) => placeholder.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Prompts for a single record and returns its cleaned form, or
/// [`EntryOutcome::Quit`] when the user asked to stop.
pub fn process_entry<P: Prompter + ?Sized>(
    record: &Record,
    index: usize,
    total: usize,
    prompter: &mut P,
    placeholder: &str,
) -> Result<EntryOutcome> {
    prompter.say("")?;
    prompter.say(&format!("Record ({}/{}):", index + 1, total))?;
    prompter.say(&format!(
        "objectName: {}",
        display_value(record.object_name.as_ref(), placeholder)
    ))?;
    prompter.say(&format!(
        "objectID: {}",
        display_value(record.object_id.as_ref(), placeholder)
    ))?;

    let mut cleaned = record.cleaned();

    if let Some(current) = record.current_value() {
        prompter.say(&format!("Current baseValue: {}", display_value(Some(current), placeholder)))?;

        let outcome = match classify(prompter.ask(CHANGE_PROMPT)?) {
            Reply::Quit => return Ok(EntryOutcome::Quit),
            Reply::Empty => {
                cleaned.base_value = Some(current.clone());
                EditOutcome::Kept
            }
            Reply::Number(number) => {
                cleaned.base_value = Some(Value::from(number));
                EditOutcome::Changed
            }
            Reply::Invalid(err) => {
                tracing::warn!(index, error = %err, "Invalid input, keeping current value");
                prompter.say(INVALID_KEEP_WARNING)?;
                cleaned.base_value = Some(current.clone());
                EditOutcome::Kept
            }
        };

        return Ok(EntryOutcome::Edited(cleaned, outcome));
    }

    loop {
        match classify(prompter.ask(ENTER_PROMPT)?) {
            Reply::Quit => return Ok(EntryOutcome::Quit),
            Reply::Empty => prompter.say(VALUE_REQUIRED)?,
            Reply::Number(number) => {
                cleaned.base_value = Some(Value::from(number));
                return Ok(EntryOutcome::Edited(cleaned, EditOutcome::Entered));
            }
            Reply::Invalid(err) => {
                tracing::debug!(index, error = %err, "Invalid input, asking again");
                prompter.say(INVALID_NUMBER)?;
            }
        }
    }
}

/// Runs the editor over every record. The returned report always holds
/// exactly one cleaned record per input record, in input order.
pub fn edit_records<P: Prompter + ?Sized>(
    records: &[Record],
    prompter: &mut P,
    placeholder: &str,
) -> Result<EditReport> {
    let total = records.len();
    let mut report = EditReport::with_capacity(total);
    let mut phase = Phase::Editing;

    prompter.say(&format!("Total records: {}", total))?;

    for (index, record) in records.iter().enumerate() {
        if phase == Phase::Editing {
            match process_entry(record, index, total, prompter, placeholder)? {
                EntryOutcome::Edited(cleaned, outcome) => {
                    tracing::debug!(index, ?outcome, "Record edited");
                    report.push_edited(cleaned, outcome);
                    continue;
                }
                EntryOutcome::Quit => {
                    tracing::info!(index, remaining = total - index, "Quit requested, draining");
                    report.quit_at = Some(index);
                    phase = Phase::Draining;
                }
            }
        }

        report.push_drained(record.abbreviate());
    }

    Ok(report)
}
