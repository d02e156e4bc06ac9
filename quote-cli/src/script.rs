//! CSV loader for scripted wizard sessions.
//!
//! ## CSV Format
//!
//! Each row is one user action, replayed in file order. Headers are matched
//! by name. `action`, `step` and `field` are trimmed; `value` is passed on
//! exactly as written.
//!
//! | Column   | Used by                                  | Notes                              |
//! |----------|------------------------------------------|------------------------------------|
//! | `action` | all                                      | See the action table below         |
//! | `step`   | every action except `confirm`, `dismiss` | `company-details`, `employee-demographic`, `insurance-plan` |
//! | `field`  | `change`, `blur`                         | Field name within the step, e.g. `tax_id` |
//! | `value`  | `change`                                 | Raw input; empty clears the field  |
//!
//! ### Actions
//!
//! | Action     | Event                          |
//! |------------|--------------------------------|
//! | `change`   | a field's value changed        |
//! | `blur`     | a field lost focus             |
//! | `submit`   | the step's form was submitted  |
//! | `previous` | "Previous" pressed on the step |
//! | `navigate` | sidebar jump to the step       |
//! | `edit`     | summary "edit" for the step    |
//! | `confirm`  | quote confirmed                |
//! | `dismiss`  | summary closed                 |
//!
//! ### Example
//!
//! ```csv
//! action,step,field,value
//! change,company-details,name,Acme Corp
//! blur,company-details,name,
//! submit,company-details,,
//! ```

use std::path::{Path, PathBuf};

use quote_core::WizardEvent;
use quote_core::models::{Field, ParseFieldError, ParseStepError, StepId};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ScriptRow {
    action: String,
    step: Option<String>,
    field: Option<String>,
    value: Option<String>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a session script.
///
/// `row` is always the 1-based data row (header = row 0).
#[derive(Debug, thiserror::Error)]
pub enum ScriptLoadError {
    #[error("cannot read script '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The underlying CSV deserialisation failed.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised action '{action}' on row {row}")]
    UnknownAction { action: String, row: usize },

    #[error("action '{action}' on row {row} needs a '{column}' value")]
    MissingColumn {
        action: String,
        column: &'static str,
        row: usize,
    },

    #[error("row {row}: {source}")]
    UnknownStep {
        row: usize,
        #[source]
        source: ParseStepError,
    },

    #[error("row {row}: {source}")]
    UnknownField {
        row: usize,
        #[source]
        source: ParseFieldError,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn required<'a>(
    cell: &'a Option<String>,
    column: &'static str,
    action: &str,
    row: usize,
) -> Result<&'a str, ScriptLoadError> {
    match cell.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ScriptLoadError::MissingColumn {
            action: action.to_string(),
            column,
            row,
        }),
    }
}

fn step_of(
    row: &ScriptRow,
    row_number: usize,
) -> Result<StepId, ScriptLoadError> {
    let name = required(&row.step, "step", &row.action, row_number)?;
    StepId::parse(name).map_err(|source| ScriptLoadError::UnknownStep {
        row: row_number,
        source,
    })
}

fn field_of(
    row: &ScriptRow,
    row_number: usize,
) -> Result<Field, ScriptLoadError> {
    let step = step_of(row, row_number)?;
    let name = required(&row.field, "field", &row.action, row_number)?;
    Field::parse(step, name).map_err(|source| ScriptLoadError::UnknownField {
        row: row_number,
        source,
    })
}

/// Convert a single CSV row into a WizardEvent.
fn convert_row(
    row: ScriptRow,
    row_number: usize,
) -> Result<WizardEvent, ScriptLoadError> {
    let event = match row.action.trim() {
        "change" => {
            let field = field_of(&row, row_number)?;
            WizardEvent::field_changed(field, row.value.unwrap_or_default())
        }
        "blur" => WizardEvent::FieldBlurred(field_of(&row, row_number)?),
        "submit" => WizardEvent::StepSubmitted(step_of(&row, row_number)?),
        "previous" => WizardEvent::Previous(step_of(&row, row_number)?),
        "navigate" => WizardEvent::NavigateTo(step_of(&row, row_number)?),
        "edit" => WizardEvent::EditRequested(step_of(&row, row_number)?),
        "confirm" => WizardEvent::QuoteConfirmed,
        "dismiss" => WizardEvent::SummaryDismissed,
        _ => {
            return Err(ScriptLoadError::UnknownAction {
                action: row.action.trim().to_string(),
                row: row_number,
            });
        }
    };
    Ok(event)
}

/// Parse CSV text and return the scripted events in file order.
///
/// # Errors
///
/// * [`ScriptLoadError::Parse`] if the CSV is structurally invalid.
/// * [`ScriptLoadError::UnknownAction`], [`ScriptLoadError::MissingColumn`],
///   [`ScriptLoadError::UnknownStep`] or [`ScriptLoadError::UnknownField`]
///   for a row that does not describe a valid action.
pub fn load_from_str(input: &str) -> Result<Vec<WizardEvent>, ScriptLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<ScriptRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Read a script from disk and delegate to [`load_from_str`].
///
/// # Errors
///
/// [`ScriptLoadError::Read`] when the file cannot be read, otherwise as
/// [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<WizardEvent>, ScriptLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ScriptLoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
