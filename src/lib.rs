pub mod csv_out;
pub mod error;
pub mod issue;
pub mod parser;
pub mod settings;

use std::path::Path;

use tracing::info;

use csv_out::AppendOutcome;
use error::Result;
use parser::fields::FieldSet;
use parser::row::Record;
use parser::FIELDS;
use settings::Settings;

/// Load the issue at `input`, extract the form fields and append them to `output`.
///
/// Everything that can fail on the input side (read, parse, label compilation)
/// happens before the output file is opened.
pub fn run(input: &Path, output: &Path, settings: &Settings) -> Result<AppendOutcome> {
    let issue = issue::load(input)?;
    info!(
        input = %input.display(),
        output = %output.display(),
        number = ?issue.number,
        title = issue.title.as_deref().unwrap_or(""),
        "processing issue"
    );

    let fields = FieldSet::compile(FIELDS, settings.label_mode)?;
    let quoting = settings.quoting();
    let header = Record::header(fields.labels()).to_line(quoting)?;
    let row = parser::parse_body(&issue.body, &fields).to_line(quoting)?;

    let outcome = csv_out::append_row(output, &header, &row)?;
    if outcome.header_written {
        info!(output = %output.display(), "created CSV with header");
    }
    info!(output = %output.display(), "appended row");
    Ok(outcome)
}

// ── Tests ──
