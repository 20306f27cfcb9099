pub mod fields;
pub mod row;

use fields::FieldSet;
use row::Record;

/// Form labels in column order. Header and rows of one file must share this order.
pub const FIELDS: &[&str] = &[
    "ADO Organization Name",
    "ADO Project Name",
    "ADO Repository Name",
    "GitHub Organization Name",
    "GitHub Repository Name",
    "Requested By",
    "Are there any pipelines?",
    "Additional Notes",
];

/// Issue body → one record, values in the field set's order.
pub fn parse_body(body: &str, fields: &FieldSet) -> Record {
    let record = Record::new(fields.extract_all(body));
    if record.is_blank() {
        tracing::warn!("issue body contains none of the form labels");
    }
    record
}

// ── Tests ──
