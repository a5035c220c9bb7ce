//! Strict schema validation turning raw rows into [`EmployeeRecord`]s.
//!
//! Every row must pass through [`validate`] before it becomes visible outside
//! a source adapter. Together with the fixed attribute set of
//! [`EmployeeRecord`], this is the enforcement point for the "no sensitive
//! column ever leaves the system" invariant: extra keys in the input are
//! simply never copied.

use crate::domain::entities::{EmployeeRecord, RawRow, RawValue};
use crate::error::SchemaViolation;

/// The identifier may arrive under either key, depending on the store.
const ID_KEYS: [&str; 2] = ["id", "employee_id"];

/// Validates a raw row and constructs an [`EmployeeRecord`].
///
/// Construction is all-or-nothing: any broken rule fails the whole row.
///
/// # Errors
///
/// - [`SchemaViolation::MissingField`] when a required key is absent or null
/// - [`SchemaViolation::InvalidId`] when the id is not a positive integer
/// - [`SchemaViolation::WrongType`] when `name` or `clearance_level` is not text
/// - [`SchemaViolation::EmptyName`] when the name trims to nothing
pub fn validate(raw: &RawRow) -> Result<EmployeeRecord, SchemaViolation> {
    let employee_id = validate_id(raw)?;
    let name = validate_text_field(raw, "name")?;
    if name.trim().is_empty() {
        return Err(SchemaViolation::EmptyName);
    }
    let clearance_level = validate_text_field(raw, "clearance_level")?;

    Ok(EmployeeRecord {
        employee_id,
        name: name.to_string(),
        clearance_level: clearance_level.to_string(),
    })
}

/// Validates a batch of rows under the skip-and-report policy.
///
/// Rows that fail validation are logged at `warn` with their position in
/// iteration order and skipped; the rest of the listing survives. This is
/// the one place the policy is implemented so both source variants apply it
/// identically.
pub fn validate_all(rows: &[RawRow]) -> Vec<EmployeeRecord> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0usize;

    for (idx, raw) in rows.iter().enumerate() {
        match validate(raw) {
            Ok(record) => records.push(record),
            Err(violation) => {
                skipped += 1;
                tracing::warn!(row = idx, %violation, "skipping row that failed schema validation");
            }
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, total = rows.len(), "listing produced with skipped rows");
    }

    records
}

fn validate_id(raw: &RawRow) -> Result<i64, SchemaViolation> {
    let value = ID_KEYS
        .iter()
        .find_map(|key| raw.get(*key))
        .filter(|v| !matches!(v, RawValue::Null))
        .ok_or(SchemaViolation::MissingField("employee_id"))?;

    match value.as_integer() {
        Some(id) if id > 0 => Ok(id),
        _ => Err(SchemaViolation::InvalidId(describe(value))),
    }
}

fn validate_text_field<'a>(
    raw: &'a RawRow,
    field: &'static str,
) -> Result<&'a str, SchemaViolation> {
    let value = raw
        .get(field)
        .filter(|v| !matches!(v, RawValue::Null))
        .ok_or(SchemaViolation::MissingField(field))?;

    value.as_text().ok_or(SchemaViolation::WrongType {
        field,
        expected: "text",
    })
}

fn describe(value: &RawValue) -> String {
    match value {
        RawValue::Integer(v) => v.to_string(),
        RawValue::Text(s) => s.clone(),
        RawValue::Null => "null".to_string(),
    }
}
