//! CSV ingestion and bulk payload assembly.

use std::path::Path;

use crate::{document::Employee, errors::SearchError};

/// Read employee rows from a CSV file with a header row.
///
/// Empty cells deserialize to `None`; a structurally broken row is an
/// error for the whole load, matching the all-or-nothing setup flow.
pub fn read_employees(path: &Path) -> Result<Vec<Employee>, SearchError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut employees = Vec::new();
    for row in reader.deserialize() {
        let employee: Employee = row?;
        employees.push(employee);
    }
    Ok(employees)
}

/// Assemble the newline-delimited `_bulk` payload: one `index` action
/// line per document, each followed by the document source, with the
/// trailing newline the endpoint requires.
pub fn bulk_body(employees: &[Employee]) -> Result<String, SearchError> {
    let mut body = String::new();
    for employee in employees {
        body.push_str("{\"index\":{}}\n");
        body.push_str(&serde_json::to_string(employee)?);
        body.push('\n');
    }
    Ok(body)
}
