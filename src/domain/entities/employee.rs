//! Employee record entity — the only domain entity.

use serde::Serialize;

/// A validated, safe-to-surface employee record.
///
/// The attribute set is fixed: there is no slot for `salary` or any other
/// sensitive column, so leaking one is a type-level impossibility rather
/// than a runtime filter. Instances are immutable value objects constructed
/// only by [`crate::domain::schema::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    pub employee_id: i64,
    pub name: String,
    pub clearance_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_only_approved_fields() {
        let record = EmployeeRecord {
            employee_id: 1,
            name: "Alice".to_string(),
            clearance_level: "SECRET".to_string(),
        };

        let json = serde_json::to_value(&record).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["clearance_level", "employee_id", "name"]);
    }
}
