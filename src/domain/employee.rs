use std::{fmt, num::NonZeroUsize, str::FromStr};

use serde::{Deserialize, Serialize};

/// A unique identifier for an employee.
///
/// Format: `E` followed by a positive non-zero integer, zero-padded to a
/// minimum of three digits (e.g. `E001`, `E042`). Identifiers above 999 grow
/// wider rather than wrapping (e.g. `E1000`).
///
/// Identifiers are immutable once assigned and are never reused.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(NonZeroUsize);

impl EmployeeId {
    /// Create an identifier from a pre-validated number.
    #[must_use]
    pub const fn new(number: NonZeroUsize) -> Self {
        Self(number)
    }

    /// Returns the numeric component of the identifier.
    #[must_use]
    pub const fn number(&self) -> NonZeroUsize {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "E{:03}", self.0)
    }
}

/// Error returned when a string is not a valid employee identifier.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid employee id '{0}': expected 'E' followed by a non-zero integer")]
pub struct ParseError(String);

impl FromStr for EmployeeId {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('E')
            .ok_or_else(|| ParseError(s.to_string()))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError(s.to_string()));
        }

        let number = digits
            .parse::<usize>()
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| ParseError(s.to_string()))?;

        Ok(Self(number))
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<&str> for EmployeeId {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.to_string()
    }
}

/// An employee record.
///
/// Names and phone numbers are free text; duplicates are permitted. The
/// identifier is the only unique component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The employee's unique identifier.
    pub employee_id: EmployeeId,
    /// The employee's name.
    pub name: String,
    /// The employee's phone number.
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: usize) -> EmployeeId {
        EmployeeId::new(NonZeroUsize::new(n).unwrap())
    }

    #[test]
    fn display_zero_pads_to_three_digits() {
        assert_eq!(id(1).to_string(), "E001");
        assert_eq!(id(10).to_string(), "E010");
        assert_eq!(id(999).to_string(), "E999");
    }

    #[test]
    fn display_grows_beyond_three_digits() {
        assert_eq!(id(1000).to_string(), "E1000");
    }

    #[test]
    fn parse_valid_identifier() {
        let parsed: EmployeeId = "E042".parse().unwrap();
        assert_eq!(parsed, id(42));
    }

    #[test]
    fn parse_rejects_missing_prefix() {
        assert!("042".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn parse_rejects_zero() {
        assert!("E000".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn parse_rejects_non_numeric() {
        assert!("Eabc".parse::<EmployeeId>().is_err());
        assert!("E".parse::<EmployeeId>().is_err());
        assert!("E-1".parse::<EmployeeId>().is_err());
    }

    #[test]
    fn roundtrip_conversion() {
        let original = id(7);
        let parsed: EmployeeId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn serde_roundtrips_through_string_form() {
        let employee = Employee {
            employee_id: id(3),
            name: "Ada".to_string(),
            phone: "555-0101".to_string(),
        };

        let json = serde_json::to_string(&employee).unwrap();
        assert_eq!(
            json,
            r#"{"employeeId":"E003","name":"Ada","phone":"555-0101"}"#
        );

        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(back, employee);
    }

    #[test]
    fn deserialize_rejects_malformed_identifier() {
        let json = r#"{"employeeId":"X003","name":"Ada","phone":"555-0101"}"#;
        assert!(serde_json::from_str::<Employee>(json).is_err());
    }
}
