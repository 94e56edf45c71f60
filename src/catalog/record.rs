use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability of a single copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Available,
    Issued,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::Issued => "issued",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry as stored in the backing file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub title: String,
    pub author: String,
    /// Unique key, assigned by the user and never validated
    pub isbn: String,
    pub status: Status,
}

impl Record {
    /// Create a new record; every new record starts out available
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            status: Status::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == Status::Available
    }

    /// Mark the record issued. Returns false if it was already out.
    pub fn issue(&mut self) -> bool {
        if !self.is_available() {
            return false;
        }
        self.status = Status::Issued;
        true
    }

    /// Mark the record available again. Returns false if it was not issued.
    pub fn return_item(&mut self) -> bool {
        if self.is_available() {
            return false;
        }
        self.status = Status::Available;
        true
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} (ISBN: {}) - {}",
            self.title, self.author, self.isbn, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_available() {
        let record = Record::new("Dune", "Herbert", "111");
        assert!(record.is_available());
        assert_eq!(record.status, Status::Available);
    }

    #[test]
    fn test_issue_and_return_transitions() {
        let mut record = Record::new("Dune", "Herbert", "111");

        assert!(record.issue());
        assert_eq!(record.status, Status::Issued);
        assert!(!record.issue());
        assert_eq!(record.status, Status::Issued);

        assert!(record.return_item());
        assert_eq!(record.status, Status::Available);
        assert!(!record.return_item());
        assert_eq!(record.status, Status::Available);
    }

    #[test]
    fn test_display_format() {
        let mut record = Record::new("Dune", "Frank Herbert", "978-0441013593");
        assert_eq!(
            record.to_string(),
            "Dune by Frank Herbert (ISBN: 978-0441013593) - available"
        );

        record.issue();
        assert!(record.to_string().ends_with("- issued"));
    }

    #[test]
    fn test_serialized_field_order() {
        let record = Record::new("Dune", "Herbert", "111");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"title":"Dune","author":"Herbert","isbn":"111","status":"available"}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_bad_shapes() {
        // Missing status
        let missing = r#"{"title":"Dune","author":"Herbert","isbn":"111"}"#;
        assert!(serde_json::from_str::<Record>(missing).is_err());

        // Unknown field
        let extra = r#"{"title":"Dune","author":"Herbert","isbn":"111","status":"issued","year":1965}"#;
        assert!(serde_json::from_str::<Record>(extra).is_err());

        // Status outside the two known values
        let bad_status = r#"{"title":"Dune","author":"Herbert","isbn":"111","status":"lost"}"#;
        assert!(serde_json::from_str::<Record>(bad_status).is_err());

        // Non-string isbn
        let bad_isbn = r#"{"title":"Dune","author":"Herbert","isbn":111,"status":"issued"}"#;
        assert!(serde_json::from_str::<Record>(bad_isbn).is_err());
    }
}
