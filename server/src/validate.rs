use thiserror::Error;

/// Required text fields that were empty or whitespace only.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("blank required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

/// Check that both `title` and `description` carry non-blank text.
pub fn validate(title: &str, description: &str) -> Result<(), ValidationError> {
    let mut fields = Vec::new();
    if title.trim().is_empty() {
        fields.push("title");
    }
    if description.trim().is_empty() {
        fields.push("description");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}
