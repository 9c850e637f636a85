//! Low-level parsing utilities shared by task factories and commands

use crate::error::{DomainError, DomainResult};

/// Split text on every literal occurrence of the splitter.
///
/// No trimming is applied; callers decide how much whitespace matters
/// around each part.
pub fn split_by_splitter<'a>(text: &'a str, splitter: &str) -> Vec<&'a str> {
    text.split(splitter).collect()
}

/// Validate that a split produced exactly the expected number of parts.
pub fn validate_part_count(expected: usize, parts: &[&str], context: &str) -> DomainResult<()> {
    if parts.len() != expected {
        return Err(DomainError::invalid_format(
            context,
            format!("expected {} parts, found {}", expected, parts.len()),
        ));
    }
    Ok(())
}

/// Extract a 1-based task number from user text.
///
/// Zero, negatives and anything non-numeric are rejected.
pub fn extract_task_number(text: &str) -> DomainResult<usize> {
    let trimmed = text.trim();
    match trimmed.parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(DomainError::invalid_task_number(trimmed)),
    }
}

/// Validate that a command description is not empty or blank.
pub fn validate_description_not_empty(keyword: &str, description: &str) -> DomainResult<()> {
    if description.trim().is_empty() {
        return Err(DomainError::empty_description(keyword));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_splitter() {
        let parts = split_by_splitter("submit report /by 02/12/2019 1800", "/by");
        assert_eq!(parts, vec!["submit report ", " 02/12/2019 1800"]);
    }

    #[test]
    fn test_split_without_splitter_yields_single_part() {
        let parts = split_by_splitter("submit report", "/by");
        assert_eq!(parts, vec!["submit report"]);
    }

    #[test]
    fn test_validate_part_count() {
        assert!(validate_part_count(2, &["a", "b"], "deadline").is_ok());

        let err = validate_part_count(2, &["a"], "deadline").unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat { .. }));
    }

    #[test]
    fn test_extract_task_number_valid() {
        assert_eq!(extract_task_number("3").unwrap(), 3);
        assert_eq!(extract_task_number(" 12 ").unwrap(), 12);
    }

    #[test]
    fn test_extract_task_number_rejects_non_positive() {
        assert!(extract_task_number("0").is_err());
        assert!(extract_task_number("-1").is_err());
    }

    #[test]
    fn test_extract_task_number_rejects_garbage() {
        assert!(extract_task_number("three").is_err());
        assert!(extract_task_number("1.5").is_err());
        assert!(extract_task_number("").is_err());
    }

    #[test]
    fn test_validate_description_not_empty() {
        assert!(validate_description_not_empty("todo", "buy milk").is_ok());

        let err = validate_description_not_empty("todo", "   ").unwrap_err();
        assert_eq!(err, DomainError::empty_description("todo"));
    }
}
