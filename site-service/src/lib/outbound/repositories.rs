pub mod account;
pub mod case;
pub mod company;
pub mod contact;
pub mod dashboard;
pub mod news;
pub mod offering;
pub mod page_view;

pub use account::PostgresAccountRepository;
pub use case::PostgresCaseRepository;
pub use company::PostgresCompanyRepository;
pub use contact::PostgresContactRepository;
pub use dashboard::PostgresDashboardRepository;
pub use news::PostgresNewsRepository;
pub use offering::PostgresOfferingRepository;
pub use page_view::PostgresPageViewRepository;

/// Decode a JSON string-list column.
///
/// NULL, empty and undecodable values all read as an empty list.
pub(crate) fn decode_list(column: Option<&str>) -> Vec<String> {
    column
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| serde_json::from_str(raw).ok())
        .unwrap_or_default()
}

pub(crate) fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string())
}

/// Name of the unique constraint a failed statement tripped, if any.
pub(crate) fn unique_violation(err: &sqlx::Error) -> Option<&str> {
    err.as_database_error()
        .filter(|db_err| db_err.is_unique_violation())
        .and_then(|db_err| db_err.constraint())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_list_is_lenient() {
        assert_eq!(
            decode_list(Some(r#"["环保材料","快速施工"]"#)),
            vec!["环保材料".to_string(), "快速施工".to_string()]
        );
        assert!(decode_list(None).is_empty());
        assert!(decode_list(Some("")).is_empty());
        assert!(decode_list(Some("not json")).is_empty());
        assert!(decode_list(Some(r#"{"a":1}"#)).is_empty());
        assert!(decode_list(Some("[1,2]")).is_empty());
    }

    #[test]
    fn test_encode_list() {
        assert_eq!(encode_list(&[]), "[]");
        assert_eq!(
            decode_list(Some(&encode_list(&["/uploads/a.jpg".to_string()]))),
            vec!["/uploads/a.jpg".to_string()]
        );
    }
}
