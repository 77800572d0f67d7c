use serde::Serialize;

/// Query parameters for a single `/data` fetch. Serialized straight into
/// the request query string, so field names match the wire contract.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentQuery {
    pub max_results: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
}

/// Per-call overrides for a refresh. A cursor override applies to that one
/// request only; a language override is sticky and becomes part of the
/// session's query state.
#[derive(Debug, Clone, Default)]
pub struct PageFilter {
    pub cursor: Option<String>,
    pub language_code: Option<String>,
}

impl PageFilter {
    pub fn cursor(cursor: impl Into<String>) -> Self {
        Self { cursor: Some(cursor.into()), language_code: None }
    }

    pub fn language(code: impl Into<String>) -> Self {
        Self { cursor: None, language_code: Some(code.into()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_serializes_camel_case_and_skips_absent_fields() {
        let query = CommentQuery { max_results: 5, cursor: None, language_code: None };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({ "maxResults": 5 }));

        let query = CommentQuery {
            max_results: 10,
            cursor: Some("c5".into()),
            language_code: Some("fr".into()),
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "maxResults": 10, "cursor": "c5", "languageCode": "fr" })
        );
    }
}
