use serde::{Deserialize, Serialize};

/// Default reviewer (API version).
///
/// Fields absent on the wire decode to their zero value; the uuid is
/// the only authoritative key.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Reviewer {
    /// Display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// Stable unique identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uuid: String,
    /// Entity type discriminator.
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub type_: String,
}

/// One page of a paginated reviewer listing.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ReviewerPage {
    /// Reviewers on this page.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<Reviewer>,
    /// 1-based page number.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub page: u32,
    /// Count on this page.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub size: u32,
    /// Continuation marker, empty when this is the last page.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub next: String,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn decode_page() {
        let page: ReviewerPage = serde_json::from_str(
            r#"{
                "values": [
                    {"display_name": "Someone", "uuid": "{u1}", "type": "user"},
                    {"uuid": "{u2}"}
                ],
                "page": 1,
                "size": 2,
                "next": "https://api.bitbucket.org/2.0/repositories/me/test/default-reviewers?page=2"
            }"#,
        )
        .unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.size, 2);
        assert_eq!(page.values.len(), 2);
        assert_eq!(page.values[0].display_name, "Someone");
        assert_eq!(page.values[1].uuid, "{u2}");
        // Absent fields are zero values, not errors
        assert_eq!(page.values[1].display_name, "");
        assert!(!page.next.is_empty());
    }

    #[test]
    fn decode_page_missing_fields() {
        let page: ReviewerPage = serde_json::from_str("{}").unwrap();
        assert_eq!(page, ReviewerPage::default());
        assert!(page.next.is_empty());
    }

    #[test]
    fn encode_then_decode_round_trip() {
        let page = ReviewerPage {
            values: vec![Reviewer {
                uuid: "{u1}".into(),
                ..Default::default()
            }],
            page: 1,
            size: 1,
            next: String::new(),
        };

        let encoded = serde_json::to_string(&page).unwrap();
        // Zero values are skipped on encode, mirroring the service
        assert!(!encoded.contains("next"));
        assert!(!encoded.contains("display_name"));

        let decoded: ReviewerPage = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, page);
    }
}
