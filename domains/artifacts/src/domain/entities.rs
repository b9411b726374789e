//! Artifact entities
//!
//! Wire format is camelCase (`likeCount`, `likedBy`, `adderEmail`). A NULL
//! `liked_by` column means "no one has liked this yet" and the field is
//! omitted from JSON entirely; `like_count` equals the cardinality of
//! `liked_by` whenever the set is present.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A museum-artifact record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub id: Uuid,
    pub name: Option<String>,
    pub artifact_type: Option<String>,
    pub discovered_by: Option<String>,
    pub discovered_at: Option<String>,
    pub present_location: Option<String>,
    pub image_url: Option<String>,
    pub historical_context: Option<String>,
    /// Client-supplied creation timestamp, preserved verbatim
    pub created_at: Option<String>,
    pub adder_name: Option<String>,
    pub adder_email: Option<String>,
    #[serde(default)]
    pub like_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<String>>,
}

impl Artifact {
    /// Build a fresh record from a submission; likes start at zero with the
    /// liker set absent
    pub fn new(details: ArtifactDetails, adder_name: Option<String>, adder_email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: details.name,
            artifact_type: details.artifact_type,
            discovered_by: details.discovered_by,
            discovered_at: details.discovered_at,
            present_location: details.present_location,
            image_url: details.image_url,
            historical_context: details.historical_context,
            created_at: details.created_at,
            adder_name,
            adder_email: Some(adder_email),
            like_count: 0,
            liked_by: None,
        }
    }
}

/// The whitelist of caller-editable fields, shared by create and update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDetails {
    pub name: Option<String>,
    pub artifact_type: Option<String>,
    pub discovered_by: Option<String>,
    pub discovered_at: Option<String>,
    pub present_location: Option<String>,
    pub image_url: Option<String>,
    pub historical_context: Option<String>,
    pub created_at: Option<String>,
}

/// Like counter and liker set of one artifact after a toggle
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub like_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_artifact_starts_unliked() {
        let artifact = Artifact::new(
            ArtifactDetails {
                name: Some("Antikythera Mechanism".to_string()),
                ..Default::default()
            },
            Some("Valerios Stais".to_string()),
            "curator@example.com".to_string(),
        );

        assert_eq!(artifact.like_count, 0);
        assert!(artifact.liked_by.is_none());
        assert_eq!(artifact.adder_email.as_deref(), Some("curator@example.com"));
    }

    #[test]
    fn test_artifact_serializes_camel_case() {
        let artifact = Artifact::new(
            ArtifactDetails {
                name: Some("Rosetta Stone".to_string()),
                artifact_type: Some("Stele".to_string()),
                ..Default::default()
            },
            None,
            "curator@example.com".to_string(),
        );

        let value = serde_json::to_value(&artifact).unwrap();
        assert_eq!(value["name"], "Rosetta Stone");
        assert_eq!(value["artifactType"], "Stele");
        assert_eq!(value["adderEmail"], "curator@example.com");
        assert_eq!(value["likeCount"], 0);
        // Absent liker set is omitted from the wire format
        assert!(value.get("likedBy").is_none());
    }

    #[test]
    fn test_like_status_omits_absent_liker_set() {
        let status = LikeStatus {
            like_count: 0,
            liked_by: None,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["likeCount"], 0);
        assert!(value.get("likedBy").is_none());

        let status = LikeStatus {
            like_count: 1,
            liked_by: Some(vec!["x@y.com".to_string()]),
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["likedBy"], serde_json::json!(["x@y.com"]));
    }

    #[test]
    fn test_details_deserialize_from_camel_case() {
        let details: ArtifactDetails = serde_json::from_value(serde_json::json!({
            "name": "Dead Sea Scrolls",
            "discoveredBy": "Bedouin shepherds",
            "discoveredAt": "1946",
            "presentLocation": "Israel Museum",
        }))
        .unwrap();

        assert_eq!(details.name.as_deref(), Some("Dead Sea Scrolls"));
        assert_eq!(details.discovered_by.as_deref(), Some("Bedouin shepherds"));
        assert!(details.image_url.is_none());
    }
}
