//! Frontend Models
//!
//! Lead records and the upstream placeholder shape they are built from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post data structure (matches the placeholder API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default)]
    pub user_id: Option<u32>,
    pub id: u32,
    pub title: String,
    pub body: String,
}

/// Sales pipeline stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Proposal,
    #[serde(rename = "Closed Won")]
    ClosedWon,
    #[serde(rename = "Closed Lost")]
    ClosedLost,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 6] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::Proposal,
        LeadStatus::ClosedWon,
        LeadStatus::ClosedLost,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Proposal => "Proposal",
            LeadStatus::ClosedWon => "Closed Won",
            LeadStatus::ClosedLost => "Closed Lost",
        }
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Channel a lead came in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Email Campaign")]
    EmailCampaign,
    Referral,
    #[serde(rename = "Cold Call")]
    ColdCall,
    #[serde(rename = "Trade Show")]
    TradeShow,
}

impl LeadSource {
    pub const ALL: [LeadSource; 6] = [
        LeadSource::Website,
        LeadSource::SocialMedia,
        LeadSource::EmailCampaign,
        LeadSource::Referral,
        LeadSource::ColdCall,
        LeadSource::TradeShow,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::SocialMedia => "Social Media",
            LeadSource::EmailCampaign => "Email Campaign",
            LeadSource::Referral => "Referral",
            LeadSource::ColdCall => "Cold Call",
            LeadSource::TradeShow => "Trade Show",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tag vocabulary for generated leads
pub const LEAD_TAGS: [&str; 8] = [
    "Hot",
    "Warm",
    "Cold",
    "Enterprise",
    "SMB",
    "Startup",
    "Priority",
    "Follow-up",
];

/// Lead data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub description: String,
    pub status: LeadStatus,
    pub source: LeadSource,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
    pub score: u8,
}

impl Lead {
    /// Case-insensitive substring match over name, email, company and title.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.company, &self.title]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Uppercase first letter of the name, for avatar bubbles
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserializes_placeholder_json() {
        let json = r#"{"userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto sed"}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.user_id, Some(1));
        assert_eq!(post.title, "ea molestias");
    }

    #[test]
    fn test_status_serializes_with_label() {
        let json = serde_json::to_string(&LeadStatus::ClosedWon).unwrap();
        assert_eq!(json, "\"Closed Won\"");
        for status in LeadStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_source_labels() {
        let labels: Vec<_> = LeadSource::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(
            labels,
            ["Website", "Social Media", "Email Campaign", "Referral", "Cold Call", "Trade Show"]
        );
    }
}
