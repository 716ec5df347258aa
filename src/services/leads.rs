//! Leads Service
//!
//! Fetches placeholder posts and turns them into leads.

use std::cell::RefCell;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::ApiClient;
use crate::error::LeadsError;
use crate::fixtures::LeadGenerator;
use crate::models::{Lead, Post};

/// Where the store gets its leads from
#[async_trait(?Send)]
pub trait LeadProvider {
    async fn get_leads(&self) -> Result<Vec<Lead>, LeadsError>;

    async fn get_lead_by_id(&self, id: u32) -> Result<Lead, LeadsError>;

    /// Full fetch followed by a client-side filter
    async fn search_leads(&self, query: &str) -> Result<Vec<Lead>, LeadsError> {
        match self.get_leads().await {
            Ok(leads) => Ok(filter_leads(leads, query)),
            Err(err) => {
                log::error!("Error searching leads: {}", err);
                Err(LeadsError::SearchLeads)
            }
        }
    }
}

/// Keep leads whose name, email, company or title contains `query`,
/// ignoring case. A blank query keeps everything.
pub fn filter_leads(leads: Vec<Lead>, query: &str) -> Vec<Lead> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return leads;
    }
    leads.into_iter().filter(|lead| lead.matches(&needle)).collect()
}

/// `LeadProvider` backed by the placeholder REST API
pub struct LeadsService {
    client: ApiClient,
    generator: RefCell<LeadGenerator>,
}

impl LeadsService {
    pub fn new(client: ApiClient, generator: LeadGenerator) -> Self {
        Self {
            client,
            generator: RefCell::new(generator),
        }
    }

    fn to_leads(&self, posts: Vec<Post>) -> Vec<Lead> {
        let now = Utc::now();
        let mut generator = self.generator.borrow_mut();
        posts
            .into_iter()
            .map(|post| generator.lead_from_post(post, now))
            .collect()
    }
}

#[async_trait(?Send)]
impl LeadProvider for LeadsService {
    async fn get_leads(&self) -> Result<Vec<Lead>, LeadsError> {
        let posts: Vec<Post> = self.client.get_json("/posts").await.map_err(|err| {
            log::error!("Error fetching leads: {}", err);
            LeadsError::FetchLeads
        })?;
        log::debug!("Mapped {} posts into leads", posts.len());
        Ok(self.to_leads(posts))
    }

    async fn get_lead_by_id(&self, id: u32) -> Result<Lead, LeadsError> {
        let post: Post = self
            .client
            .get_json(&format!("/posts/{}", id))
            .await
            .map_err(|err| {
                log::error!("Error fetching lead {}: {}", id, err);
                LeadsError::FetchLead
            })?;
        Ok(self.generator.borrow_mut().lead_from_post(post, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_leads;
    use chrono::TimeZone;
    use futures::executor::block_on;

    fn leads(count: u32) -> Vec<Lead> {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        sample_leads(count, 3, now)
    }

    struct FixedSource(Vec<Lead>);

    #[async_trait(?Send)]
    impl LeadProvider for FixedSource {
        async fn get_leads(&self) -> Result<Vec<Lead>, LeadsError> {
            Ok(self.0.clone())
        }

        async fn get_lead_by_id(&self, id: u32) -> Result<Lead, LeadsError> {
            self.0.iter().find(|l| l.id == id).cloned().ok_or(LeadsError::FetchLead)
        }
    }

    struct DownSource;

    #[async_trait(?Send)]
    impl LeadProvider for DownSource {
        async fn get_leads(&self) -> Result<Vec<Lead>, LeadsError> {
            Err(LeadsError::FetchLeads)
        }

        async fn get_lead_by_id(&self, _id: u32) -> Result<Lead, LeadsError> {
            Err(LeadsError::FetchLead)
        }
    }

    #[test]
    fn test_filter_matches_name_case_insensitive() {
        let found = filter_leads(leads(20), "lead 5");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Lead 5");
    }

    #[test]
    fn test_filter_matches_email_and_company() {
        assert_eq!(filter_leads(leads(20), "LEAD12@EXAMPLE").len(), 1);
        // "Company 1", "Company 10".."Company 19"
        assert_eq!(filter_leads(leads(20), "company 1").len(), 11);
    }

    #[test]
    fn test_filter_matches_title() {
        let found = filter_leads(leads(20), "Sample Title 7");
        assert_eq!(found.iter().map(|l| l.id).collect::<Vec<_>>(), vec![7]);
    }

    #[test]
    fn test_filter_blank_query_keeps_all() {
        assert_eq!(filter_leads(leads(9), "").len(), 9);
        assert_eq!(filter_leads(leads(9), "   ").len(), 9);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_leads(leads(9), "zebra").is_empty());
    }

    #[test]
    fn test_search_leads_default_filters() {
        let source = FixedSource(leads(30));
        let found = block_on(source.search_leads("lead 2")).unwrap();
        // Lead 2, Lead 20..29
        assert_eq!(found.len(), 11);
    }

    #[test]
    fn test_search_leads_flattens_failure() {
        let err = block_on(DownSource.search_leads("x")).unwrap_err();
        assert_eq!(err, LeadsError::SearchLeads);
        assert_eq!(err.to_string(), "Failed to search leads");
    }

    #[test]
    fn test_get_lead_by_id() {
        let source = FixedSource(leads(5));
        assert_eq!(block_on(source.get_lead_by_id(4)).unwrap().name, "Lead 4");
        assert_eq!(block_on(source.get_lead_by_id(40)), Err(LeadsError::FetchLead));
    }
}
