//! Mock Lead Generator
//!
//! The placeholder API only knows about posts; every sales-specific field of
//! a lead is invented here. Seeded so a given seed always yields the same
//! leads.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::models::{Lead, LeadSource, LeadStatus, Post, LEAD_TAGS};

/// How far back generated `created_at` values may go
const CREATED_WINDOW_DAYS: i64 = 30;

pub struct LeadGenerator {
    rng: StdRng,
}

impl LeadGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self { rng: StdRng::from_entropy() },
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    pub fn status(&mut self) -> LeadStatus {
        LeadStatus::ALL[self.rng.gen_range(0..LeadStatus::ALL.len())]
    }

    pub fn source(&mut self) -> LeadSource {
        LeadSource::ALL[self.rng.gen_range(0..LeadSource::ALL.len())]
    }

    /// Uniform instant within the window ending at `now`
    pub fn created_at(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        let window_ms = Duration::days(CREATED_WINDOW_DAYS).num_milliseconds();
        now - Duration::milliseconds(self.rng.gen_range(0..=window_ms))
    }

    /// One to three distinct tags
    pub fn tags(&mut self) -> Vec<String> {
        let count = self.rng.gen_range(1..=3);
        LEAD_TAGS
            .choose_multiple(&mut self.rng, count)
            .map(|tag| tag.to_string())
            .collect()
    }

    pub fn score(&mut self) -> u8 {
        self.rng.gen_range(1..=100)
    }

    /// Dress a placeholder post up as a lead
    pub fn lead_from_post(&mut self, post: Post, now: DateTime<Utc>) -> Lead {
        Lead {
            id: post.id,
            name: format!("Lead {}", post.id),
            email: format!("lead{}@example.com", post.id),
            company: format!("Company {}", post.id),
            title: post.title,
            description: post.body,
            status: self.status(),
            source: self.source(),
            created_at: self.created_at(now),
            tags: self.tags(),
            score: self.score(),
        }
    }
}

/// Posts `1..=count` with filler text
#[cfg(test)]
pub fn sample_posts(count: u32) -> Vec<Post> {
    (1..=count)
        .map(|id| Post {
            user_id: Some((id - 1) / 10 + 1),
            id,
            title: format!("sample title {}", id),
            body: format!("sample body {}", id),
        })
        .collect()
}

/// Fully populated leads `1..=count` from a fixed seed
#[cfg(test)]
pub fn sample_leads(count: u32, seed: u64, now: DateTime<Utc>) -> Vec<Lead> {
    let mut generator = LeadGenerator::seeded(seed);
    sample_posts(count)
        .into_iter()
        .map(|post| generator.lead_from_post(post, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_same_leads() {
        assert_eq!(sample_leads(20, 99, now()), sample_leads(20, 99, now()));
    }

    #[test]
    fn test_lead_from_post_fixed_fields() {
        let post = Post {
            user_id: Some(1),
            id: 5,
            title: "nesciunt quas odio".into(),
            body: "repudiandae veniam".into(),
        };
        let lead = LeadGenerator::seeded(1).lead_from_post(post, now());
        assert_eq!(lead.id, 5);
        assert_eq!(lead.name, "Lead 5");
        assert_eq!(lead.email, "lead5@example.com");
        assert_eq!(lead.company, "Company 5");
        assert_eq!(lead.title, "nesciunt quas odio");
        assert_eq!(lead.description, "repudiandae veniam");
    }

    #[test]
    fn test_generated_fields_in_range() {
        let oldest = now() - Duration::days(30);
        for lead in sample_leads(100, 7, now()) {
            assert!((1..=100).contains(&lead.score), "score {}", lead.score);
            assert!((1..=3).contains(&lead.tags.len()));
            let unique: HashSet<_> = lead.tags.iter().collect();
            assert_eq!(unique.len(), lead.tags.len(), "duplicate tag in {:?}", lead.tags);
            assert!(lead.tags.iter().all(|t| LEAD_TAGS.contains(&t.as_str())));
            assert!(lead.created_at <= now() && lead.created_at >= oldest);
        }
    }
}
