//! Fixture backed stand-in for the dashboard backend.
//!
//! Every call sleeps for the configured latency and then answers from static
//! fixtures, using the same data contract as the real resource endpoints.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::resource::{NewResource, Resource};
use crate::models::user::{Profile, RoleCounts, Statistics, User, UserRole};

pub const DEFAULT_LATENCY: Duration = Duration::from_secs(1);

#[derive(Clone, Debug)]
pub struct MockApi {
    latency: Duration,
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl MockApi {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    async fn simulate_latency(&self) {
        tokio::time::sleep(self.latency).await;
    }

    pub async fn get_resources(&self) -> Vec<Resource> {
        self.simulate_latency().await;
        resource_fixtures(Utc::now())
    }

    /// Echoes the upload back with a synthesized id and no downloads.
    pub async fn upload_resource(&self, resource: NewResource) -> Resource {
        self.simulate_latency().await;
        let now = Utc::now();
        Resource {
            id: now.timestamp_millis().to_string(),
            title: resource.title,
            kind: resource.kind,
            downloads: 0,
            uploaded_by: resource.uploaded_by,
            created_at: now,
        }
    }

    /// Case insensitive substring match over title or type. Waits for its own
    /// latency on top of the one of the listing it filters.
    pub async fn search_resources(&self, query: &str) -> Vec<Resource> {
        self.simulate_latency().await;
        let query = query.to_lowercase();
        self.get_resources()
            .await
            .into_iter()
            .filter(|r| {
                r.title.to_lowercase().contains(&query) || r.kind.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub async fn get_user_profile(&self) -> Profile {
        self.simulate_latency().await;
        Profile {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            role: UserRole::Student,
        }
    }

    pub async fn update_user_profile(&self, profile: Profile) -> Profile {
        self.simulate_latency().await;
        profile
    }

    pub async fn get_users(&self) -> Vec<User> {
        self.simulate_latency().await;
        [
            (1, "John Doe", "john@example.com", UserRole::Student),
            (2, "Jane Smith", "jane@example.com", UserRole::Faculty),
            (3, "Admin User", "admin@example.com", UserRole::Admin),
        ]
        .into_iter()
        .map(|(id, name, email, role)| User {
            id,
            name: name.to_string(),
            email: email.to_string(),
            role,
        })
        .collect()
    }

    pub async fn get_statistics(&self) -> Statistics {
        self.simulate_latency().await;
        let user_roles = RoleCounts {
            admin: 5,
            faculty: 45,
            student: 100,
        };
        Statistics {
            total_users: user_roles.total(),
            user_roles,
            total_resources: 75,
            total_downloads: 1500,
        }
    }
}

/// Demo resources, listed newest first relative to `now`.
pub fn resource_fixtures(now: DateTime<Utc>) -> Vec<Resource> {
    [
        ("Introduction to React", "PDF", 120),
        ("Advanced JavaScript Concepts", "Video", 85),
        ("Database Design Principles", "Presentation", 62),
    ]
    .into_iter()
    .zip(1..)
    .map(|((title, kind, downloads), id)| Resource {
        id: id.to_string(),
        title: title.to_string(),
        kind: kind.to_string(),
        downloads,
        uploaded_by: None,
        created_at: now - chrono::Duration::days(id),
    })
    .collect()
}
