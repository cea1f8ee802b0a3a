//! Data structures exchanged between the Mergington backend and its clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An extracurricular activity and its roster.
///
/// The activity's name is not stored here; it is the key of the directory
/// the activity lives in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Advertised capacity. Sign-ups are not rejected once it is reached.
    pub max_participants: usize,
    /// Participant emails in sign-up order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper to seed the roster.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email);
        }
        self
    }

    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends `email` to the roster. Returns `false` if it was already present.
    pub fn add_participant(&mut self, email: impl Into<String>) -> bool {
        let email = email.into();
        if self.is_signed_up(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email` from the roster. Returns `false` if it was not present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

/// Snapshot of every activity keyed by name, as served by `GET /activities`.
pub type ActivityDirectory = BTreeMap<String, Activity>;

/// Body of a successful sign-up or unregister call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn signed_up(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity}"),
        }
    }

    pub fn unregistered(email: &str, activity: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity}"),
        }
    }
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceInfo {
    pub activities: String,
    pub activity_count: usize,
    pub participant_count: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub services: ServiceInfo,
}
