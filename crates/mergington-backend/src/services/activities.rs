use async_trait::async_trait;
use dashmap::DashMap;

use mergington::data::{Activity, ActivityDirectory, MessageResponse};
use mergington::errors::DirectoryError;
use mergington::log;

/// A trait for reading the activity directory and managing activity rosters.
///
/// The set of activities is fixed when the service is built; only the
/// participant lists change at runtime. Implementations decide where the
/// directory lives (memory, database, ...).
///
/// # Examples
///
/// ```rust,ignore
/// async fn join_chess<S: ActivityService>(service: &S) -> Result<(), S::Error> {
///     let confirmation = service.signup("Chess Club", "ada@mergington.edu").await?;
///     println!("{}", confirmation.message);
///
///     let directory = service.list().await?;
///     assert!(directory["Chess Club"].is_signed_up("ada@mergington.edu"));
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ActivityService {
    /// The error type returned by operations on this service.
    type Error;

    /// Returns a snapshot of every activity, keyed and ordered by name.
    async fn list(&self) -> Result<ActivityDirectory, Self::Error>;

    /// Appends `email` to the end of the activity's roster.
    ///
    /// The advertised capacity is not checked; a sign-up succeeds even once
    /// `max_participants` has been reached.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is already
    /// signed up for it.
    async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, Self::Error>;

    /// Removes `email` from the activity's roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the activity doesn't exist or the email is not
    /// signed up for it.
    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, Self::Error>;
}

/// An in-memory implementation of the `ActivityService` trait.
///
/// Activities are stored in a `DashMap`. Each sign-up or unregister holds the
/// entry's write guard while it checks and mutates the roster, so two
/// concurrent calls for the same email cannot both succeed.
///
/// # Examples
/// ```rust,ignore
/// let service = ActivityServiceInMemory::seeded();
/// service.signup("Soccer Team", "newcomer@mergington.edu").await.unwrap();
/// let directory = service.list().await.unwrap();
/// let soccer = &directory["Soccer Team"];
/// assert_eq!(soccer.participants.last().unwrap(), "newcomer@mergington.edu");
/// ```
pub struct ActivityServiceInMemory {
    activities: DashMap<String, Activity>,
}

impl ActivityServiceInMemory {
    pub fn new() -> Self {
        Self {
            activities: DashMap::new(),
        }
    }

    /// Builds a directory from the given `(name, activity)` pairs.
    pub fn with_activities<I, S>(activities: I) -> Self
    where
        I: IntoIterator<Item = (S, Activity)>,
        S: Into<String>,
    {
        Self {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name.into(), activity))
                .collect(),
        }
    }

    /// Builds a directory holding the school's standard activities.
    pub fn seeded() -> Self {
        Self::with_activities(super::seed::activities())
    }

    pub fn activity_count(&self) -> usize {
        self.activities.len()
    }

    pub fn participant_count(&self) -> usize {
        self.activities
            .iter()
            .map(|entry| entry.value().participants.len())
            .sum()
    }
}

impl Default for ActivityServiceInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActivityService for ActivityServiceInMemory {
    type Error = DirectoryError;

    async fn list(&self) -> Result<ActivityDirectory, Self::Error> {
        Ok(self
            .activities
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, Self::Error> {
        let mut activity =
            self.activities
                .get_mut(activity_name)
                .ok_or_else(|| DirectoryError::NotFound {
                    activity: activity_name.to_string(),
                })?;

        let was_full = activity.is_full();
        if !activity.add_participant(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        if was_full {
            log::warn!(
                "{} is over capacity ({}/{})",
                activity_name,
                activity.participants.len(),
                activity.max_participants
            );
        } else {
            log::debug!("{} has {} spots left", activity_name, activity.spots_left());
        }

        Ok(MessageResponse::signed_up(email, activity_name))
    }

    async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, Self::Error> {
        let mut activity =
            self.activities
                .get_mut(activity_name)
                .ok_or_else(|| DirectoryError::NotFound {
                    activity: activity_name.to_string(),
                })?;

        if !activity.remove_participant(email) {
            return Err(DirectoryError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        Ok(MessageResponse::unregistered(email, activity_name))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn service() -> ActivityServiceInMemory {
        ActivityServiceInMemory::with_activities([
            (
                "Chess Club",
                Activity::new("Chess", "Fridays", 3).with_participants(["michael@mergington.edu"]),
            ),
            ("Art Club", Activity::new("Painting", "Thursdays", 1)),
        ])
    }

    async fn activity(service: &ActivityServiceInMemory, name: &str) -> Activity {
        service.list().await.unwrap().remove(name).unwrap()
    }

    #[tokio::test]
    async fn list_returns_every_activity_by_name() {
        let directory = service().list().await.unwrap();
        let names: Vec<_> = directory.keys().cloned().collect();
        assert_eq!(names, vec!["Art Club", "Chess Club"]);
    }

    #[tokio::test]
    async fn signup_appends_to_roster() {
        let service = service();
        let confirmation = service
            .signup("Chess Club", "daniel@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            confirmation.message,
            "Signed up daniel@mergington.edu for Chess Club"
        );

        let chess = activity(&service, "Chess Club").await;
        assert_eq!(
            chess.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
    }

    #[tokio::test]
    async fn duplicate_signup_keeps_failing() {
        let service = service();
        for _ in 0..2 {
            let err = service
                .signup("Chess Club", "michael@mergington.edu")
                .await
                .unwrap_err();
            assert!(matches!(err, DirectoryError::AlreadySignedUp { .. }));
        }
        assert_eq!(activity(&service, "Chess Club").await.participants.len(), 1);
    }

    #[tokio::test]
    async fn activity_names_are_case_sensitive() {
        let err = service()
            .signup("chess club", "daniel@mergington.edu")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DirectoryError::NotFound {
                activity: "chess club".to_string()
            }
        );
    }

    #[tokio::test]
    async fn signup_ignores_capacity() {
        let service = service();
        service.signup("Art Club", "amelia@mergington.edu").await.unwrap();
        service.signup("Art Club", "harper@mergington.edu").await.unwrap();

        let art = activity(&service, "Art Club").await;
        assert_eq!(art.participants.len(), 2);
        assert!(art.participants.len() > art.max_participants);
        assert!(art.is_full());
        assert_eq!(art.spots_left(), 0);
    }

    #[tokio::test]
    async fn unregister_removes_from_roster() {
        let service = service();
        let confirmation = service
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        assert_eq!(
            confirmation.message,
            "Unregistered michael@mergington.edu from Chess Club"
        );
        assert!(activity(&service, "Chess Club").await.participants.is_empty());

        let err = service
            .unregister("Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotSignedUp { .. }));
    }

    #[tokio::test]
    async fn unregister_unknown_activity() {
        let err = service()
            .unregister("Underwater Basket Weaving", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, DirectoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn counts() {
        let service = service();
        assert_eq!(service.activity_count(), 2);
        assert_eq!(service.participant_count(), 1);
        assert_eq!(ActivityServiceInMemory::new().activity_count(), 0);
    }

    #[tokio::test]
    async fn concurrent_signups_land_once() {
        let service = Arc::new(service());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let service = Arc::clone(&service);
                tokio::spawn(async move {
                    service
                        .signup("Chess Club", &format!("student{i}@mergington.edu"))
                        .await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let duplicates: Vec<_> = (0..20)
            .map(|_| {
                let service = Arc::clone(&service);
                tokio::spawn(async move { service.signup("Chess Club", "twin@mergington.edu").await })
            })
            .collect();
        let mut accepted = 0;
        for handle in duplicates {
            if handle.await.unwrap().is_ok() {
                accepted += 1;
            }
        }

        assert_eq!(accepted, 1);
        let chess = activity(&service, "Chess Club").await;
        assert_eq!(chess.participants.len(), 1 + 50 + 1);
    }
}
