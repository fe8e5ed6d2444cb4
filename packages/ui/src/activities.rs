//! Activity list state and the full re-fetch every mutation ends with.

use api::Activity;
use dioxus::prelude::*;
use store::ActivityBook;

use crate::client::AppClient;

/// What the activity list currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ActivityListState {
    #[default]
    Loading,
    Ready(ActivityBook),
    /// The fetch failed; holds the message shown in place of the list.
    Failed(String),
}

impl ActivityListState {
    /// Options for the activity dropdown, rebuilt from scratch for every state.
    pub fn activity_names(&self) -> Vec<String> {
        match self {
            ActivityListState::Ready(book) => book.names(),
            _ => Vec::new(),
        }
    }
}

pub fn use_activities() -> Signal<ActivityListState> {
    use_context::<Signal<ActivityListState>>()
}

/// Replace the list with a fresh copy from the backend.
///
/// Nothing is patched locally: concurrent refreshes simply race and the last
/// response to arrive is what stays on screen.
pub async fn refresh_activities(client: &AppClient, mut activities: Signal<ActivityListState>) {
    let next = match client.activities().await {
        Ok(book) => ActivityListState::Ready(book),
        Err(notice) => ActivityListState::Failed(notice.text),
    };
    activities.set(next);
}

/// One participant line in an activity card.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantRow {
    pub email: String,
    /// Whether the row gets a removal control.
    pub removable: bool,
}

/// Participant rows for `activity`; removal controls only when authenticated.
pub fn participant_rows(activity: &Activity, authenticated: bool) -> Vec<ParticipantRow> {
    activity
        .participants
        .iter()
        .map(|email| ParticipantRow {
            email: email.clone(),
            removable: authenticated,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use store::ActivityDetails;

    use super::*;

    fn chess() -> Activity {
        ActivityDetails {
            description: "Learn strategies".into(),
            schedule: "Fridays".into(),
            max_participants: 12,
            participants: vec!["michael@mergington.edu".into(), "daniel@mergington.edu".into()],
        }
        .named("Chess Club")
    }

    #[test]
    fn test_rows_are_removable_only_when_authenticated() {
        let anonymous = participant_rows(&chess(), false);
        assert_eq!(anonymous.len(), 2);
        assert!(anonymous.iter().all(|row| !row.removable));

        let teacher = participant_rows(&chess(), true);
        assert!(teacher.iter().all(|row| row.removable));
        assert_eq!(teacher[1].email, "daniel@mergington.edu");
    }

    #[test]
    fn test_empty_activity_has_no_rows() {
        let mut empty = chess();
        empty.participants.clear();
        assert!(participant_rows(&empty, true).is_empty());
    }

    #[test]
    fn test_dropdown_options_follow_state() {
        assert!(ActivityListState::Loading.activity_names().is_empty());
        assert!(ActivityListState::Failed("x".into()).activity_names().is_empty());

        let book = ActivityBook::new(vec![chess(), {
            let mut art = chess();
            art.name = "Art Club".into();
            art
        }]);
        assert_eq!(
            ActivityListState::Ready(book).activity_names(),
            vec!["Chess Club", "Art Club"]
        );
    }
}
