//! # Domain models for activities
//!
//! The backend answers `GET /activities` with a JSON object keyed by activity
//! name. [`ActivityBook`] decodes that object into an ordered list of
//! [`Activity`] records, keeping the key order the server sent, so the list and
//! the selection dropdown render in the same order as the backend defines them.
//!
//! Nothing here is persisted; the book is replaced wholesale on every fetch.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// One activity as rendered on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    /// Unique name, the key of the backend's JSON object.
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in sign-up order.
    pub participants: Vec<String>,
}

/// The body of one activity entry on the wire (everything but the name).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl ActivityDetails {
    pub fn named(self, name: impl Into<String>) -> Activity {
        Activity {
            name: name.into(),
            description: self.description,
            schedule: self.schedule,
            max_participants: self.max_participants,
            participants: self.participants,
        }
    }
}

impl Activity {
    /// Remaining capacity: max participants minus the current participant count.
    ///
    /// Not clamped, an overbooked activity reports a negative number.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    fn details(&self) -> ActivityDetails {
        ActivityDetails {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}

/// The full set of activities returned by the backend, in server order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityBook {
    activities: Vec<Activity>,
}

impl ActivityBook {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.activities.iter()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.iter_mut().find(|a| a.name == name)
    }

    /// Activity names in display order, used for the selection dropdown.
    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a ActivityBook {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'de> Deserialize<'de> for ActivityBook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BookVisitor;

        impl<'de> Visitor<'de> for BookVisitor {
            type Value = ActivityBook;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity names to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    activities.push(details.named(name));
                }
                Ok(ActivityBook { activities })
            }
        }

        deserializer.deserialize_map(BookVisitor)
    }
}

impl Serialize for ActivityBook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details())?;
        }
        map.end()
    }
}
