//! Per-segment auth sessions for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The school, staff, and parent portals authenticate independently against
//! the same backend. Each segment owns its own token key, profile key, and
//! login route. Route guards and the REST client both read from here.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::util::storage;

/// One of the three authenticated user portals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    School,
    Staff,
    Parent,
}

impl Segment {
    pub const ALL: [Self; 3] = [Self::School, Self::Staff, Self::Parent];

    /// `localStorage` key holding the bearer token.
    #[must_use]
    pub fn token_key(self) -> &'static str {
        match self {
            Self::School => "access_token",
            Self::Staff => "staff_access_token",
            Self::Parent => "parent_access_token",
        }
    }

    /// `localStorage` key holding the profile returned at login.
    #[must_use]
    pub fn info_key(self) -> &'static str {
        match self {
            Self::School => "school_info",
            Self::Staff => "staff_info",
            Self::Parent => "parent_info",
        }
    }

    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::School => "/school/login",
            Self::Staff => "/staff/login",
            Self::Parent => "/parent/login",
        }
    }

    #[must_use]
    pub fn home_path(self) -> &'static str {
        match self {
            Self::School => "/school",
            Self::Staff => "/staff",
            Self::Parent => "/parent",
        }
    }

    #[must_use]
    pub fn login_endpoint(self) -> &'static str {
        match self {
            Self::School => "/api/schools/login/",
            Self::Staff => "/api/schools/staff/login/",
            Self::Parent => "/api/parents/login/",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::School => "School",
            Self::Staff => "Staff",
            Self::Parent => "Parent",
        }
    }
}

/// Profile blob persisted under a segment's info key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredInfo {
    pub display_name: String,
    #[serde(default)]
    pub profile: serde_json::Value,
}

/// An authenticated segment session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub display_name: String,
}

/// Sessions for all segments plus restore status.
///
/// `loading` starts `true`: the server render cannot see `localStorage`, so
/// guards wait until the browser has restored sessions before redirecting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub school: Option<Session>,
    pub staff: Option<Session>,
    pub parent: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { school: None, staff: None, parent: None, loading: true }
    }
}

impl SessionState {
    #[must_use]
    pub fn get(&self, segment: Segment) -> Option<&Session> {
        match segment {
            Segment::School => self.school.as_ref(),
            Segment::Staff => self.staff.as_ref(),
            Segment::Parent => self.parent.as_ref(),
        }
    }

    pub fn set(&mut self, segment: Segment, session: Option<Session>) {
        match segment {
            Segment::School => self.school = session,
            Segment::Staff => self.staff = session,
            Segment::Parent => self.parent = session,
        }
    }

    #[must_use]
    pub fn is_authenticated(&self, segment: Segment) -> bool {
        self.get(segment).is_some()
    }

    /// Build state from raw storage values (`token`, `info`) per segment.
    ///
    /// Blank tokens count as absent. A missing or corrupt info blob falls back
    /// to the segment label for the display name.
    #[must_use]
    pub fn from_stored<F>(read: F) -> Self
    where
        F: Fn(Segment) -> (Option<String>, Option<String>),
    {
        let mut state = Self { loading: false, ..Self::default() };
        for segment in Segment::ALL {
            let (token, info) = read(segment);
            let Some(token) = token.filter(|t| !t.trim().is_empty()) else {
                continue;
            };
            let display_name = info
                .and_then(|raw| serde_json::from_str::<StoredInfo>(&raw).ok())
                .map(|info| info.display_name)
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| segment.label().to_owned());
            state.set(segment, Some(Session { token, display_name }));
        }
        state
    }

    /// Restore all segment sessions from `localStorage`.
    #[must_use]
    pub fn restore() -> Self {
        Self::from_stored(|segment| {
            (storage::load_string(segment.token_key()), storage::load_string(segment.info_key()))
        })
    }
}

/// Persist a fresh login for `segment`.
pub fn persist_login(segment: Segment, token: &str, info: &StoredInfo) {
    storage::save_string(segment.token_key(), token);
    storage::save_json(segment.info_key(), info);
}

/// Forget the token and profile of `segment`.
pub fn clear_segment(segment: Segment) {
    storage::remove(segment.token_key());
    storage::remove(segment.info_key());
}

/// Current bearer token for `segment`, read straight from storage.
#[must_use]
pub fn stored_token(segment: Segment) -> Option<String> {
    storage::load_string(segment.token_key()).filter(|t| !t.trim().is_empty())
}
