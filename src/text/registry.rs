//! Tap identifiers and the dispatch registry
//!
//! A registry belongs to exactly one text instance. It is rebuilt on every
//! render pass and emptied on teardown, so handlers never outlive the text
//! that declared them.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use super::keyword::Action;

/// URL scheme used when a host carries identifiers as link targets
pub const TAP_URL_SCHEME: &str = "tappable";

/// Opaque identifier binding a rendered segment to its handler
///
/// Identifiers are random, so one issued by an earlier render pass can never
/// collide with one issued by a later pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TapId(Uuid);

impl TapId {
    /// Allocate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Link form, `tappable://<id>`
    pub fn to_url(&self) -> String {
        format!("{}://{}", TAP_URL_SCHEME, self.0)
    }

    /// Parse the link form back into an identifier
    ///
    /// Returns `None` for other schemes or malformed ids.
    pub fn from_url(url: &str) -> Option<Self> {
        let rest = url.strip_prefix(TAP_URL_SCHEME)?.strip_prefix("://")?;
        rest.trim_end_matches('/').parse().ok()
    }
}

impl fmt::Display for TapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TapId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier to handler table for one text instance
#[derive(Debug, Default)]
pub struct DispatchRegistry {
    handlers: HashMap<TapId, Action>,
}

impl DispatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `action` to a freshly allocated identifier
    pub fn register(&mut self, action: Action) -> TapId {
        let id = TapId::generate();
        self.handlers.insert(id, action);
        id
    }

    /// Invoke the handler bound to `id`
    ///
    /// Unknown or expired identifiers are ignored. Returns whether a handler
    /// ran.
    pub fn dispatch(&self, id: TapId) -> bool {
        match self.handlers.get(&id) {
            Some(action) => {
                tracing::trace!(%id, "dispatching tap");
                action.invoke();
                true
            }
            None => {
                tracing::trace!(%id, "ignoring tap for unknown identifier");
                false
            }
        }
    }

    pub fn contains(&self, id: TapId) -> bool {
        self.handlers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Release every handler
    pub fn clear(&mut self) {
        self.handlers.clear();
    }
}
