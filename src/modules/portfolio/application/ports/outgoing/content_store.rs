// src/modules/portfolio/application/ports/outgoing/content_store.rs

use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

//
// ──────────────────────────────────────────────────────────
// Query targets
// ──────────────────────────────────────────────────────────
//

/// Store entities that have exactly one instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Singleton {
    Profile,
    LandingPage,
}

impl Singleton {
    pub fn slug(&self) -> &'static str {
        match self {
            Singleton::Profile => "profile",
            Singleton::LandingPage => "landing-page",
        }
    }
}

impl fmt::Display for Singleton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Skills,
    SkillCategories,
    Projects,
}

impl Collection {
    pub fn slug(&self) -> &'static str {
        match self {
            Collection::Skills => "skills",
            Collection::SkillCategories => "skill-categories",
            Collection::Projects => "projects",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Ascending sort on one field, the only order the aggregator asks the store for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
}

impl SortSpec {
    pub fn ascending(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

/// Renders as the bare field name, which headless CMS query strings read as ascending.
impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.field)
    }
}

/// A single bounded page; there is no pagination beyond it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: u32,
    pub sort: Option<SortSpec>,
    /// Reference expansion depth. `None` leaves the store default.
    pub depth: Option<u8>,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            limit: 100,
            sort: None,
            depth: None,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Content store unreachable: {0}")]
    Unreachable(String),

    #[error("Content store query failed: {0}")]
    QueryFailed(String),

    #[error("Malformed content store response: {0}")]
    MalformedResponse(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only)
// ──────────────────────────────────────────────────────────
//

/// Read side of the headless content store the owner edits through the admin panel.
///
/// Records are returned as raw JSON; decoding into typed records is the caller's job so
/// that a single adapter can serve every collection.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find_singleton(&self, singleton: Singleton) -> Result<Value, ContentStoreError>;

    async fn list(
        &self,
        collection: Collection,
        options: ListOptions,
    ) -> Result<Vec<Value>, ContentStoreError>;

    /// Cheap reachability check for the readiness endpoint.
    async fn ping(&self) -> Result<(), ContentStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_sort_renders_bare_field() {
        assert_eq!(SortSpec::ascending("order").to_string(), "order");
        assert!(!SortSpec::ascending("createdAt").to_string().starts_with('-'));
    }

    #[test]
    fn slugs_match_store_names() {
        assert_eq!(Singleton::LandingPage.slug(), "landing-page");
        assert_eq!(Singleton::Profile.to_string(), "profile");
        assert_eq!(Collection::SkillCategories.slug(), "skill-categories");
        assert_eq!(Collection::Projects.to_string(), "projects");
    }

    #[test]
    fn default_list_options_is_single_bounded_page() {
        let options = ListOptions::default();
        assert_eq!(options.limit, 100);
        assert!(options.sort.is_none());
        assert!(options.depth.is_none());
    }
}
