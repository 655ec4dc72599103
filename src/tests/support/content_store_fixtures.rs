use async_trait::async_trait;
use serde_json::{json, Value};

use crate::modules::portfolio::application::ports::outgoing::content_store::{
    Collection, ContentStore, ContentStoreError, ListOptions, Singleton,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreTarget {
    LandingPage,
    Profile,
    Skills,
    Projects,
}

/// Content store backed by fixed JSON documents. Ignores query options, so tests see
/// exactly what an uncooperative store would return.
#[derive(Clone)]
pub struct InMemoryContentStore {
    landing_page: Value,
    profile: Value,
    skills: Vec<Value>,
    projects: Vec<Value>,
    failure: Option<(StoreTarget, ContentStoreError)>,
    reachable: bool,
}

impl InMemoryContentStore {
    pub fn new(landing_page: Value, profile: Value) -> Self {
        Self {
            landing_page,
            profile,
            skills: vec![],
            projects: vec![],
            failure: None,
            reachable: true,
        }
    }

    pub fn with_skills(mut self, skills: Vec<Value>) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_projects(mut self, projects: Vec<Value>) -> Self {
        self.projects = projects;
        self
    }

    pub fn failing_on(mut self, target: StoreTarget, err: ContentStoreError) -> Self {
        self.failure = Some((target, err));
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.reachable = false;
        self
    }

    fn check(&self, target: StoreTarget) -> Result<(), ContentStoreError> {
        match &self.failure {
            Some((failing, err)) if *failing == target => Err(err.clone()),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn find_singleton(&self, singleton: Singleton) -> Result<Value, ContentStoreError> {
        match singleton {
            Singleton::LandingPage => {
                self.check(StoreTarget::LandingPage)?;
                Ok(self.landing_page.clone())
            }
            Singleton::Profile => {
                self.check(StoreTarget::Profile)?;
                Ok(self.profile.clone())
            }
        }
    }

    async fn list(
        &self,
        collection: Collection,
        options: ListOptions,
    ) -> Result<Vec<Value>, ContentStoreError> {
        let docs = match collection {
            Collection::Skills => {
                self.check(StoreTarget::Skills)?;
                &self.skills
            }
            Collection::Projects => {
                self.check(StoreTarget::Projects)?;
                &self.projects
            }
            Collection::SkillCategories => return Ok(vec![]),
        };

        Ok(docs.iter().take(options.limit as usize).cloned().collect())
    }

    async fn ping(&self) -> Result<(), ContentStoreError> {
        if self.reachable {
            Ok(())
        } else {
            Err(ContentStoreError::Unreachable("connection refused".to_string()))
        }
    }
}

pub fn sample_profile() -> Value {
    json!({
        "id": 1,
        "name": "Jane Doe",
        "title": "Backend Engineer",
        "location": "Lisbon",
        "avatar": { "id": 10, "url": "/media/jane.png", "alt": "Jane" },
        "resume": 11,
        "socialLinks": [
            { "id": "6620a1", "name": "github", "url": "https://github.com/janedoe" },
            { "id": "6620a2", "name": "email", "url": "jane@example.com" }
        ]
    })
}

/// Mixes old and new section shapes the way a half-migrated landing page does.
pub fn sample_landing_page() -> Value {
    json!({
        "id": 1,
        "hero": {
            "shortDescription": "Hi, I'm Jane",
            "keywords": [{ "keyword": "Rust" }, { "keyword": "Distributed systems" }],
            "description": "I build reliable backends."
        },
        "about": {
            "title": "About",
            "shortDescription": "Who I am",
            "longDescription": "The long story.",
            "description": "Legacy about text",
            "image": 12
        },
        "skills": {
            "title": "Skills",
            "shortDescription": "What I use"
        },
        "projects": {
            "title": "Projects",
            "shortDescription": "Selected work",
            "description": "Things I shipped."
        },
        "contact": {
            "title": "Contact",
            "shortDescription": "Say hello",
            "description": "Drop me a line."
        }
    })
}
