use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info};

use crate::modules::portfolio::application::domain::entities::PortfolioView;
use crate::modules::portfolio::application::mappers::{
    map_content_section, map_hero_content, map_keywords, map_personal_info, map_projects,
    map_skills, map_social_links,
};
use crate::modules::portfolio::application::portfolio_query_config::PortfolioQueryConfig;
use crate::modules::portfolio::application::ports::incoming::use_cases::{
    GetPortfolioDataError, GetPortfolioDataUseCase,
};
use crate::modules::portfolio::application::ports::outgoing::content_records::{
    LandingPageRecord, ProfileRecord, ProjectRecord, SkillRecord,
};
use crate::modules::portfolio::application::ports::outgoing::content_store::{
    Collection, ContentStore, ListOptions, Singleton, SortSpec,
};

// ============================================================================
// Service Implementation
// ============================================================================

pub struct GetPortfolioDataService<S>
where
    S: ContentStore,
{
    store: S,
    config: PortfolioQueryConfig,
}

impl<S> GetPortfolioDataService<S>
where
    S: ContentStore,
{
    pub fn new(store: S, config: PortfolioQueryConfig) -> Self {
        Self { store, config }
    }

    fn skills_options(&self) -> ListOptions {
        ListOptions {
            limit: self.config.skills_limit,
            sort: None,
            depth: Some(self.config.skills_depth),
        }
    }

    fn projects_options(&self) -> ListOptions {
        ListOptions {
            limit: self.config.projects_limit,
            sort: Some(SortSpec::ascending("order")),
            depth: Some(self.config.projects_depth),
        }
    }

    async fn fetch(&self) -> Result<PortfolioView, GetPortfolioDataError> {
        // The four reads are independent; every one of them has to succeed.
        let (landing, profile, skills, projects) = futures::try_join!(
            self.store.find_singleton(Singleton::LandingPage),
            self.store.find_singleton(Singleton::Profile),
            self.store.list(Collection::Skills, self.skills_options()),
            self.store.list(Collection::Projects, self.projects_options()),
        )?;

        let landing: LandingPageRecord = decode_singleton(landing)?;
        let profile: ProfileRecord = decode_singleton(profile)?;
        let skills: Vec<SkillRecord> = decode_records(skills)?;
        let projects: Vec<ProjectRecord> = decode_records(projects)?;

        let hero = landing.hero.as_ref();

        Ok(PortfolioView {
            personal_info: map_personal_info(&profile),
            social_links: map_social_links(profile.social_links.as_deref()),
            hero_content: map_hero_content(hero),
            keywords: map_keywords(hero),
            about_content: map_content_section(landing.about.as_ref()),
            skills_content: map_content_section(landing.skills.as_ref()),
            projects_content: map_content_section(landing.projects.as_ref()),
            contact_content: map_content_section(landing.contact.as_ref()),
            skills: map_skills(&skills),
            projects: map_projects(&projects),
        })
    }
}

#[async_trait]
impl<S> GetPortfolioDataUseCase for GetPortfolioDataService<S>
where
    S: ContentStore + Send + Sync,
{
    async fn execute(&self) -> Result<PortfolioView, GetPortfolioDataError> {
        let result = match self.config.fetch_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.fetch()).await {
                Ok(result) => result,
                Err(_) => Err(GetPortfolioDataError::DataUnavailable(format!(
                    "Content store did not answer within {}ms",
                    limit.as_millis()
                ))),
            },
            None => self.fetch().await,
        };

        match &result {
            Ok(view) => info!(
                skills = view.skills.len(),
                skill_categories = view.skill_categories().len(),
                projects = view.projects.len(),
                featured_projects = view.featured_projects().count(),
                "Portfolio data assembled"
            ),
            Err(err) => error!(error = %err, "Failed to assemble portfolio data"),
        }

        result
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// A singleton nobody has saved yet comes back as `null`; treat it as empty.
fn decode_singleton<T>(value: Value) -> Result<T, GetPortfolioDataError>
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value)?)
}

fn decode_records<T>(values: Vec<Value>) -> Result<Vec<T>, GetPortfolioDataError>
where
    T: DeserializeOwned,
{
    values
        .into_iter()
        .map(|value| serde_json::from_value(value).map_err(GetPortfolioDataError::from))
        .collect()
}
