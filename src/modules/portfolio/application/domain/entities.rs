use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const OTHER_CATEGORY: &str = "Other";
pub const DEFAULT_SITE_DESCRIPTION: &str = "Portfolio";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "Backend Engineer")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub avatar_url: String,
    pub resume_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SocialLink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[schema(example = "github")]
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    pub bodies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Skill {
    pub id: String,
    #[schema(example = "Rust")]
    pub name: String,
    /// Title of the referenced category, `Other` when it could not be resolved.
    #[schema(example = "Backend")]
    pub category: String,
    pub icon: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub featured: bool,
    pub order: f64,
    pub skills: Vec<Skill>,
}

/// Render-ready snapshot of every section of the site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    pub personal_info: PersonalInfo,
    pub social_links: Vec<SocialLink>,
    pub hero_content: ContentSection,
    pub keywords: Vec<String>,
    pub about_content: ContentSection,
    pub skills_content: ContentSection,
    pub projects_content: ContentSection,
    pub contact_content: ContentSection,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PortfolioMetadata {
    #[schema(example = "Jane Doe | Backend Engineer")]
    pub title: String,
    pub description: String,
}

impl PortfolioView {
    /// The profile has never been filled in; the owner has to finish setup in the admin.
    pub fn needs_setup(&self) -> bool {
        self.personal_info.name.trim().is_empty()
    }

    pub fn metadata(&self) -> PortfolioMetadata {
        let description = self
            .hero_content
            .short_description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_SITE_DESCRIPTION)
            .to_string();

        PortfolioMetadata {
            title: format!("{} | {}", self.personal_info.name, self.personal_info.title),
            description,
        }
    }

    pub fn featured_projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(|p| p.featured)
    }

    /// Distinct categories in the order skills first mention them.
    pub fn skill_categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for skill in &self.skills {
            let category = if skill.category.is_empty() {
                OTHER_CATEGORY
            } else {
                skill.category.as_str()
            };
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }
}
