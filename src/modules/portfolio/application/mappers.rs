// src/modules/portfolio/application/mappers.rs
//
// Store record -> view-model mapping. Nothing here fails: missing or unresolved data
// degrades to a blank value.

use tracing::{debug, warn};

use crate::modules::portfolio::application::domain::entities::{
    ContentSection, PersonalInfo, Project, Skill, SocialLink, OTHER_CATEGORY,
};
use crate::modules::portfolio::application::domain::section_body::SectionBody;
use crate::modules::portfolio::application::ports::outgoing::content_records::{
    CategoryRef, ContentSectionRecord, HeroRecord, MediaRef, ProfileRecord, ProjectRecord,
    SkillRecord, SkillRef, SocialLinkRecord,
};

//
// ──────────────────────────────────────────────────────────
// References
// ──────────────────────────────────────────────────────────
//

/// Public URL of an upload field, or `""` when it cannot be resolved without another fetch.
pub fn resolve_media_url(media: Option<&MediaRef>) -> String {
    match media {
        None => String::new(),
        Some(MediaRef::Url(url)) => url.clone(),
        Some(MediaRef::Id(id)) => {
            // Only happens when the query depth is too shallow to expand uploads.
            warn!(media_id = id, "Media reference not expanded, using empty url");
            String::new()
        }
        Some(MediaRef::Expanded(media)) => media.url.clone().unwrap_or_default(),
    }
}

pub fn resolve_category(category: Option<&CategoryRef>) -> String {
    match category {
        Some(CategoryRef::Expanded(record)) => record
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(OTHER_CATEGORY)
            .to_string(),
        Some(CategoryRef::Id(id)) => {
            debug!(category_id = %id, "Skill category not expanded");
            OTHER_CATEGORY.to_string()
        }
        None => OTHER_CATEGORY.to_string(),
    }
}

//
// ──────────────────────────────────────────────────────────
// Profile
// ──────────────────────────────────────────────────────────
//

pub fn map_personal_info(profile: &ProfileRecord) -> PersonalInfo {
    PersonalInfo {
        name: profile.name.clone().unwrap_or_default(),
        title: profile.title.clone().unwrap_or_default(),
        location: profile.location.clone(),
        avatar_url: resolve_media_url(profile.avatar.as_ref()),
        resume_url: resolve_media_url(profile.resume.as_ref()),
    }
}

pub fn map_social_links(links: Option<&[SocialLinkRecord]>) -> Vec<SocialLink> {
    links
        .unwrap_or_default()
        .iter()
        .map(|link| SocialLink {
            id: link
                .id
                .as_ref()
                .map(ToString::to_string)
                .filter(|id| !id.is_empty()),
            name: link.name.clone().unwrap_or_default(),
            url: link.url.clone().unwrap_or_default(),
        })
        .collect()
}

//
// ──────────────────────────────────────────────────────────
// Landing page
// ──────────────────────────────────────────────────────────
//

pub fn map_content_section(section: Option<&ContentSectionRecord>) -> ContentSection {
    let Some(section) = section else {
        return ContentSection::default();
    };

    ContentSection {
        title: section.title.clone(),
        short_description: section.short_description.clone(),
        bodies: SectionBody::resolve(section).into_bodies(),
    }
}

/// The hero carries no title and only ever a plain description.
pub fn map_hero_content(hero: Option<&HeroRecord>) -> ContentSection {
    let Some(hero) = hero else {
        return ContentSection::default();
    };

    ContentSection {
        title: None,
        short_description: hero.short_description.clone(),
        bodies: SectionBody::from_description(hero.description.as_deref()).into_bodies(),
    }
}

pub fn map_keywords(hero: Option<&HeroRecord>) -> Vec<String> {
    hero.and_then(|h| h.keywords.as_ref())
        .map(|keywords| {
            keywords
                .iter()
                .map(|k| k.keyword.clone().unwrap_or_default())
                .collect()
        })
        .unwrap_or_default()
}

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

pub fn map_skill(skill: &SkillRecord) -> Skill {
    Skill {
        id: skill.id.to_string(),
        name: skill.name.clone().unwrap_or_default(),
        category: resolve_category(skill.category.as_ref()),
        icon: resolve_media_url(skill.icon.as_ref()),
        website: skill.website.clone(),
        color: skill.color.clone(),
    }
}

pub fn map_skills(skills: &[SkillRecord]) -> Vec<Skill> {
    skills.iter().map(map_skill).collect()
}

/// Expanded skills of a project; bare ids are skipped.
fn map_skill_refs(refs: Option<&[SkillRef]>) -> Vec<Skill> {
    refs.unwrap_or_default()
        .iter()
        .filter_map(|skill_ref| match skill_ref {
            SkillRef::Expanded(skill) => Some(map_skill(skill)),
            SkillRef::Id(id) => {
                warn!(skill_id = %id, "Project skill not expanded, skipping");
                None
            }
        })
        .collect()
}

pub fn map_project(project: &ProjectRecord) -> Project {
    Project {
        id: project.id.to_string(),
        title: project.title.clone().unwrap_or_default(),
        description: project.description.clone().unwrap_or_default(),
        image_url: resolve_media_url(project.image.as_ref()),
        video_url: project.video_url.clone().filter(|u| !u.is_empty()),
        live_url: project.live_url.clone(),
        github_url: project.github_url.clone(),
        featured: project.featured.unwrap_or(false),
        order: project.order.unwrap_or(0.0),
        skills: map_skill_refs(project.skills.as_deref()),
    }
}

/// Maps and orders projects by `order` ascending. The sort is stable, so projects
/// sharing an order keep the store's sequence.
pub fn map_projects(projects: &[ProjectRecord]) -> Vec<Project> {
    let mut mapped: Vec<Project> = projects.iter().map(map_project).collect();
    mapped.sort_by(|a, b| a.order.total_cmp(&b.order));
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::ports::outgoing::content_records::{
        BodyRecord, KeywordRecord, MediaRecord, RecordId, SkillCategoryRecord,
    };

    fn expanded_media(url: Option<&str>) -> MediaRef {
        MediaRef::Expanded(MediaRecord {
            id: Some(RecordId::Int(1)),
            url: url.map(str::to_string),
            ..Default::default()
        })
    }

    fn project_with_order(id: i64, order: Option<f64>) -> ProjectRecord {
        ProjectRecord {
            id: RecordId::Int(id),
            title: Some(format!("Project {id}")),
            order,
            ..Default::default()
        }
    }

    // --------------------------------------------------
    // Media
    // --------------------------------------------------

    #[test]
    fn media_url_fails_soft_to_empty_string() {
        assert_eq!(resolve_media_url(None), "");
        assert_eq!(resolve_media_url(Some(&MediaRef::Id(17))), "");
        assert_eq!(resolve_media_url(Some(&expanded_media(None))), "");
    }

    #[test]
    fn media_url_passes_through_resolved_values() {
        assert_eq!(
            resolve_media_url(Some(&MediaRef::Url("https://cdn/x.png".to_string()))),
            "https://cdn/x.png"
        );
        assert_eq!(
            resolve_media_url(Some(&expanded_media(Some("/media/avatar.png")))),
            "/media/avatar.png"
        );
    }

    // --------------------------------------------------
    // Profile
    // --------------------------------------------------

    #[test]
    fn personal_info_defaults_missing_title_to_empty() {
        let profile = ProfileRecord {
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };

        let info = map_personal_info(&profile);
        assert_eq!(info.name, "Jane Doe");
        assert_eq!(info.title, "");
        assert_eq!(info.location, None);
        assert_eq!(info.avatar_url, "");
        assert_eq!(info.resume_url, "");
    }

    #[test]
    fn personal_info_resolves_media() {
        let profile = ProfileRecord {
            name: Some("Jane".to_string()),
            title: Some("Engineer".to_string()),
            location: Some("Lisbon".to_string()),
            avatar: Some(expanded_media(Some("/a.png"))),
            resume: Some(MediaRef::Id(5)),
            social_links: None,
        };

        let info = map_personal_info(&profile);
        assert_eq!(info.avatar_url, "/a.png");
        assert_eq!(info.resume_url, "");
        assert_eq!(info.location.as_deref(), Some("Lisbon"));
    }

    #[test]
    fn social_links_fill_blanks() {
        let links = vec![
            SocialLinkRecord {
                id: Some(RecordId::Text("abc".to_string())),
                name: Some("github".to_string()),
                url: Some("https://github.com/jane".to_string()),
            },
            SocialLinkRecord {
                id: Some(RecordId::Text(String::new())),
                name: None,
                url: None,
            },
        ];

        let mapped = map_social_links(Some(&links));
        assert_eq!(mapped.len(), 2);
        assert_eq!(mapped[0].id.as_deref(), Some("abc"));
        assert_eq!(mapped[0].name, "github");
        assert_eq!(mapped[1].id, None);
        assert_eq!(mapped[1].name, "");
        assert_eq!(mapped[1].url, "");

        assert!(map_social_links(None).is_empty());
    }

    // --------------------------------------------------
    // Sections
    // --------------------------------------------------

    #[test]
    fn absent_section_maps_to_empty_bodies_only() {
        let section = map_content_section(None);
        assert_eq!(section, ContentSection::default());
        assert!(section.title.is_none());
        assert!(section.short_description.is_none());
        assert!(section.bodies.is_empty());
    }

    #[test]
    fn section_keeps_title_and_applies_precedence() {
        let record = ContentSectionRecord {
            title: Some("About".to_string()),
            short_description: Some("Who I am".to_string()),
            long_description: Some("Long text".to_string()),
            description: Some("Old text".to_string()),
            bodies: Some(vec![BodyRecord {
                text: Some("para".to_string()),
            }]),
            ..Default::default()
        };

        let section = map_content_section(Some(&record));
        assert_eq!(section.title.as_deref(), Some("About"));
        assert_eq!(section.short_description.as_deref(), Some("Who I am"));
        assert_eq!(section.bodies, vec!["Long text"]);
    }

    #[test]
    fn section_description_fallback() {
        let record = ContentSectionRecord {
            description: Some("X".to_string()),
            ..Default::default()
        };

        assert_eq!(map_content_section(Some(&record)).bodies, vec!["X"]);
    }

    #[test]
    fn hero_uses_description_only() {
        let hero = HeroRecord {
            short_description: Some("Hi, I'm Jane".to_string()),
            keywords: Some(vec![
                KeywordRecord {
                    keyword: Some("Rust".to_string()),
                },
                KeywordRecord { keyword: None },
            ]),
            description: Some("I build backends".to_string()),
        };

        let content = map_hero_content(Some(&hero));
        assert!(content.title.is_none());
        assert_eq!(content.short_description.as_deref(), Some("Hi, I'm Jane"));
        assert_eq!(content.bodies, vec!["I build backends"]);

        assert_eq!(map_keywords(Some(&hero)), vec!["Rust", ""]);
        assert!(map_keywords(None).is_empty());
        assert_eq!(map_hero_content(None), ContentSection::default());
    }

    // --------------------------------------------------
    // Skills
    // --------------------------------------------------

    #[test]
    fn skill_category_is_flattened_to_title() {
        let skill = SkillRecord {
            id: RecordId::Int(3),
            name: Some("Rust".to_string()),
            category: Some(CategoryRef::Expanded(SkillCategoryRecord {
                id: Some(RecordId::Int(1)),
                title: Some("Backend".to_string()),
            })),
            icon: Some(MediaRef::Url("/icons/rust.svg".to_string())),
            website: Some("https://rust-lang.org".to_string()),
            color: Some("#dea584".to_string()),
        };

        let mapped = map_skill(&skill);
        assert_eq!(mapped.id, "3");
        assert_eq!(mapped.category, "Backend");
        assert_eq!(mapped.icon, "/icons/rust.svg");
        assert_eq!(mapped.website.as_deref(), Some("https://rust-lang.org"));
        assert_eq!(mapped.color.as_deref(), Some("#dea584"));
    }

    #[test]
    fn unresolved_category_defaults_to_other() {
        assert_eq!(
            resolve_category(Some(&CategoryRef::Id(RecordId::Int(9)))),
            "Other"
        );
        assert_eq!(resolve_category(None), "Other");
        assert_eq!(
            resolve_category(Some(&CategoryRef::Expanded(SkillCategoryRecord {
                id: None,
                title: Some(String::new()),
            }))),
            "Other"
        );
    }

    // --------------------------------------------------
    // Projects
    // --------------------------------------------------

    #[test]
    fn project_defaults() {
        let project = map_project(&ProjectRecord {
            id: RecordId::Int(12),
            title: Some("Site".to_string()),
            ..Default::default()
        });

        assert_eq!(project.id, "12");
        assert_eq!(project.description, "");
        assert_eq!(project.image_url, "");
        assert!(!project.featured);
        assert_eq!(project.order, 0.0);
        assert!(project.skills.is_empty());
        assert!(project.video_url.is_none());
    }

    #[test]
    fn project_skills_keep_expanded_and_skip_ids() {
        let project = map_project(&ProjectRecord {
            id: RecordId::Text("p1".to_string()),
            skills: Some(vec![
                SkillRef::Id(RecordId::Int(4)),
                SkillRef::Expanded(Box::new(SkillRecord {
                    id: RecordId::Int(5),
                    name: Some("Rust".to_string()),
                    ..Default::default()
                })),
            ]),
            image: Some(MediaRef::Id(8)),
            ..Default::default()
        });

        assert_eq!(project.skills.len(), 1);
        assert_eq!(project.skills[0].id, "5");
        assert_eq!(project.skills[0].category, "Other");
        assert_eq!(project.image_url, "");
    }

    #[test]
    fn projects_are_sorted_by_order_ascending() {
        let records = vec![
            project_with_order(1, Some(3.0)),
            project_with_order(2, Some(1.0)),
            project_with_order(3, Some(2.0)),
        ];

        let orders: Vec<f64> = map_projects(&records).iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn fractional_order_sorts_between_whole_numbers() {
        let records = vec![
            project_with_order(1, Some(2.0)),
            project_with_order(2, Some(1.5)),
            project_with_order(3, Some(1.0)),
        ];

        let ids: Vec<String> = map_projects(&records).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["3", "2", "1"]);
    }

    #[test]
    fn projects_with_equal_order_keep_store_sequence() {
        let records = vec![
            project_with_order(10, None),
            project_with_order(11, Some(1.0)),
            project_with_order(12, Some(0.0)),
        ];

        let ids: Vec<String> = map_projects(&records).into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["10", "12", "11"]);
    }
}
