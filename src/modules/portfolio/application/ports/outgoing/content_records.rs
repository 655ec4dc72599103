// src/modules/portfolio/application/ports/outgoing/content_records.rs
//
// Raw record shapes as the content store returns them. Every field is optional on the
// wire: admin-edited content can be incomplete, and references arrive either as bare
// identifiers or expanded objects depending on the requested depth.

use std::fmt;

use serde::Deserialize;

//
// ──────────────────────────────────────────────────────────
// Identifiers & references
// ──────────────────────────────────────────────────────────
//

/// Store identifiers are numeric on SQL-backed stores and strings on document stores.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub alt: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub mime_type: Option<String>,
}

/// Upload field value. Variant order matters for untagged decoding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum MediaRef {
    /// Already a public URL.
    Url(String),
    /// Unexpanded reference.
    Id(i64),
    Expanded(MediaRecord),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillCategoryRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Expanded(SkillCategoryRecord),
    Id(RecordId),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SkillRef {
    Expanded(Box<SkillRecord>),
    Id(RecordId),
}

//
// ──────────────────────────────────────────────────────────
// Profile (singleton)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SocialLinkRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar: Option<MediaRef>,
    #[serde(default)]
    pub resume: Option<MediaRef>,
    #[serde(default)]
    pub social_links: Option<Vec<SocialLinkRecord>>,
}

//
// ──────────────────────────────────────────────────────────
// Landing page (singleton)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct KeywordRecord {
    #[serde(default)]
    pub keyword: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroRecord {
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub keywords: Option<Vec<KeywordRecord>>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BodyRecord {
    #[serde(default)]
    pub text: Option<String>,
}

/// Union of every field a landing page section has carried across schema revisions:
/// legacy sections use `bodies` or `description`, newer ones `longDescription`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSectionRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub bodies: Option<Vec<BodyRecord>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<MediaRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LandingPageRecord {
    #[serde(default)]
    pub hero: Option<HeroRecord>,
    #[serde(default)]
    pub about: Option<ContentSectionRecord>,
    #[serde(default)]
    pub skills: Option<ContentSectionRecord>,
    #[serde(default)]
    pub projects: Option<ContentSectionRecord>,
    #[serde(default)]
    pub contact: Option<ContentSectionRecord>,
}

//
// ──────────────────────────────────────────────────────────
// Collections
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub icon: Option<MediaRef>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub featured: Option<bool>,
    #[serde(default)]
    /// Number field; fractional values are allowed.
    pub order: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<MediaRef>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<SkillRef>>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn media_ref_decodes_every_wire_shape() {
        let url: MediaRef = serde_json::from_value(json!("https://cdn.test/a.png")).unwrap();
        assert_eq!(url, MediaRef::Url("https://cdn.test/a.png".to_string()));

        let id: MediaRef = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(id, MediaRef::Id(42));

        let expanded: MediaRef =
            serde_json::from_value(json!({ "id": 7, "url": "/media/a.png", "alt": "a" })).unwrap();
        match expanded {
            MediaRef::Expanded(media) => {
                assert_eq!(media.url.as_deref(), Some("/media/a.png"));
                assert_eq!(media.id, Some(RecordId::Int(7)));
            }
            other => panic!("expected expanded media, got {other:?}"),
        }
    }

    #[test]
    fn null_upload_field_is_absent() {
        let profile: ProfileRecord =
            serde_json::from_value(json!({ "name": "Jane", "avatar": null })).unwrap();
        assert!(profile.avatar.is_none());
    }

    #[test]
    fn category_ref_prefers_expanded_object() {
        let skill: SkillRecord = serde_json::from_value(json!({
            "id": 1,
            "name": "Rust",
            "category": { "id": 3, "title": "Backend" }
        }))
        .unwrap();

        assert_eq!(
            skill.category,
            Some(CategoryRef::Expanded(SkillCategoryRecord {
                id: Some(RecordId::Int(3)),
                title: Some("Backend".to_string()),
            }))
        );

        let bare: SkillRecord =
            serde_json::from_value(json!({ "id": "abc", "name": "Go", "category": "cat-1" }))
                .unwrap();
        assert_eq!(
            bare.category,
            Some(CategoryRef::Id(RecordId::Text("cat-1".to_string())))
        );
    }

    #[test]
    fn project_skills_accept_ids_and_documents() {
        let project: ProjectRecord = serde_json::from_value(json!({
            "id": 9,
            "title": "Site",
            "skills": [4, { "id": 5, "name": "Rust" }],
            "liveUrl": "https://example.com"
        }))
        .unwrap();

        let skills = project.skills.unwrap();
        assert!(matches!(skills[0], SkillRef::Id(RecordId::Int(4))));
        assert!(matches!(skills[1], SkillRef::Expanded(_)));
        assert_eq!(project.live_url.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn record_id_display_is_plain() {
        assert_eq!(RecordId::Int(12).to_string(), "12");
        assert_eq!(RecordId::Text("65f0".to_string()).to_string(), "65f0");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let landing: LandingPageRecord = serde_json::from_value(json!({
            "id": 1,
            "updatedAt": "2026-01-01T00:00:00Z",
            "about": { "title": "About", "longDescription": "Hi", "image": 3 }
        }))
        .unwrap();

        let about = landing.about.unwrap();
        assert_eq!(about.long_description.as_deref(), Some("Hi"));
        assert_eq!(about.image, Some(MediaRef::Id(3)));
    }
}
