use crate::modules::portfolio::application::ports::outgoing::content_records::{
    BodyRecord, ContentSectionRecord,
};

/// Which field of a content section supplies its body text.
///
/// Sections have carried three shapes over time and a record may hold several at once
/// while content is being migrated. The first matching rule wins:
/// `longDescription`, then `bodies`, then `description`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    Long(String),
    Paragraphs(Vec<String>),
    Description(String),
    Empty,
}

impl SectionBody {
    pub fn resolve(record: &ContentSectionRecord) -> Self {
        if let Some(long) = non_empty(&record.long_description) {
            return SectionBody::Long(long.to_string());
        }

        // An empty `bodies` array still counts as present.
        if let Some(bodies) = &record.bodies {
            return SectionBody::Paragraphs(bodies.iter().map(body_text).collect());
        }

        Self::from_description(record.description.as_deref())
    }

    pub fn from_description(description: Option<&str>) -> Self {
        match description {
            Some(text) if !text.is_empty() => SectionBody::Description(text.to_string()),
            _ => SectionBody::Empty,
        }
    }

    pub fn into_bodies(self) -> Vec<String> {
        match self {
            SectionBody::Long(text) | SectionBody::Description(text) => vec![text],
            SectionBody::Paragraphs(paragraphs) => paragraphs,
            SectionBody::Empty => Vec::new(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn body_text(body: &BodyRecord) -> String {
    body.text.clone().unwrap_or_default()
}
