use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Empty until the backend assigns one.
    #[serde(rename = "_id", default, deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub category: String,
    /// `None` when the record carries no lesson list at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lessons: Option<Vec<Lesson>>,
}

impl Course {
    /// New, unsaved course with an empty lesson list.
    pub fn blank() -> Self {
        Self {
            lessons: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn lessons(&self) -> &[Lesson] {
        self.lessons.as_deref().unwrap_or_default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(rename = "_id", default, deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(rename = "youtubeUrl")]
    pub youtube_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePage {
    pub courses: Vec<Course>,
    pub total_elements: u64,
    pub total_pages: u32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

// The backend uses numeric ids; the client compares ids as strings.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawId> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => String::new(),
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(n)) => n.to_string(),
    })
}
