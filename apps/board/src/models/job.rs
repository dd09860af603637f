use serde::{Deserialize, Serialize};

/// One posting exactly as it appears in the dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJobRecord {
    pub id: u64,
    pub company: String,
    pub logo: String,
    #[serde(rename = "new")]
    pub is_new: bool,
    #[serde(rename = "featured")]
    pub is_featured: bool,
    pub position: String,
    pub role: String,
    pub level: String,
    pub posted_at: String,
    pub contract: String,
    pub location: String,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Skill category derived from a keyword. Drives chip colouring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
    Language,
    Framework,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: Category,
}

impl Skill {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            category,
        }
    }
}

/// Normalized, display-ready posting.
///
/// `skills` is always `[role, level, languages..., tools...]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub company_name: String,
    pub company_logo: String,
    pub position: String,
    pub posted_at: String,
    pub job_type: String,
    pub location: String,
    pub is_new: bool,
    pub is_featured: bool,
    pub skills: Vec<Skill>,
}
