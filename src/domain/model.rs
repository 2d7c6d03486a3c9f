use serde::{Deserialize, Deserializer, Serialize};

/// A JSON Resume style record. Every field is optional in the input and
/// defaults to empty; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub basics: Basics,
    pub work: Vec<Work>,
    pub education: Vec<Education>,
    pub certificates: Vec<Certificate>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Basics {
    pub name: String,
    pub label: String,
    pub email: String,
    pub location: Location,
    pub profiles: Vec<Profile>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub city: String,
    pub region: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub network: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Work {
    pub name: String,
    pub position: String,
    pub location: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    pub end_date: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub institution: String,
    pub location: String,
    pub area: String,
    pub study_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub end_date: String,
    pub score: Option<String>,
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certificate {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub url: String,
    pub blog: Option<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Publication {
    pub name: String,
    pub publisher: String,
    pub release_date: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub fluency: String,
}

/// LaTeX source produced by one generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub content: String,
    /// Headings of the sections that were emitted, in output order.
    pub sections: Vec<&'static str>,
}

/// Date fields may be `null` in the input; treat that like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Resume {
    pub fn from_json_slice(data: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(data)
    }
}
