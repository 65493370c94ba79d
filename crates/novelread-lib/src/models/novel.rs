use serde::{Deserialize, Serialize};

/// A novel as returned by the public API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Novel {
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "super::null_as_default")]
    pub slug: String,
    pub thumbnail: Option<String>,
    pub description: Option<String>,
    pub updated_at: Option<String>,
    pub contributor: Option<Contributor>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Contributor {
    pub user: Option<ContributorUser>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContributorUser {
    pub name: Option<String>,
}

impl Novel {
    /// Name of the contributing user, if the API sent a non-blank one.
    pub fn contributor_name(&self) -> Option<&str> {
        self.contributor
            .as_ref()
            .and_then(|contributor| contributor.user.as_ref())
            .and_then(|user| user.name.as_deref())
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NovelsResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub novels: Vec<Novel>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NovelResponse {
    pub novel: Novel,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelatedNovelsResponse {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub related_novels: Vec<Novel>,
}
