//! Upstream REST payloads and request scopes.

use serde::Deserialize;

// ─── Payloads ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub id: String,
    pub name: String,
    pub url: Option<String>,
    pub default_branch: Option<String>,
    pub remote_url: Option<String>,
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefRecord {
    pub object_id: String,
    pub name: String,
    pub url: Option<String>,
    pub creator: Option<IdentityRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PushRecord {
    pub push_id: i32,
    pub date: Option<String>,
    pub url: Option<String>,
    pub pushed_by: Option<IdentityRecord>,
}

/// A user reference as embedded in refs (`creator`) and pushes (`pushedBy`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub unique_name: Option<String>,
}

// ─── Request scopes ────────────────────────────────────────────────

/// Which pushes to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushScope {
    /// Every push to a repository.
    Repository {
        project_id: String,
        repository_id: String,
    },
    /// Pushes that updated one named ref of a repository.
    Ref {
        project_id: String,
        repository_id: String,
        ref_name: String,
    },
}

impl PushScope {
    pub fn project_id(&self) -> &str {
        match self {
            PushScope::Repository { project_id, .. } | PushScope::Ref { project_id, .. } => {
                project_id
            }
        }
    }

    pub fn repository_id(&self) -> &str {
        match self {
            PushScope::Repository { repository_id, .. }
            | PushScope::Ref { repository_id, .. } => repository_id,
        }
    }

    /// Ref-name search filter, only present for [`PushScope::Ref`].
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            PushScope::Repository { .. } => None,
            PushScope::Ref { ref_name, .. } => Some(ref_name),
        }
    }
}
