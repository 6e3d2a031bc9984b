//! REST client adapter for the Azure DevOps API.
//!
//! Four endpoint families are used, all relative to the organization URL:
//!
//! ```text
//! _apis/projects[/{project}]
//! {project}/_apis/git/repositories
//! {project}/_apis/git/repositories/{repository}/refs
//! {project}/_apis/git/repositories/{repository}/pushes[?searchCriteria.refName=..]
//! ```

pub mod credential;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

use crate::error::{DevOpsError, Result};

pub use credential::Credential;
pub use transport::{auth_headers, HttpTransport, Transport};
pub use types::{IdentityRecord, ProjectRecord, PushRecord, PushScope, RefRecord, RepositoryRecord};

/// Query parameter used to filter pushes by ref.
pub const REF_NAME_FILTER: &str = "searchCriteria.refName";

/// Typed access to the endpoint families over any [`Transport`].
#[derive(Clone)]
pub struct DevOpsApi {
    transport: Arc<dyn Transport>,
}

impl DevOpsApi {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// All projects of the organization, in API order.
    pub async fn list_projects(&self) -> Result<Vec<ProjectRecord>> {
        self.collection(&["_apis", "projects"], &[]).await
    }

    /// A single project by id or name.
    pub async fn get_project(&self, project_id: &str) -> Result<ProjectRecord> {
        let body = self
            .transport
            .get(&["_apis", "projects", id_segment(project_id)?], &[])
            .await?;
        Ok(serde_json::from_value(body)?)
    }

    pub async fn list_repositories(&self, project_id: &str) -> Result<Vec<RepositoryRecord>> {
        let segments = [id_segment(project_id)?, "_apis", "git", "repositories"];
        self.collection(&segments, &[]).await
    }

    pub async fn list_refs(&self, project_id: &str, repository_id: &str) -> Result<Vec<RefRecord>> {
        let segments = [
            id_segment(project_id)?,
            "_apis",
            "git",
            "repositories",
            id_segment(repository_id)?,
            "refs",
        ];
        self.collection(&segments, &[]).await
    }

    /// Pushes of a repository, narrowed to one ref when the scope names one.
    pub async fn list_pushes(&self, scope: &PushScope) -> Result<Vec<PushRecord>> {
        let segments = [
            id_segment(scope.project_id())?,
            "_apis",
            "git",
            "repositories",
            id_segment(scope.repository_id())?,
            "pushes",
        ];
        match scope.ref_name() {
            Some(ref_name) => {
                self.collection(&segments, &[(REF_NAME_FILTER, ref_name)])
                    .await
            }
            None => self.collection(&segments, &[]).await,
        }
    }

    /// GET a `{ "count": n, "value": [...] }` envelope and decode `value`.
    async fn collection<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<Vec<T>> {
        let mut body = self.transport.get(segments, query).await?;
        let value = body
            .get_mut("value")
            .map(Value::take)
            .ok_or_else(|| DevOpsError::MissingCollection {
                path: segments.join("/"),
            })?;
        Ok(serde_json::from_value(value)?)
    }
}

/// An id placed into the path as exactly one segment.
///
/// Reserved characters are encoded by the transport, but empty, `.` and `..`
/// segments would still address a different resource, so they are refused.
fn id_segment(id: &str) -> Result<&str> {
    match id {
        "" | "." | ".." => Err(DevOpsError::InvalidIdentifier(id.to_string())),
        _ => Ok(id),
    }
}
