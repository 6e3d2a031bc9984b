//! Relationship resolvers.
//!
//! One function per edge of the graph. Each performs a single REST call and
//! stamps the returned nodes with the ancestry their own children will need.

use tracing::debug;

use super::schema::{Project, Push, Ref, RefAncestry, Repository, RepositoryAncestry};
use crate::client::{DevOpsApi, PushScope};
use crate::error::Result;

/// Root `projects` field. A missing or empty id lists every project; a
/// present one fetches that project and wraps it in a one-element list.
pub async fn projects(api: &DevOpsApi, project_id: Option<&str>) -> Result<Vec<Project>> {
    match project_id.filter(|id| !id.is_empty()) {
        Some(id) => {
            debug!(project = id, "resolving single project");
            let project = api.get_project(id).await?;
            Ok(vec![Project::from(project)])
        }
        None => {
            debug!("resolving all projects");
            let projects = api.list_projects().await?;
            Ok(projects.into_iter().map(Project::from).collect())
        }
    }
}

pub async fn repositories(api: &DevOpsApi, project: &Project) -> Result<Vec<Repository>> {
    debug!(project = %project.id.as_str(), "resolving repositories");
    let records = api.list_repositories(&project.id).await?;
    Ok(records
        .into_iter()
        .map(|r| {
            Repository::from_record(
                r,
                RepositoryAncestry {
                    project_id: project.id.0.clone(),
                },
            )
        })
        .collect())
}

/// The parent repository's own id becomes each ref's `repository_id`.
pub async fn refs(api: &DevOpsApi, repository: &Repository) -> Result<Vec<Ref>> {
    let project_id = &repository.ancestry.project_id;
    debug!(
        project = %project_id,
        repository = %repository.id.as_str(),
        "resolving refs"
    );
    let records = api.list_refs(project_id, &repository.id).await?;
    Ok(records
        .into_iter()
        .map(|r| {
            Ref::from_record(
                r,
                RefAncestry {
                    project_id: project_id.clone(),
                    repository_id: repository.id.0.clone(),
                },
            )
        })
        .collect())
}

pub async fn pushes(api: &DevOpsApi, scope: &PushScope) -> Result<Vec<Push>> {
    debug!(?scope, "resolving pushes");
    let records = api.list_pushes(scope).await?;
    Ok(records.into_iter().map(Push::from).collect())
}
