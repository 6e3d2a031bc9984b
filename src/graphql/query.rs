//! GraphQL Query root.

use async_graphql::{Context, Object, Result};

use super::{nullable, resolvers};
use super::schema::Project;
use crate::client::DevOpsApi;

/// Root query type
pub struct Query;

#[Object(name = "AzureDevOpsQuery")]
impl Query {
    /// Projects of the organization.
    ///
    /// Without `projectId` every project is listed; with it, the result holds
    /// exactly that project. `null` with an error entry when upstream fails.
    async fn projects(
        &self,
        ctx: &Context<'_>,
        project_id: Option<String>,
    ) -> Result<Option<Vec<Project>>> {
        let api = ctx.data::<DevOpsApi>()?;
        Ok(nullable(ctx, resolvers::projects(api, project_id.as_deref()).await))
    }
}
