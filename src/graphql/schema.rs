//! GraphQL schema types.
//!
//! Each node keeps the identifiers of its ancestors in an explicit, hidden
//! ancestry record. Relationship fields read only from that record and the
//! node's own id, never from the shape of the REST payload.

use async_graphql::{ComplexObject, Context, Result, SimpleObject, ID};

use super::{nullable, resolvers};
use crate::client::{
    DevOpsApi, IdentityRecord, ProjectRecord, PushRecord, PushScope, RefRecord, RepositoryRecord,
};

/// A team project
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "ProjectType", complex)]
pub struct Project {
    pub id: ID,
    pub name: String,
    pub description: Option<String>,
    /// REST URL of the project
    pub url: Option<String>,
    /// Lifecycle state, e.g. `wellFormed`
    pub state: Option<String>,
}

impl From<ProjectRecord> for Project {
    fn from(r: ProjectRecord) -> Self {
        Self {
            id: ID(r.id),
            name: r.name,
            description: r.description,
            url: r.url,
            state: r.state,
        }
    }
}

#[ComplexObject]
impl Project {
    /// Git repositories of this project
    async fn repositories(&self, ctx: &Context<'_>) -> Result<Option<Vec<Repository>>> {
        let api = ctx.data::<DevOpsApi>()?;
        Ok(nullable(ctx, resolvers::repositories(api, self).await))
    }
}

/// Identifiers a repository needs to address its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryAncestry {
    pub project_id: String,
}

/// A git repository
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "RepositoryType", complex)]
pub struct Repository {
    pub id: ID,
    pub name: String,
    pub url: Option<String>,
    /// Full name of the default branch, e.g. `refs/heads/main`
    pub default_branch: Option<String>,
    pub remote_url: Option<String>,
    pub web_url: Option<String>,
    #[graphql(skip)]
    pub ancestry: RepositoryAncestry,
}

impl Repository {
    pub fn from_record(r: RepositoryRecord, ancestry: RepositoryAncestry) -> Self {
        Self {
            id: ID(r.id),
            name: r.name,
            url: r.url,
            default_branch: r.default_branch,
            remote_url: r.remote_url,
            web_url: r.web_url,
            ancestry,
        }
    }

    pub fn push_scope(&self) -> PushScope {
        PushScope::Repository {
            project_id: self.ancestry.project_id.clone(),
            repository_id: self.id.0.clone(),
        }
    }
}

#[ComplexObject]
impl Repository {
    /// Id of the project this repository belongs to
    async fn project_id(&self) -> ID {
        ID(self.ancestry.project_id.clone())
    }

    /// Branches and tags
    async fn refs(&self, ctx: &Context<'_>) -> Result<Option<Vec<Ref>>> {
        let api = ctx.data::<DevOpsApi>()?;
        Ok(nullable(ctx, resolvers::refs(api, self).await))
    }

    /// Every push to this repository
    async fn pushes(&self, ctx: &Context<'_>) -> Result<Option<Vec<Push>>> {
        let api = ctx.data::<DevOpsApi>()?;
        Ok(nullable(ctx, resolvers::pushes(api, &self.push_scope()).await))
    }
}

/// Identifiers a ref needs to address its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefAncestry {
    pub project_id: String,
    pub repository_id: String,
}

/// A branch or tag
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "RefType", complex)]
pub struct Ref {
    pub object_id: ID,
    /// Full ref name, e.g. `refs/heads/main`
    pub name: String,
    pub url: Option<String>,
    pub creator: Option<Creator>,
    #[graphql(skip)]
    pub ancestry: RefAncestry,
}

impl Ref {
    pub fn from_record(r: RefRecord, ancestry: RefAncestry) -> Self {
        Self {
            object_id: ID(r.object_id),
            name: r.name,
            url: r.url,
            creator: r.creator.map(Creator::from),
            ancestry,
        }
    }

    pub fn push_scope(&self) -> PushScope {
        PushScope::Ref {
            project_id: self.ancestry.project_id.clone(),
            repository_id: self.ancestry.repository_id.clone(),
            ref_name: self.name.clone(),
        }
    }
}

#[ComplexObject]
impl Ref {
    async fn project_id(&self) -> ID {
        ID(self.ancestry.project_id.clone())
    }

    async fn repository_id(&self) -> ID {
        ID(self.ancestry.repository_id.clone())
    }

    /// Pushes that updated this ref
    async fn pushes(&self, ctx: &Context<'_>) -> Result<Option<Vec<Push>>> {
        let api = ctx.data::<DevOpsApi>()?;
        Ok(nullable(ctx, resolvers::pushes(api, &self.push_scope()).await))
    }
}

/// A push to a repository
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "PushType")]
pub struct Push {
    pub push_id: i32,
    /// Push timestamp as reported upstream (ISO 8601)
    pub date: Option<String>,
    pub url: Option<String>,
    pub pushed_by: Option<Creator>,
}

impl From<PushRecord> for Push {
    fn from(r: PushRecord) -> Self {
        Self {
            push_id: r.push_id,
            date: r.date,
            url: r.url,
            pushed_by: r.pushed_by.map(Creator::from),
        }
    }
}

/// A user identity
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "CreatorType")]
pub struct Creator {
    pub id: Option<ID>,
    pub display_name: Option<String>,
    pub unique_name: Option<String>,
}

impl From<IdentityRecord> for Creator {
    fn from(r: IdentityRecord) -> Self {
        Self {
            id: r.id.map(ID),
            display_name: r.display_name,
            unique_name: r.unique_name,
        }
    }
}
