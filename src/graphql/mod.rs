//! GraphQL API over the Azure DevOps REST API.
//!
//! ## Example
//!
//! ```graphql
//! # Everything under one project
//! {
//!   projects(projectId: "Fabrikam") {
//!     name
//!     repositories {
//!       name
//!       refs { name pushes { pushId pushedBy { displayName } } }
//!     }
//!   }
//! }
//! ```

pub mod query;
pub mod resolvers;
pub mod schema;

use async_graphql::{Context, EmptyMutation, EmptySubscription, Schema};

use crate::client::DevOpsApi;
use crate::error::DevOpsError;
use query::Query;

/// The gateway's GraphQL schema type
pub type DevOpsSchema = Schema<Query, EmptyMutation, EmptySubscription>;

/// Build the GraphQL schema with the REST adapter as context
pub fn build_schema(api: DevOpsApi) -> DevOpsSchema {
    Schema::build(Query, EmptyMutation, EmptySubscription)
        .data(api)
        .limit_depth(8) // deepest real query: projects > repositories > refs > pushes > pushedBy > id
        .limit_complexity(500)
        .finish()
}

/// Execute a GraphQL query and return the response as pretty JSON
pub async fn execute(schema: &DevOpsSchema, query: &str) -> crate::Result<String> {
    let result = schema.execute(query).await;
    Ok(serde_json::to_string_pretty(&result)?)
}

/// Turn a resolver failure into an explicit `null` for the current field,
/// with the error recorded at that field's path. Sibling fields still resolve.
pub(crate) fn nullable<T>(ctx: &Context<'_>, result: Result<T, DevOpsError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            let err = async_graphql::Error::new(err.to_string()).into_server_error(ctx.item.pos);
            ctx.add_error(ctx.set_error_path(err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fake::FakeTransport;
    use serde_json::{json, Value};

    fn fixture() -> FakeTransport {
        FakeTransport::new()
            .route(
                "_apis/projects",
                json!({ "count": 1, "value": [{ "id": "p1", "name": "Fabrikam" }] }),
            )
            .route(
                "p1/_apis/git/repositories",
                json!({ "count": 1, "value": [{ "id": "r1", "name": "web" }] }),
            )
            .route(
                "p1/_apis/git/repositories/r1/refs",
                json!({ "count": 1, "value": [{ "objectId": "abc", "name": "refs/heads/main" }] }),
            )
            .route(
                "p1/_apis/git/repositories/r1/pushes",
                json!({ "count": 1, "value": [{ "pushId": 7, "date": "2019-11-01T17:02:07Z" }] }),
            )
    }

    #[tokio::test]
    async fn test_type_names_are_stable() {
        let schema = build_schema(DevOpsApi::new(fixture().into_shared()));
        let sdl = schema.sdl();

        for name in [
            "AzureDevOpsQuery",
            "ProjectType",
            "RepositoryType",
            "RefType",
            "PushType",
            "CreatorType",
        ] {
            assert!(sdl.contains(name), "missing {}", name);
        }
    }

    #[tokio::test]
    async fn test_ancestry_fields_exposed() {
        let schema = build_schema(DevOpsApi::new(fixture().into_shared()));

        let result = execute(
            &schema,
            "{ projects { id repositories { id projectId refs { projectId repositoryId } } } }",
        )
        .await
        .unwrap();
        let body: Value = serde_json::from_str(&result).unwrap();

        let project = &body["data"]["projects"][0];
        let repo = &project["repositories"][0];
        let r = &repo["refs"][0];
        assert_eq!(repo["projectId"], project["id"]);
        assert_eq!(r["repositoryId"], repo["id"]);
        assert_eq!(r["projectId"], repo["projectId"]);
    }

    #[tokio::test]
    async fn test_failed_field_is_null_beside_its_siblings() {
        let schema = build_schema(DevOpsApi::new(fixture().into_shared()));

        let result = execute(
            &schema,
            r#"{ bad: projects(projectId: "missing") { id } good: projects { id } }"#,
        )
        .await
        .unwrap();
        let body: Value = serde_json::from_str(&result).unwrap();

        assert!(body["data"].is_object());
        assert_eq!(body["data"]["bad"], Value::Null);
        assert!(body["data"].as_object().unwrap().contains_key("bad"));
        assert_eq!(body["data"]["good"][0]["id"], "p1");

        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["path"], json!(["bad"]));
    }

    #[tokio::test]
    async fn test_nested_failure_nulls_only_that_list() {
        // no refs route: the refs call 404s
        let fake = FakeTransport::new()
            .route(
                "_apis/projects",
                json!({ "count": 1, "value": [{ "id": "p1", "name": "Fabrikam" }] }),
            )
            .route(
                "p1/_apis/git/repositories",
                json!({ "count": 1, "value": [{ "id": "r1", "name": "web" }] }),
            )
            .into_shared();
        let schema = build_schema(DevOpsApi::new(fake));

        let result = execute(&schema, "{ projects { name repositories { name refs { name } } } }")
            .await
            .unwrap();
        let body: Value = serde_json::from_str(&result).unwrap();

        let repo = &body["data"]["projects"][0]["repositories"][0];
        assert_eq!(repo["name"], "web");
        assert_eq!(repo["refs"], Value::Null);
        assert_eq!(
            body["errors"][0]["path"],
            json!(["projects", 0, "repositories", 0, "refs"])
        );
    }
}
