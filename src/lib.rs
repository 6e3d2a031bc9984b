//! # devops-graph
//!
//! A GraphQL gateway over the Azure DevOps REST API.
//!
//! Projects, git repositories, refs and pushes are exposed as one navigable
//! graph. Every relationship field performs a single REST call and passes
//! the identifiers of its ancestors down to the nodes it returns, so deeper
//! fields can address the REST API without going back up the tree.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use devops_graph::{build_schema, execute, Credential, DevOpsApi, HttpTransport};
//! use std::sync::Arc;
//!
//! # async fn run() -> devops_graph::Result<()> {
//! let credential = Credential::from_token("my-pat")?;
//! let transport = HttpTransport::new("https://dev.azure.com/contoso", "5.1", &credential, None)?;
//! let schema = build_schema(DevOpsApi::new(Arc::new(transport)));
//!
//! let json = execute(&schema, "{ projects { name repositories { name } } }").await?;
//! println!("{}", json);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod graphql;
pub mod server;

// Re-exports for convenience
pub use client::{Credential, DevOpsApi, HttpTransport, PushScope, Transport};
pub use config::Config;
pub use error::{DevOpsError, Result};
pub use graphql::{build_schema, execute, DevOpsSchema};
