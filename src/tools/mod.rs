//! Tool registry.
//!
//! Every admin operation is exposed as a named tool. The shape shared by
//! each handler (deserialize arguments, get a token, resolve the realm,
//! call downstream, marshal the result or error) is owned by one generic
//! [`Registry::register`] adapter instead of being repeated per tool.

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::keycloak::client::AdminClient;

pub mod authz;
pub mod clients;
pub mod groups;
pub mod realms;
pub mod roles;
pub mod server_info;
pub mod sessions;
pub mod users;

/// Uniform result of one tool invocation. Domain-level failures from the
/// admin API become error replies, not invocation errors.
#[derive(Debug, Clone)]
pub struct ToolReply {
    pub text: String,
    pub is_error: bool,
}

impl ToolReply {
    /// Marshals data as indented JSON.
    pub fn json<T: Serialize>(data: &T) -> Self {
        match serde_json::to_string_pretty(data) {
            Ok(text) => Self {
                text,
                is_error: false,
            },
            Err(err) => Self::error(format!("failed to marshal response: {err}")),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            text: message.into(),
            is_error: true,
        }
    }
}

type ToolFuture = Pin<Box<dyn Future<Output = ToolReply> + Send>>;
type Handler = Box<dyn Fn(Arc<AdminClient>, Value) -> ToolFuture + Send + Sync>;

pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
    handler: Handler,
}

/// Name → tool table covering every admin domain.
pub struct Registry {
    tools: BTreeMap<&'static str, Tool>,
}

impl Registry {
    /// Builds the registry with every tool domain wired in.
    pub fn with_all_tools() -> Self {
        let mut registry = Self {
            tools: BTreeMap::new(),
        };
        realms::register(&mut registry);
        users::register(&mut registry);
        groups::register(&mut registry);
        clients::register(&mut registry);
        roles::register(&mut registry);
        sessions::register(&mut registry);
        authz::register(&mut registry);
        server_info::register(&mut registry);
        registry
    }

    /// Registers one tool behind the shared adapter: arguments that fail to
    /// deserialize and handler errors both become error replies.
    pub fn register<A, F, Fut>(&mut self, name: &'static str, description: &'static str, run: F)
    where
        A: DeserializeOwned + Send + 'static,
        F: Fn(Arc<AdminClient>, A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<ToolReply>> + Send + 'static,
    {
        let run = Arc::new(run);
        let handler: Handler = Box::new(move |client, value| {
            let run = Arc::clone(&run);
            Box::pin(async move {
                let value = if value.is_null() {
                    Value::Object(Default::default())
                } else {
                    value
                };
                let args: A = match serde_json::from_value(value) {
                    Ok(args) => args,
                    Err(err) => return ToolReply::error(format!("invalid arguments: {err}")),
                };
                match (*run)(client, args).await {
                    Ok(reply) => reply,
                    Err(err) => ToolReply::error(format!("{err:#}")),
                }
            })
        });
        self.tools.insert(
            name,
            Tool {
                name,
                description,
                handler,
            },
        );
    }

    /// Invokes a tool by name. An unknown name is an invocation error, not
    /// an error reply.
    pub async fn invoke(
        &self,
        client: Arc<AdminClient>,
        name: &str,
        args: Value,
    ) -> Result<ToolReply> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| anyhow!("unknown tool '{name}'"))?;
        Ok((tool.handler)(client, args).await)
    }

    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

/// Pushes a query parameter when the value is present.
pub(crate) fn push_param<T: ToString>(
    query: &mut Vec<(&'static str, String)>,
    key: &'static str,
    value: &Option<T>,
) {
    if let Some(value) = value {
        query.push((key, value.to_string()));
    }
}
