//! Tool definitions: name, description, parameter schema and handler.

use futures::FutureExt;
use futures::future::BoxFuture;
use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;

use super::handlers::{BoxedHandler, ToolResult};

/// A registered tool. Immutable once built.
#[derive(Clone)]
pub struct ToolDefinition {
    name: String,
    description: String,
    input_schema: Arc<JsonObject>,
    handler: BoxedHandler,
}

impl ToolDefinition {
    /// Define a tool with an asynchronous handler.
    ///
    /// The parameter schema is generated from `P`, which is also the type the
    /// handler receives once the raw arguments have been validated.
    pub fn new<P, F, Fut>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(P) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ToolResult> + Send + 'static,
    {
        let handler: BoxedHandler = Arc::new(move |arguments: JsonObject| {
            let params: P = serde_json::from_value(serde_json::Value::Object(arguments))?;
            Ok(handler(params).boxed())
        });

        Self {
            name: name.into(),
            description: description.into(),
            input_schema: cached_schema_for_type::<P>(),
            handler,
        }
    }

    /// Define a tool whose handler is a plain function.
    pub fn sync<P, F>(name: impl Into<String>, description: impl Into<String>, handler: F) -> Self
    where
        P: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(P) -> ToolResult + Send + Sync + 'static,
    {
        let handler = Arc::new(handler);
        Self::new(name, description, move |params: P| {
            let handler = Arc::clone(&handler);
            // Deferred so that the call happens inside the dispatcher's guard.
            async move { handler(params) }
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// JSON Schema of the tool's parameters.
    pub fn input_schema(&self) -> &JsonObject {
        &self.input_schema
    }

    /// Bind raw arguments to the handler, yielding the call to await.
    pub(crate) fn bind(
        &self,
        arguments: JsonObject,
    ) -> Result<BoxFuture<'static, ToolResult>, serde_json::Error> {
        (self.handler)(arguments)
    }

    /// Create a Tool model for this definition (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.clone().into(),
            description: Some(self.description.clone().into()),
            input_schema: self.input_schema.clone(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

impl std::fmt::Debug for ToolDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolDefinition")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
