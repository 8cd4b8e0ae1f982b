//! Tool registry for lookup during dispatch.

use std::collections::HashMap;

use crate::error::{AgentError, Result};
use super::function_tool::Tool;
use super::schema::ToolSchema;

/// A name-unique collection of tools, preserving registration order.
///
/// Registration order matters: `describe_all` concatenates tool signatures
/// in the order they were registered, so prompts are deterministic for a
/// given tool list. A registry is built once at agent construction time and
/// is read-only afterwards.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Box<dyn Tool>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a list of tools
    pub fn with_tools(tools: Vec<Box<dyn Tool>>) -> Result<Self> {
        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool)?;
        }
        Ok(registry)
    }

    /// Add a tool to the registry.
    ///
    /// Fails with [`AgentError::DuplicateToolName`] when a tool with the same
    /// name is already registered; the registry is unchanged on failure.
    pub fn register(&mut self, tool: Box<dyn Tool>) -> Result<()> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            return Err(AgentError::DuplicateToolName { name });
        }
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by name.
    ///
    /// Fails with [`AgentError::UnknownTool`] carrying the list of available
    /// names so the failure can steer the model when reported back as an
    /// observation.
    pub fn lookup(&self, name: &str) -> Result<&dyn Tool> {
        self.index
            .get(name)
            .map(|&i| self.tools[i].as_ref())
            .ok_or_else(|| AgentError::UnknownTool {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Names of all registered tools, in registration order
    pub fn names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Schemas of all registered tools, in registration order
    pub fn schemas(&self) -> Vec<&ToolSchema> {
        self.tools.iter().map(|t| t.schema()).collect()
    }

    /// Concatenate every tool's signature block for prompt construction
    pub fn describe_all(&self) -> String {
        self.tools
            .iter()
            .map(|t| t.describe())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of registered tools
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{FunctionTool, ParameterType};
    use serde_json::json;

    fn named_tool(name: &str) -> Box<dyn Tool> {
        Box::new(
            FunctionTool::builder(name)
                .description("test tool")
                .returns(ParameterType::String)
                .handler(|_args| async move { Ok(json!("ok")) }),
        )
    }

    #[test]
    fn duplicate_registration_leaves_registry_unchanged() {
        let mut registry = ToolRegistry::new();
        registry.register(named_tool("sum")).unwrap();

        let err = registry.register(named_tool("sum")).unwrap_err();
        assert!(matches!(err, AgentError::DuplicateToolName { .. }));
        assert_eq!(registry.len(), 1);
        assert!(registry.lookup("sum").is_ok());
    }

    #[test]
    fn lookup_unknown_reports_available_names() {
        let registry =
            ToolRegistry::with_tools(vec![named_tool("sum"), named_tool("multiply")]).unwrap();

        let err = registry.lookup("divide").unwrap_err();
        match err {
            AgentError::UnknownTool { name, available } => {
                assert_eq!(name, "divide");
                assert_eq!(available, vec!["sum", "multiply"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn describe_all_follows_registration_order() {
        let registry =
            ToolRegistry::with_tools(vec![named_tool("first"), named_tool("second")]).unwrap();
        let described = registry.describe_all();
        let first = described.find("\"first\"").unwrap();
        let second = described.find("\"second\"").unwrap();
        assert!(first < second);
    }
}
