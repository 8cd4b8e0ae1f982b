//! Tool wrapping, schemas and the tool registry.

mod function_tool;
mod registry;
mod schema;

pub use function_tool::{AsyncToolFn, FunctionTool, FunctionToolBuilder, Tool, ToolArguments};
pub use registry::ToolRegistry;
pub use schema::{ParameterSchema, ParameterType, ToolSchema};
