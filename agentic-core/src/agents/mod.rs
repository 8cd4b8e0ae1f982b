//! Agent loop implementations.
//!
//! Two loop patterns over the same tool substrate: [`ToolAgent`] decides
//! once and calls at most one tool; [`ReactAgent`] iterates Thought, Action
//! and Observation steps until a final answer or budget exhaustion.

mod react_agent;
mod tool_agent;

pub use react_agent::{ReactAgent, DEFAULT_MAX_ITERATIONS};
pub use tool_agent::{DispatchResult, ToolAgent};
