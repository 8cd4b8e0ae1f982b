//! Integration tests for the tool substrate.

mod common;

use agentic_core::{ParameterType, Tool};
use common::{calculator_registry, compute_log_tool, multiply_tool, sum_tool};
use serde_json::json;

#[test]
fn describe_lists_one_descriptor_per_declared_parameter() {
    for (tool, expected) in [
        (sum_tool(), vec![("a", ParameterType::Integer), ("b", ParameterType::Integer)]),
        (multiply_tool(), vec![("a", ParameterType::Integer), ("b", ParameterType::Integer)]),
        (compute_log_tool(), vec![("x", ParameterType::Integer)]),
    ] {
        let schema = tool.schema();
        assert_eq!(schema.parameters.len(), expected.len());
        for (descriptor, (name, param_type)) in schema.parameters.iter().zip(expected) {
            assert_eq!(descriptor.name, name);
            assert_eq!(descriptor.param_type, param_type);
            assert!(descriptor.required);
        }
    }
}

#[tokio::test]
async fn invoke_returns_the_exact_function_result() {
    let tool = multiply_tool();
    let mut args = agentic_core::tools::ToolArguments::new();
    args.insert("a".to_string(), json!(6912));
    args.insert("b".to_string(), json!(5));

    let result = tool.invoke(&args).await.unwrap();
    assert_eq!(result, json!(34560));
    assert_eq!(tool.result_to_string(&result), "34560");
}

#[tokio::test]
async fn error_strings_pass_through_as_results() {
    let tool = compute_log_tool();
    let mut args = agentic_core::tools::ToolArguments::new();
    args.insert("x".to_string(), json!(0));

    // x <= 0 is an in-band error string, not an invocation failure.
    let result = tool.invoke(&args).await.unwrap();
    assert_eq!(
        tool.result_to_string(&result),
        "Logarithm is undefined for values less than or equal to 0."
    );
}

#[test]
fn registry_describes_tools_for_the_prompt() {
    let registry = calculator_registry();
    let described = registry.describe_all();

    assert_eq!(registry.len(), 3);
    for name in ["sum_two_elements", "multiply_two_elements", "compute_log"] {
        assert!(described.contains(name));
    }
}
