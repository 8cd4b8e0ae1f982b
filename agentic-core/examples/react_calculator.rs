//! ReAct agent run over a small calculator tool set.
//!
//! Requires `GROQ_API_KEY` in the environment.

use agentic_core::{
    FunctionTool, OpenAiCompatibleClient, ParameterType, ReactAgent, ToolRegistry,
};
use serde_json::json;

fn sum_two_elements() -> FunctionTool {
    FunctionTool::builder("sum_two_elements")
        .description("Computes the sum of two integers.")
        .required_param("a", ParameterType::Integer, "The first integer to be summed")
        .required_param("b", ParameterType::Integer, "The second integer to be summed")
        .returns(ParameterType::Integer)
        .handler(|args| async move {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_i64().unwrap_or_default();
            Ok(json!(a + b))
        })
}

fn multiply_two_elements() -> FunctionTool {
    FunctionTool::builder("multiply_two_elements")
        .description("Multiplies two integers.")
        .required_param("a", ParameterType::Integer, "The first integer to multiply")
        .required_param("b", ParameterType::Integer, "The second integer to multiply")
        .returns(ParameterType::Integer)
        .handler(|args| async move {
            let a = args["a"].as_i64().unwrap_or_default();
            let b = args["b"].as_i64().unwrap_or_default();
            Ok(json!(a * b))
        })
}

fn compute_log() -> FunctionTool {
    FunctionTool::builder("compute_log")
        .description("Computes the natural logarithm of an integer greater than zero.")
        .required_param("x", ParameterType::Integer, "The value; must be greater than 0")
        .returns(ParameterType::Number)
        .handler(|args| async move {
            let x = args["x"].as_i64().unwrap_or_default();
            if x <= 0 {
                return Ok(json!(
                    "Logarithm is undefined for values less than or equal to 0."
                ));
            }
            Ok(json!((x as f64).ln()))
        })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agentic_core=debug".into()),
        )
        .init();

    let api_key = std::env::var("GROQ_API_KEY")
        .map_err(|_| anyhow::anyhow!("set GROQ_API_KEY to run this example"))?;
    let client = OpenAiCompatibleClient::groq(api_key, "llama-3.3-70b-versatile");

    let registry = ToolRegistry::with_tools(vec![
        Box::new(sum_two_elements()),
        Box::new(multiply_two_elements()),
        Box::new(compute_log()),
    ])?;

    let agent = ReactAgent::new(Box::new(client), registry);
    let answer = agent
        .run(
            "I want to calculate the sum of 1234 and 5678 and multiply the result by 5. \
             Then, I want to take the logarithm of this result",
        )
        .await?;

    println!("{answer}");
    Ok(())
}
