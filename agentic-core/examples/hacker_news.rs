//! Dispatch agent with an HTTP-backed Hacker News tool.
//!
//! Requires `GROQ_API_KEY` in the environment.

use agentic_core::{
    FunctionTool, OpenAiCompatibleClient, ParameterType, ToolAgent, ToolRegistry,
};
use serde_json::{json, Value};

const TOP_STORIES_URL: &str = "https://hacker-news.firebaseio.com/v0/topstories.json";

async fn fetch_top_stories(top_n: usize) -> agentic_core::Result<Value> {
    let http = reqwest::Client::new();

    let ids: Vec<u64> = http.get(TOP_STORIES_URL).send().await?.json().await?;

    let mut stories = Vec::new();
    for id in ids.into_iter().take(top_n) {
        let story: Value = http
            .get(format!(
                "https://hacker-news.firebaseio.com/v0/item/{id}.json"
            ))
            .send()
            .await?
            .json()
            .await?;
        stories.push(json!({
            "title": story.get("title").cloned().unwrap_or_else(|| json!("No title")),
            "url": story.get("url").cloned().unwrap_or_else(|| json!("No URL available")),
        }));
    }

    Ok(json!(stories))
}

fn hacker_news_tool() -> FunctionTool {
    FunctionTool::builder("fetch_top_hacker_news_stories")
        .description(
            "Fetch the top stories from Hacker News. Retrieves the top `top_n` stories \
             with their titles and URLs from the official Hacker News API.",
        )
        .required_param(
            "top_n",
            ParameterType::Integer,
            "The number of top stories to retrieve",
        )
        .returns(ParameterType::Array)
        .handler(|args| async move {
            let top_n = args["top_n"].as_u64().unwrap_or(5) as usize;
            fetch_top_stories(top_n).await
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

    let mut registry = ToolRegistry::new();
    registry.register(Box::new(hacker_news_tool()))?;

    let agent = ToolAgent::new(Box::new(client), registry);

    let result = agent
        .run("What are the top 5 stories on Hacker News?")
        .await?;
    println!("{}", result.answer);

    // Unrelated questions should not touch the tool.
    let result = agent.run("Tell me your name").await?;
    println!("{}", result.answer);

    Ok(())
}
