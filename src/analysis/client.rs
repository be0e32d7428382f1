//! Messages API client implementing the [`Analyzer`] seam.

use super::{parse, prompt, AnalysisError, Analyzer, Verdict};
use crate::config::AnalysisConfig;
use crate::incident::Incident;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Classifies incidents through the Anthropic Messages API.
///
/// One attempt per call, no retry, no timeout: the caller's in-flight guard
/// is the only concurrency control, per the session design.
pub struct ClaudeAnalyzer {
    client: Client,
    config: AnalysisConfig,
}

#[derive(Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

impl ClaudeAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait::async_trait]
impl Analyzer for ClaudeAnalyzer {
    async fn analyze(&self, incidents: &[Incident]) -> Result<Vec<Verdict>, AnalysisError> {
        if incidents.is_empty() {
            return Ok(Vec::new());
        }

        let prompt = prompt::build_prompt(incidents);
        debug!(batch = incidents.len(), "sending analysis request");

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&json!({
                "model": self.config.model,
                "max_tokens": self.config.max_tokens,
                "messages": [{ "role": "user", "content": prompt }],
            }));
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: MessagesResponse = response.json().await?;
        let text = payload
            .content
            .first()
            .map(|block| block.text.as_str())
            .filter(|t| !t.trim().is_empty())
            .ok_or(AnalysisError::EmptyResponse)?;

        let expected_ids: Vec<String> = incidents.iter().map(|i| i.id.clone()).collect();
        let verdicts = parse::parse_verdicts(text, &expected_ids)?;
        info!(verdicts = verdicts.len(), "analysis response validated");
        Ok(verdicts)
    }
}
