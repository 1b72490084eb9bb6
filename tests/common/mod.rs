#![allow(dead_code)]
// Shared test doubles for integration tests

use anyhow::{bail, Result};
use async_trait::async_trait;
use prodcopy::llm::client::LlmClient;
use std::sync::{Arc, Mutex};

pub const TITLE: &str = "Best Widget Ever";
pub const KEYWORDS: &str = "widget, durable, affordable";
pub const ARTICLE: &str = "The widget is durable.\n\nIt is also affordable, and \"loved\".";
pub const SUMMARY: &str = "Durable, affordable widget.";
pub const SPECS: &str = "- Weight: 120 g\n- Colour: red";
pub const META: &str = "Buy the durable widget today.";

/// One recorded completion request
#[derive(Debug, Clone)]
pub struct Call {
    pub prompt: String,
    pub max_tokens: u32,
}

/// Answers calls from a fixed script in order and records every request.
/// `fail_on` makes the n-th call (0-based) return an error.
pub struct ScriptedClient {
    responses: Vec<String>,
    calls: Arc<Mutex<Vec<Call>>>,
    fail_on: Option<usize>,
}

impl ScriptedClient {
    pub fn new(responses: &[&str]) -> (Self, Arc<Mutex<Vec<Call>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                responses: responses.iter().map(|s| s.to_string()).collect(),
                calls: Arc::clone(&calls),
                fail_on: None,
            },
            calls,
        )
    }

    /// The six canned answers, in pipeline order
    pub fn standard() -> (Self, Arc<Mutex<Vec<Call>>>) {
        Self::new(&[TITLE, KEYWORDS, ARTICLE, SUMMARY, SPECS, META])
    }

    pub fn failing_on(mut self, index: usize) -> Self {
        self.fail_on = Some(index);
        self
    }
}

#[async_trait]
impl LlmClient for ScriptedClient {
    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(Call {
            prompt: prompt.to_string(),
            max_tokens,
        });
        if self.fail_on == Some(index) {
            bail!("simulated API failure on call {}", index);
        }
        match self.responses.get(index) {
            Some(text) => Ok(text.trim().to_string()),
            None => bail!("unexpected call {}", index),
        }
    }
}
