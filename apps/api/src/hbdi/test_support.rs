//! Stub completion client shared by pipeline and router tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::llm_client::{CompletionClient, LlmError};

enum StubReply {
    Text(String),
    Api { status: u16, message: String },
    Malformed,
}

/// Returns a canned reply and records how it was called.
pub(crate) struct StubClient {
    reply: StubReply,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl StubClient {
    fn with_reply(reply: StubReply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        })
    }

    pub(crate) fn text(text: &str) -> Arc<Self> {
        Self::with_reply(StubReply::Text(text.to_string()))
    }

    pub(crate) fn api_error(status: u16, message: &str) -> Arc<Self> {
        Self::with_reply(StubReply::Api {
            status,
            message: message.to_string(),
        })
    }

    /// Behaves like an upstream body without a `choices` field.
    pub(crate) fn missing_choices() -> Arc<Self> {
        Self::with_reply(StubReply::Malformed)
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for StubClient {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Api { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
            StubReply::Malformed => Err(LlmError::MalformedResponse(
                "missing field `choices` at line 1 column 2".to_string(),
            )),
        }
    }
}
