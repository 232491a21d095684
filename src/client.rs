use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response was not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("response body was null")]
    EmptyBody,
}

pub type ChatResult<T> = Result<T, ChatError>;

/// Something that turns a question into an answer.
///
/// `Ok(None)` means the exchange succeeded but carried no usable answer.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AnswerBackend {
    async fn ask(&self, question: &str) -> ChatResult<Option<String>>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

/// Posts `{"question": ...}` to the chat endpoint and reads `answer` back.
#[derive(Clone, Debug)]
pub struct HttpChatClient {
    client: Client,
    endpoint: String,
}

impl HttpChatClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AnswerBackend for HttpChatClient {
    async fn ask(&self, question: &str) -> ChatResult<Option<String>> {
        tracing::debug!(endpoint = %self.endpoint, "sending question");

        // The status code is not inspected; any JSON body is read for `answer`.
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { question })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%status, bytes = body.len(), "received response");

        let value: Value = serde_json::from_str(&body)?;
        extract_answer(&value)
    }
}

/// Pull a non-empty string `answer` out of a decoded response body.
pub fn extract_answer(body: &Value) -> ChatResult<Option<String>> {
    match body {
        Value::Null => Err(ChatError::EmptyBody),
        Value::Object(fields) => Ok(fields
            .get("answer")
            .and_then(Value::as_str)
            .filter(|answer| !answer.is_empty())
            .map(str::to_string)),
        _ => Ok(None),
    }
}
