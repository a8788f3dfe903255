use crate::{
    errors::AppError,
    structs::slack::{PostMessageRequest, PostMessageResponse},
};
use async_trait::async_trait;
use reqwest::Client;

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

/// 發送公告的對象，成功時回傳訊息的 timestamp
#[async_trait]
pub trait Notifier {
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, AppError>;
}

pub struct SlackClient {
    client: Client,
    token: String,
    api_url: String,
}

impl SlackClient {
    pub fn new(token: String, api_url: String) -> Self {
        Self {
            client: Client::new(),
            token,
            api_url,
        }
    }
}

#[async_trait]
impl Notifier for SlackClient {
    async fn post_message(&self, channel: &str, text: &str) -> Result<String, AppError> {
        let url = format!("{}/chat.postMessage", self.api_url.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.token))
            .json(&PostMessageRequest { channel, text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::SlackApi(format!("http {}", response.status())));
        }

        let body: PostMessageResponse = response.json().await?;
        into_timestamp(body)
    }
}

fn into_timestamp(body: PostMessageResponse) -> Result<String, AppError> {
    if body.ok {
        Ok(body.ts.unwrap_or_default())
    } else {
        Err(AppError::SlackApi(
            body.error.unwrap_or_else(|| "unknown_error".to_string()),
        ))
    }
}
