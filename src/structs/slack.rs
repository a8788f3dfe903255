use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct PostMessageRequest<'a> {
    pub channel: &'a str,
    pub text: &'a str,
}

/// chat.postMessage 的回應，失敗時 `ok` 為 false 並帶 `error`
#[derive(Debug, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    pub ts: Option<String>,
    pub error: Option<String>,
}
