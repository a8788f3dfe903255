use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("SLACK_BOT_TOKEN is not set.")]
    MissingToken,
    #[error("設定值錯誤: {0}")]
    InvalidConfig(String),
    #[error("讀取名單檔案失敗: {0}")]
    ReadRoster(#[from] std::io::Error),
    #[error("無效的 json 格式: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("{0}")]
    SlackApi(String),
}
