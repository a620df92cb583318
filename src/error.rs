use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmartCalError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("サーバーがエラーを返しました: HTTP {0}")]
    Status(u16),

    #[error("画像エラー: {0}")]
    Image(#[from] image::ImageError),

    #[error("不正なData URL: {0}")]
    InvalidDataUrl(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] smartcal_common::Error),
}

impl SmartCalError {
    /// 共通層の通信エラーへ変換（`CaptureFlow::settle` に渡す用）
    pub fn into_common(self) -> smartcal_common::Error {
        match self {
            SmartCalError::Common(e) => e,
            SmartCalError::JsonParse(e) => smartcal_common::Error::Json(e),
            other => smartcal_common::Error::Transport(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, SmartCalError>;
