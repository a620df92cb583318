//! SmartCal native client
//!
//! ブラウザ版と同じ撮影→アップロード→表示のサイクルをネイティブで実行する。

pub mod annotated;
pub mod client;
pub mod config;
pub mod error;
pub mod frame;
pub mod identity;
pub mod session;

pub use client::AnalyzeClient;
pub use config::Config;
pub use error::{Result, SmartCalError};
pub use session::Session;
