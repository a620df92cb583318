//! ネイティブ版の撮影サイクル
//!
//! 状態遷移と画面操作は `smartcal_common::CaptureFlow` に任せ、
//! ここではフレームの受け渡しとHTTP送信だけを行う。

use crate::client::AnalyzeClient;
use crate::config::Config;
use crate::error::{Result, SmartCalError};
use crate::identity::thread_random;
use smartcal_common::{
    ensure_identity, CaptureFlow, CapturePhase, ClientIdentity, IdentityStore, ResultSurface,
    Trigger,
};

pub struct Session {
    client: AnalyzeClient,
    identity: ClientIdentity,
    flow: CaptureFlow,
    origin: String,
}

impl Session {
    /// 識別子を読み込み（なければ生成して保存）、クライアントを準備する
    ///
    /// `origin` は決済完了・失敗ページのあるクライアント側のオリジン
    /// （例: `https://smartcal.example`）。解析APIのURLとは別物。
    pub fn new<S>(config: Config, store: &S, origin: impl Into<String>) -> Result<Self>
    where
        S: IdentityStore + ?Sized,
    {
        let origin = origin.into();
        if origin.trim().is_empty() {
            return Err(SmartCalError::Config("origin が空です".into()));
        }
        let client = AnalyzeClient::new(&config)?;
        let identity = ensure_identity(store, thread_random)?;
        Ok(Self {
            client,
            identity,
            flow: CaptureFlow::new(config.client),
            origin,
        })
    }

    pub fn identity(&self) -> &ClientIdentity {
        &self.identity
    }

    pub fn phase(&self) -> CapturePhase {
        self.flow.phase()
    }

    /// 1回分の撮影→送信→表示
    ///
    /// `jpeg` が `None` の場合（フレームが得られなかった）は送信しない。
    /// 戻り値はボタン押下の解釈。
    pub async fn capture_and_upload<S>(&mut self, jpeg: Option<Vec<u8>>, surface: &mut S) -> Trigger
    where
        S: ResultSurface + ?Sized,
    {
        let trigger = self.flow.trigger();
        match trigger {
            Trigger::Capture => {}
            Trigger::Retake => {
                surface.reload();
                return trigger;
            }
            Trigger::Ignored => return trigger,
        }

        if !self.flow.frame_captured(jpeg.is_some()) {
            return trigger;
        }
        let Some(jpeg) = jpeg else {
            return trigger;
        };

        let response = self
            .client
            .analyze(&self.identity, jpeg)
            .await
            .map_err(|e| e.into_common());
        let now_ms = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.flow.settle(response, &self.origin, now_ms, surface);
        trigger
    }
}
