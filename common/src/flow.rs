//! 撮影→アップロード→表示の1サイクル
//!
//! 状態遷移: `Idle → Capturing → AwaitingResponse → Rendered | Errored`
//!
//! 入出力（カメラ、HTTP、DOM）はプラットフォーム側が担当し、ここでは
//! 状態とレスポンスに応じた画面操作だけを決める。画面操作は
//! [`ResultSurface`] を通して行う。

use crate::config::ClientConfig;
use crate::error::Result;
use crate::payment::PaymentRequest;
use crate::types::Outcome;
use crate::view::NutritionView;

pub const CAPTURE_LABEL: &str = "📸 촬영하기";
pub const ANALYZING_LABEL: &str = "🔍 분석 중...";
pub const RETAKE_LABEL: &str = "🔄 다시 촬영";

pub const TRIAL_EXPIRED_CONFIRM: &str =
    "🚨 무료 체험이 종료되었습니다. 프리미엄으로 무제한 분석을 시작할까요?";
pub const TRIAL_ENDED_ALERT: &str = "무료 기간이 종료되었습니다.";
pub const CONNECTION_FAILED_ALERT: &str = "서버 연결 실패! 30초만 기다려주세요.";

/// サイクルの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Capturing,
    AwaitingResponse,
    Rendered,
    Errored,
}

impl CapturePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CapturePhase::Idle => "idle",
            CapturePhase::Capturing => "capturing",
            CapturePhase::AwaitingResponse => "awaiting",
            CapturePhase::Rendered => "rendered",
            CapturePhase::Errored => "errored",
        }
    }

    /// 撮影中・応答待ちの間はボタンを無効化する
    pub fn is_busy(&self) -> bool {
        matches!(self, CapturePhase::Capturing | CapturePhase::AwaitingResponse)
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            CapturePhase::Idle | CapturePhase::Errored => CAPTURE_LABEL,
            CapturePhase::Capturing | CapturePhase::AwaitingResponse => ANALYZING_LABEL,
            CapturePhase::Rendered => RETAKE_LABEL,
        }
    }
}

/// ボタン押下に対する動作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// フレームを取り込んでアップロードする
    Capture,
    /// 結果表示後の再撮影（ページ再読み込み）
    Retake,
    /// 処理中のため無視
    Ignored,
}

/// 結果を表示する画面
///
/// ブラウザ版はDOMとダイアログ、テストは呼び出しの記録で実装する。
pub trait ResultSurface {
    /// 栄養情報を書き込み、映像を注釈付き画像に差し替える
    fn show_result(&mut self, view: &NutritionView);

    /// ブロッキング通知
    fn alert(&mut self, message: &str);

    /// ブロッキング確認。承諾なら `true`
    fn confirm(&mut self, message: &str) -> bool;

    fn launch_payment(&mut self, request: &PaymentRequest);

    fn reload(&mut self);
}

/// 1画面分の撮影サイクル
#[derive(Debug, Clone)]
pub struct CaptureFlow {
    phase: CapturePhase,
    config: ClientConfig,
}

impl CaptureFlow {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            phase: CapturePhase::Idle,
            config,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// ボタン押下
    pub fn trigger(&mut self) -> Trigger {
        match self.phase {
            CapturePhase::Capturing | CapturePhase::AwaitingResponse => {
                log::debug!("capture ignored: request in flight");
                Trigger::Ignored
            }
            CapturePhase::Rendered => Trigger::Retake,
            CapturePhase::Idle | CapturePhase::Errored => {
                self.phase = CapturePhase::Capturing;
                Trigger::Capture
            }
        }
    }

    /// フレーム取り込みの完了
    ///
    /// 画像が得られなかった場合はアップロードせず `Idle` に戻る。
    /// 戻り値はアップロードを続行するかどうか。
    pub fn frame_captured(&mut self, has_frame: bool) -> bool {
        if self.phase != CapturePhase::Capturing {
            return false;
        }
        if has_frame {
            self.phase = CapturePhase::AwaitingResponse;
            true
        } else {
            log::warn!("capture produced no image");
            self.phase = CapturePhase::Idle;
            false
        }
    }

    /// レスポンス（または通信失敗）を画面に反映
    ///
    /// # Arguments
    /// * `response` - 分類済みレスポンス。通信・パース失敗は `Err`
    /// * `origin` - 決済の戻り先URLに使うオリジン
    /// * `now_ms` - 注文IDに使うエポックミリ秒
    /// * `surface` - 表示先
    pub fn settle<S>(&mut self, response: Result<Outcome>, origin: &str, now_ms: u64, surface: &mut S)
    where
        S: ResultSurface + ?Sized,
    {
        match response {
            Ok(Outcome::Analyzed(result)) => {
                log::info!("analysis received: {}", result.food_name);
                surface.show_result(&NutritionView::from(&result));
                self.phase = CapturePhase::Rendered;
            }
            Ok(Outcome::TrialExpired) => {
                log::info!("trial expired");
                self.phase = CapturePhase::Errored;
                if surface.confirm(TRIAL_EXPIRED_CONFIRM) {
                    let request = PaymentRequest::new(&self.config.payment, origin, now_ms);
                    log::info!("launching payment: {}", request.order_id);
                    surface.launch_payment(&request);
                }
            }
            Ok(Outcome::Rejected(reason)) => {
                log::warn!("analysis rejected: {}", reason);
                self.phase = CapturePhase::Errored;
                surface.alert(TRIAL_ENDED_ALERT);
            }
            Err(e) => {
                log::error!("analysis request failed: {}", e);
                self.phase = CapturePhase::Errored;
                surface.alert(CONNECTION_FAILED_ALERT);
                if self.config.reload_on_failure {
                    surface.reload();
                }
            }
        }
    }
}
