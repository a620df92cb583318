//! SmartCal Common Library
//!
//! ブラウザ(WASM)とネイティブで共有される型・状態遷移・設定

pub mod types;
pub mod error;
pub mod parser;
pub mod identity;
pub mod view;
pub mod config;
pub mod payment;
pub mod cta;
pub mod request;
pub mod flow;

pub use types::{AnalysisResult, Outcome};
pub use error::{Error, Result};
pub use parser::{classify_response, classify_value, is_truthy};
pub use identity::{ensure_identity, ClientIdentity, IdentityStore, MemoryIdentityStore};
pub use view::{format_number, NutritionView};
pub use config::{ClientConfig, PaymentConfig};
pub use payment::PaymentRequest;
pub use flow::{CaptureFlow, CapturePhase, ResultSurface, Trigger};
