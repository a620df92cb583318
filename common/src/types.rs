//! 解析レスポンスの型定義
//!
//! ブラウザ版とネイティブ版で共有される型:
//! - AnalysisResult: `/analyze` 成功時の栄養情報
//! - Outcome: レスポンスを分類した結果

use serde::{Deserialize, Deserializer, Serialize};

/// 栄養解析結果
///
/// スキーマ検証は行わない。欠落・null のフィールドはサーバー側の既定値
/// （空文字、0）として扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default, deserialize_with = "lenient_string")]
    pub food_name: String,

    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: f64,

    #[serde(default, deserialize_with = "lenient_number")]
    pub carbs: f64,         // 炭水化物 (g)

    #[serde(default, deserialize_with = "lenient_number")]
    pub protein: f64,       // タンパク質 (g)

    #[serde(default, deserialize_with = "lenient_number")]
    pub fat: f64,           // 脂質 (g)

    /// 注釈付き画像のURLまたは `data:image/jpeg;base64,...`
    #[serde(default, deserialize_with = "lenient_string")]
    pub result_image: String,
}

/// 1回の解析リクエストの分類結果
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// 栄養情報を受信
    Analyzed(AnalysisResult),
    /// 無料体験期間の終了 (`error == "expired"`)
    TrialExpired,
    /// その他の truthy な `error` 値
    Rejected(String),
}

impl Outcome {
    pub fn is_analyzed(&self) -> bool {
        matches!(self, Outcome::Analyzed(_))
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}
