//! `/analyze` レスポンスパーサー
//!
//! レスポンス本文をJSONとして読み、`error` フィールドの有無で
//! 成功・体験期間終了・その他の拒否に分類する

use crate::error::{Error, Result};
use crate::types::{AnalysisResult, Outcome};
use serde_json::Value;

/// 体験期間終了を示す `error` の値
pub const TRIAL_EXPIRED: &str = "expired";

/// レスポンス本文を分類
///
/// # Arguments
/// * `body` - `/analyze` のレスポンス本文
///
/// # Returns
/// * `Ok(Outcome)` - 分類結果
/// * `Err` - JSONでない、またはオブジェクトでない場合
///
/// # Examples
/// ```
/// use smartcal_common::{classify_response, Outcome};
///
/// let outcome = classify_response(r#"{"error": "expired"}"#).unwrap();
/// assert_eq!(outcome, Outcome::TrialExpired);
/// ```
pub fn classify_response(body: &str) -> Result<Outcome> {
    let value: Value = serde_json::from_str(body)?;
    classify_value(value)
}

/// パース済みJSONを分類
pub fn classify_value(value: Value) -> Result<Outcome> {
    if !value.is_object() {
        return Err(Error::Parse(format!("JSONオブジェクトではありません: {}", value)));
    }

    if let Some(error) = value.get("error") {
        if error.as_str() == Some(TRIAL_EXPIRED) {
            return Ok(Outcome::TrialExpired);
        }
        if is_truthy(error) {
            let reason = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Ok(Outcome::Rejected(reason));
        }
    }

    let result: AnalysisResult = serde_json::from_value(value)?;
    Ok(Outcome::Analyzed(result))
}

/// JavaScriptの truthy 判定
///
/// null, false, 0, NaN, 空文字は falsy。配列とオブジェクトは空でも truthy。
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_success() {
        let body = r#"{"food_name":"Salad","calories":250,"carbs":20,"protein":5,"fat":12,"result_image":"http://x/y.jpg"}"#;
        let outcome = classify_response(body).unwrap();

        match outcome {
            Outcome::Analyzed(result) => {
                assert_eq!(result.food_name, "Salad");
                assert_eq!(result.calories, 250.0);
                assert_eq!(result.result_image, "http://x/y.jpg");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_classify_expired() {
        assert_eq!(
            classify_response(r#"{"error":"expired"}"#).unwrap(),
            Outcome::TrialExpired
        );
    }

    #[test]
    fn test_classify_expired_with_other_fields() {
        let body = r#"{"error":"expired","food_name":"Salad","calories":250}"#;
        assert_eq!(classify_response(body).unwrap(), Outcome::TrialExpired);
    }

    #[test]
    fn test_classify_other_truthy_error() {
        assert_eq!(
            classify_response(r#"{"error":"quota"}"#).unwrap(),
            Outcome::Rejected("quota".into())
        );
        assert_eq!(
            classify_response(r#"{"error":true}"#).unwrap(),
            Outcome::Rejected("true".into())
        );
    }

    #[test]
    fn test_classify_falsy_error_is_ignored() {
        for body in [
            r#"{"error":null,"food_name":"Apple"}"#,
            r#"{"error":"","food_name":"Apple"}"#,
            r#"{"error":false,"food_name":"Apple"}"#,
            r#"{"error":0,"food_name":"Apple"}"#,
        ] {
            let outcome = classify_response(body).unwrap();
            assert!(outcome.is_analyzed(), "body: {}", body);
        }
    }

    #[test]
    fn test_classify_invalid_json() {
        let err = classify_response("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_classify_non_object() {
        let err = classify_response("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!("x")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }
}
