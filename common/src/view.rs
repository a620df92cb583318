//! 表示用モデル
//!
//! 解析結果を画面の固定位置に書き込む文字列へ変換する。

use crate::types::AnalysisResult;

/// 画面に表示する栄養情報
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NutritionView {
    pub name: String,
    pub kcal: String,
    pub carbs: String,
    pub protein: String,
    pub fat: String,
    pub image_src: String,
}

impl From<&AnalysisResult> for NutritionView {
    fn from(result: &AnalysisResult) -> Self {
        Self {
            name: result.food_name.clone(),
            kcal: format!("{} kcal", format_number(result.calories)),
            carbs: grams(result.carbs),
            protein: grams(result.protein),
            fat: grams(result.fat),
            image_src: result.result_image.clone(),
        }
    }
}

fn grams(value: f64) -> String {
    format!("{}g", format_number(value))
}

/// 数値をJavaScriptの `Number#toString` と同じ見た目に整形
///
/// 整数値は小数点なし (`250.0` → `"250"`)、それ以外は最短表現。
/// 絶対値が 1e21 以上、または 1e-6 未満では指数表記 (`"1e+21"`, `"1.5e-7"`)。
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // -0.0 も "0"
        return "0".to_string();
    }

    let abs = value.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let exp = format!("{:e}", value);
        return match exp.split_once('e') {
            Some((mantissa, e)) if !e.starts_with('-') => format!("{}e+{}", mantissa, e),
            _ => exp,
        };
    }
    format!("{}", value)
}
