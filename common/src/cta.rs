//! 課金誘導（CTA）文言のローテーション

pub const CTA_MESSAGES: &[&str] = &[
    "☕ 하루 130원으로 식단 고민 끝! 커피 1잔보다 싸게 평생 식단 관리 시작해요.",
    "🔥 월 3,900원으로 무제한 AI 칼로리 분석! 한 번 외식값보다도 저렴해요.",
    "📊 한 끼 잘못 먹으면 +800kcal, SmartCal AI로 사전에 막을 수 있어요.",
    "🧠 1초 스캔으로 음식 인식, 24시간 365일 쉬지 않는 당신만의 식단 비서.",
    "💰 하루 130원 투자로 1년 뒤 몸무게–5kg를 목표로 관리해 보세요.",
    "⚠️ 무료 체험이 끝나면, 다시는 ‘무제한 분석’ 기회를 못 볼 수도 있어요.",
    "🚨 지금 구독하지 않으면, 다음 식사도 ‘대충 계산’으로 넘어가게 됩니다.",
    "🌍 매일 0시, 전세계 음식 데이터 자동 업데이트!",
    "🤖 YOLO 기반 음식 인식 엔진, 매일 조금씩 더 똑똑해지고 있어요.",
    "💚 내 몸에 들어가는 숫자를 아는 순간, 진짜 관리가 시작됩니다.",
    "⚡ Unlock unlimited SmartCal AI. 1 tap = full nutrition insight.",
];

/// フェードアウトから文言差し替えまでの待ち時間 (ms)
pub const CTA_FADE_MS: u32 = 500;

/// `[0, 1)` の乱数で文言を1つ選ぶ
pub fn pick_message(random: f64) -> &'static str {
    let len = CTA_MESSAGES.len();
    let index = ((random.clamp(0.0, 1.0) * len as f64) as usize).min(len - 1);
    CTA_MESSAGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_message_bounds() {
        assert_eq!(pick_message(0.0), CTA_MESSAGES[0]);
        assert_eq!(pick_message(0.999_999), CTA_MESSAGES[CTA_MESSAGES.len() - 1]);
        assert_eq!(pick_message(1.0), CTA_MESSAGES[CTA_MESSAGES.len() - 1]);
        assert_eq!(pick_message(-1.0), CTA_MESSAGES[0]);
    }

    #[test]
    fn test_pick_message_middle() {
        let message = pick_message(0.5);
        assert!(CTA_MESSAGES.contains(&message));
    }
}
