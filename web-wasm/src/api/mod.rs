//! API連携モジュール

pub mod analyze;
