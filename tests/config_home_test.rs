//! ホームディレクトリ基準の設定パスのテスト
//!
//! `HOME` を書き換えるため、このファイルのテストは1つだけにしておく

use smartcal::identity::FileIdentityStore;
use smartcal::Config;
use smartcal_common::{ensure_identity, IdentityStore};
use tempfile::tempdir;

#[test]
fn test_config_under_home() {
    let home = tempdir().expect("Failed to create temp dir");
    std::env::set_var("HOME", home.path());
    let config_dir = home.path().join(".config").join("smartcal");

    assert_eq!(Config::config_path().unwrap(), config_dir.join("config.json"));

    // 未保存ならデフォルト
    let config = Config::load().expect("設定読み込み失敗");
    assert_eq!(config.timeout_seconds, 120);

    let mut config = Config::default();
    config.timeout_seconds = 45;
    config.client.api_url = "http://localhost:8000".into();
    config.save().expect("設定保存失敗");
    assert!(config_dir.join("config.json").exists());

    let loaded = Config::load().expect("設定読み込み失敗");
    assert_eq!(loaded.timeout_seconds, 45);
    assert_eq!(loaded.client.api_url, "http://localhost:8000");

    // 識別子ファイルは storage_key 名で設定と同じディレクトリに置く
    let identity_path = loaded.identity_path().unwrap();
    assert_eq!(identity_path, config_dir.join("sc_id"));

    let identity = ensure_identity(&FileIdentityStore::new(&identity_path), || 0.5).unwrap();
    let stored = FileIdentityStore::new(&identity_path).load().unwrap();
    assert_eq!(stored.as_deref(), Some(identity.as_str()));
}
