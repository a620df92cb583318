//! localStorage に保存するクライアント識別子

use smartcal_common::{ensure_identity, ClientIdentity, Error, IdentityStore, Result};
use web_sys::Storage;

/// 1つのキーに識別子文字列をそのまま保存する（JSONにはしない）
pub struct LocalStorageIdentityStore {
    key: String,
}

impl LocalStorageIdentityStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage(&self) -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| Error::Storage("window がありません".into()))?
            .local_storage()
            .map_err(|e| Error::Storage(format!("{:?}", e)))?
            .ok_or_else(|| Error::Storage("localStorage が使えません".into()))
    }
}

impl IdentityStore for LocalStorageIdentityStore {
    fn load(&self) -> Result<Option<String>> {
        self.storage()?
            .get_item(&self.key)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn save(&self, identity: &ClientIdentity) -> Result<()> {
        self.storage()?
            .set_item(&self.key, identity.as_str())
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// 保存済みの識別子、なければ生成して保存したもの
///
/// ストレージが使えない場合（プライベートモード等）はこのページ限りの識別子を使う。
pub fn load_identity(key: &str) -> ClientIdentity {
    let store = LocalStorageIdentityStore::new(key);
    match ensure_identity(&store, js_sys::Math::random) {
        Ok(identity) => identity,
        Err(e) => {
            log::warn!("identity not persisted: {}", e);
            ClientIdentity::generate(js_sys::Math::random)
        }
    }
}
