//! クライアント識別子
//!
//! `user_` + 英小文字・数字9文字の擬似乱数ID。初回のみ生成して保存し、
//! 以後は保存済みの値を使い続ける。ローテーションや削除は行わない。

use crate::error::Result;
use std::cell::RefCell;
use std::fmt;

/// 識別子の接頭辞
pub const IDENTITY_PREFIX: &str = "user_";

/// 接頭辞に続くランダム部の長さ
pub const IDENTITY_RANDOM_LEN: usize = 9;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// バックエンドが体験回数の追跡に使う識別子
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientIdentity(String);

impl ClientIdentity {
    /// 既存の文字列をそのまま識別子として扱う（形式は検証しない）
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 新しい識別子を生成
    ///
    /// `random` は `[0, 1)` の一様乱数を返す関数（`Math.random` 相当）。
    pub fn generate<R>(mut random: R) -> Self
    where
        R: FnMut() -> f64,
    {
        let mut value = String::with_capacity(IDENTITY_PREFIX.len() + IDENTITY_RANDOM_LEN);
        value.push_str(IDENTITY_PREFIX);
        for _ in 0..IDENTITY_RANDOM_LEN {
            let r = random().clamp(0.0, 1.0);
            let index = ((r * ALPHABET.len() as f64) as usize).min(ALPHABET.len() - 1);
            value.push(ALPHABET[index] as char);
        }
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 識別子の永続化先（ブラウザの localStorage、設定ディレクトリのファイルなど）
pub trait IdentityStore {
    /// 保存済みの識別子。未保存なら `None`
    fn load(&self) -> Result<Option<String>>;

    fn save(&self, identity: &ClientIdentity) -> Result<()>;
}

/// 保存済みの識別子を返す。なければ生成して保存する
///
/// 空文字が保存されている場合は未保存として扱う。
pub fn ensure_identity<S, R>(store: &S, random: R) -> Result<ClientIdentity>
where
    S: IdentityStore + ?Sized,
    R: FnMut() -> f64,
{
    if let Some(existing) = store.load()? {
        if !existing.is_empty() {
            return Ok(ClientIdentity::new(existing));
        }
    }

    let identity = ClientIdentity::generate(random);
    store.save(&identity)?;
    log::info!("client identity created: {}", identity);
    Ok(identity)
}

/// メモリ上の識別子ストア（テスト・埋め込み用）
#[derive(Debug, Default)]
pub struct MemoryIdentityStore {
    value: RefCell<Option<String>>,
    saves: RefCell<usize>,
}

impl MemoryIdentityStore {
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
            saves: RefCell::new(0),
        }
    }

    /// `save` が呼ばれた回数
    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn save(&self, identity: &ClientIdentity) -> Result<()> {
        *self.value.borrow_mut() = Some(identity.as_str().to_string());
        *self.saves.borrow_mut() += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(values: Vec<f64>) -> impl FnMut() -> f64 {
        let mut iter = values.into_iter().cycle();
        move || iter.next().unwrap_or(0.0)
    }

    #[test]
    fn test_generate_format() {
        let identity = ClientIdentity::generate(sequence(vec![0.0, 0.5, 0.99]));
        let value = identity.as_str();

        assert!(value.starts_with("user_"));
        assert_eq!(value.len(), IDENTITY_PREFIX.len() + IDENTITY_RANDOM_LEN);
        assert!(value[5..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_maps_random_to_alphabet() {
        let identity = ClientIdentity::generate(sequence(vec![0.0]));
        assert_eq!(identity.as_str(), "user_000000000");

        let identity = ClientIdentity::generate(sequence(vec![0.999_999]));
        assert_eq!(identity.as_str(), "user_zzzzzzzzz");
    }

    #[test]
    fn test_generate_clamps_out_of_range() {
        let identity = ClientIdentity::generate(sequence(vec![1.0, -3.0]));
        assert_eq!(&identity.as_str()[5..7], "z0");
    }

    #[test]
    fn test_ensure_identity_generates_once() {
        let store = MemoryIdentityStore::default();

        let first = ensure_identity(&store, sequence(vec![0.1, 0.2, 0.3])).unwrap();
        let second = ensure_identity(&store, sequence(vec![0.9])).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_ensure_identity_keeps_existing() {
        let store = MemoryIdentityStore::with_value("user_abc123xyz");

        let identity = ensure_identity(&store, sequence(vec![0.5])).unwrap();

        assert_eq!(identity.as_str(), "user_abc123xyz");
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_ensure_identity_replaces_empty_value() {
        let store = MemoryIdentityStore::with_value("");

        let identity = ensure_identity(&store, sequence(vec![0.5])).unwrap();

        assert!(identity.as_str().starts_with("user_"));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_identity_display() {
        let identity = ClientIdentity::new("user_abc123xyz");
        assert_eq!(format!("{}", identity), "user_abc123xyz");
    }
}
