//! ファイルに保存するクライアント識別子

use smartcal_common::{ClientIdentity, IdentityStore};
use std::path::{Path, PathBuf};

/// 1ファイルに識別子文字列だけを保存するストア
#[derive(Debug, Clone)]
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IdentityStore for FileIdentityStore {
    fn load(&self) -> smartcal_common::Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(smartcal_common::Error::Storage(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&self, identity: &ClientIdentity) -> smartcal_common::Result<()> {
        let write = || -> std::io::Result<()> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&self.path, identity.as_str())
        };
        write().map_err(|e| {
            smartcal_common::Error::Storage(format!("{}: {}", self.path.display(), e))
        })
    }
}

/// スレッドローカル乱数（`[0, 1)`）
pub fn thread_random() -> f64 {
    use rand::Rng;
    rand::thread_rng().gen::<f64>()
}
