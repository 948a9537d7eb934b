//! # Filesystem-backed token store
//!
//! [`FileTokenStore`] keeps the session token in a single file, `<base_dir>/<key>`.
//! It is used by the desktop app so a login survives restarts.
//!
//! Use `dirs::data_dir()` joined with `linkvault` as the base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/linkvault/token` |
//! | Linux | `~/.local/share/linkvault/token` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\linkvault\token` |

use std::path::PathBuf;

use crate::token::TokenStore;

#[derive(Clone, Debug)]
pub struct FileTokenStore {
    base: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new(base: PathBuf, key: &str) -> Self {
        Self {
            base,
            key: key.to_string(),
        }
    }

    fn token_path(&self) -> PathBuf {
        self.base.join(&self.key)
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(self.token_path()).ok()?;
        let token = content.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) {
        let _ = std::fs::create_dir_all(&self.base);
        let _ = std::fs::write(self.token_path(), token);
    }

    fn clear(&self) {
        let _ = std::fs::remove_file(self.token_path());
    }
}
