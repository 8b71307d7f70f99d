use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

use quiz_core::model::{BankName, QuestionBank};

use super::{BankSource, parse_bank};
use crate::error::BankLoadError;

/// Banks stored as `<name>.json` files in one directory.
#[derive(Clone, Debug)]
pub struct DirectoryBanks {
    root: PathBuf,
    names: Vec<BankName>,
}

impl DirectoryBanks {
    /// Scan `root` for `*.json` files. Bank names are the file stems, sorted.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the directory cannot be read.
    pub async fn scan(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            // A padded stem would be listed trimmed but could never be read back.
            if stem.trim() != stem {
                log::debug!("skipping bank file with padded name {}", path.display());
                continue;
            }
            if let Ok(name) = BankName::new(stem) {
                names.push(name);
            }
        }
        names.sort();
        names.dedup();
        log::debug!("found {} question banks in {}", names.len(), root.display());
        Ok(Self { root, names })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &BankName) -> PathBuf {
        self.root.join(format!("{}.json", name.as_str()))
    }
}

#[async_trait]
impl BankSource for DirectoryBanks {
    fn bank_names(&self) -> Vec<BankName> {
        self.names.clone()
    }

    async fn load(&self, name: &BankName) -> Result<QuestionBank, BankLoadError> {
        if !self.names.contains(name) {
            return Err(BankLoadError::NotFound(name.clone()));
        }
        let json = match tokio::fs::read_to_string(self.path_for(name)).await {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(BankLoadError::NotFound(name.clone()));
            }
            Err(source) => {
                return Err(BankLoadError::Io {
                    bank: name.clone(),
                    source,
                });
            }
        };
        parse_bank(name, &json)
    }
}
