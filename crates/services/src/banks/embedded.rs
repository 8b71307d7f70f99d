use async_trait::async_trait;
use std::sync::Arc;

use quiz_core::model::{BankName, QuestionBank};

use super::{BankSource, parse_bank};
use crate::error::BankLoadError;

const BUILTIN: [(&str, &str); 3] = [
    ("paper1", include_str!("../../banks/paper1.json")),
    ("paper2", include_str!("../../banks/paper2.json")),
    ("paper3", include_str!("../../banks/paper3.json")),
];

/// Banks compiled into the binary (or handed over in memory).
///
/// JSON is kept raw and parsed on every load, so each session starts from a fresh,
/// untouched bank.
#[derive(Clone, Debug)]
pub struct EmbeddedBanks {
    banks: Vec<(BankName, Arc<str>)>,
}

impl EmbeddedBanks {
    #[must_use]
    pub fn new(banks: Vec<(BankName, Arc<str>)>) -> Self {
        Self { banks }
    }

    /// The sample banks shipped with the app.
    #[must_use]
    pub fn builtin() -> Self {
        let banks = BUILTIN
            .iter()
            .filter_map(|(name, json)| {
                BankName::new(*name)
                    .ok()
                    .map(|name| (name, Arc::<str>::from(*json)))
            })
            .collect();
        Self { banks }
    }
}

#[async_trait]
impl BankSource for EmbeddedBanks {
    fn bank_names(&self) -> Vec<BankName> {
        self.banks.iter().map(|(name, _)| name.clone()).collect()
    }

    async fn load(&self, name: &BankName) -> Result<QuestionBank, BankLoadError> {
        let (_, json) = self
            .banks
            .iter()
            .find(|(candidate, _)| candidate == name)
            .ok_or_else(|| BankLoadError::NotFound(name.clone()))?;
        parse_bank(name, json)
    }
}
