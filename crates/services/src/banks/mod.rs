mod directory;
mod embedded;
mod http;

use async_trait::async_trait;

use quiz_core::model::{BankName, Question, QuestionBank, QuestionRecord};

use crate::error::BankLoadError;

pub use directory::DirectoryBanks;
pub use embedded::EmbeddedBanks;
pub use http::HttpBanks;

/// Where question banks come from.
#[async_trait]
pub trait BankSource: Send + Sync {
    /// Bank names in tab order.
    fn bank_names(&self) -> Vec<BankName>;

    /// Load and validate one bank.
    ///
    /// # Errors
    ///
    /// Returns `BankLoadError::NotFound` for unknown names, `BankLoadError::Bank` for an
    /// empty bank, and parse, I/O or HTTP errors from the underlying source.
    async fn load(&self, name: &BankName) -> Result<QuestionBank, BankLoadError>;
}

/// Parse a JSON array of question records into a validated bank.
///
/// # Errors
///
/// Returns `BankLoadError::Parse` if the JSON does not match the record shape,
/// `BankLoadError::Malformed` for the first record that fails validation, and
/// `BankLoadError::Bank` if the array is empty.
pub fn parse_bank(name: &BankName, json: &str) -> Result<QuestionBank, BankLoadError> {
    let records: Vec<QuestionRecord> =
        serde_json::from_str(json).map_err(|err| BankLoadError::Parse {
            bank: name.clone(),
            message: err.to_string(),
        })?;

    let questions = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record).map_err(|source| BankLoadError::Malformed {
                bank: name.clone(),
                index,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(QuestionBank::new(name.clone(), questions)?)
}
