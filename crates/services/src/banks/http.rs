use async_trait::async_trait;
use reqwest::Client;

use quiz_core::model::{BankName, QuestionBank};

use super::{BankSource, parse_bank};
use crate::error::BankLoadError;

/// Banks served as static files: `GET {base_url}/{name}.json`.
#[derive(Clone, Debug)]
pub struct HttpBanks {
    client: Client,
    base_url: String,
    names: Vec<BankName>,
}

impl HttpBanks {
    #[must_use]
    pub fn new(base_url: impl Into<String>, names: Vec<BankName>) -> Self {
        Self::with_client(Client::new(), base_url, names)
    }

    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>, names: Vec<BankName>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            names,
        }
    }

    #[must_use]
    pub fn url_for(&self, name: &BankName) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), name.as_str())
    }
}

#[async_trait]
impl BankSource for HttpBanks {
    fn bank_names(&self) -> Vec<BankName> {
        self.names.clone()
    }

    async fn load(&self, name: &BankName) -> Result<QuestionBank, BankLoadError> {
        if !self.names.contains(name) {
            return Err(BankLoadError::NotFound(name.clone()));
        }

        let response = self.client.get(self.url_for(name)).send().await?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(BankLoadError::NotFound(name.clone()));
        }
        if !status.is_success() {
            return Err(BankLoadError::HttpStatus {
                bank: name.clone(),
                status,
            });
        }

        let body = response.text().await?;
        parse_bank(name, &body)
    }
}
