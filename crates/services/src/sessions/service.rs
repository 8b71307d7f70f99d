use std::sync::Arc;

use quiz_core::model::{BankName, QuestionBank};

use super::board::{LoadTicket, QuizBoard};
use crate::banks::BankSource;
use crate::error::{BankLoadError, QuizError};

/// Loads banks for the board from a configured `BankSource`.
#[derive(Clone)]
pub struct QuizService {
    source: Arc<dyn BankSource>,
}

impl QuizService {
    #[must_use]
    pub fn new(source: Arc<dyn BankSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn bank_names(&self) -> Vec<BankName> {
        self.source.bank_names()
    }

    /// A fresh board over every bank the source knows about.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoBanks` if the source lists no banks.
    pub fn new_board(&self) -> Result<QuizBoard, QuizError> {
        QuizBoard::new(self.bank_names())
    }

    /// Load one bank by name.
    ///
    /// # Errors
    ///
    /// Propagates the source's `BankLoadError`.
    pub async fn load_bank(&self, name: &BankName) -> Result<QuestionBank, BankLoadError> {
        log::debug!("loading question bank `{name}`");
        match self.source.load(name).await {
            Ok(bank) => {
                log::debug!("loaded `{name}` with {} questions", bank.len());
                Ok(bank)
            }
            Err(err) => {
                log::warn!("failed to load `{name}`: {err}");
                Err(err)
            }
        }
    }

    /// Load the bank a ticket refers to. Feed the outcome to `QuizBoard::complete_load`.
    ///
    /// # Errors
    ///
    /// Propagates the source's `BankLoadError`.
    pub async fn load(&self, ticket: &LoadTicket) -> Result<QuestionBank, BankLoadError> {
        self.load_bank(ticket.bank()).await
    }

    /// Select `bank` on `board` and load it to completion.
    ///
    /// Returns whether a load was applied. `false` means `bank` was already open and its
    /// attempt was left untouched.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownBank` for names the board does not list. Load failures
    /// are not errors here; they land in the board as `BoardState::Failed`.
    pub async fn open(&self, board: &mut QuizBoard, bank: &BankName) -> Result<bool, QuizError> {
        let Some(ticket) = board.select(bank)? else {
            return Ok(false);
        };
        let outcome = self.load(&ticket).await;
        Ok(board.complete_load(&ticket, outcome))
    }
}
