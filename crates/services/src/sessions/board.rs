use std::sync::Arc;

use quiz_core::model::{BankName, OptionKey, QuestionBank, QuizResult};

use super::attempt::QuizAttempt;
use crate::error::{BankLoadError, QuizError};

/// Identifies one bank load. Only the ticket for the latest selection is honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    bank: BankName,
    generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn bank(&self) -> &BankName {
        &self.bank
    }
}

/// What the active tab is currently showing.
#[derive(Debug, Clone)]
pub enum BoardState {
    Loading,
    Ready(QuizAttempt),
    Failed(Arc<BankLoadError>),
}

/// The whole quiz UI state: available banks, the active one, and its attempt.
///
/// Every bank switch replaces the state wholesale, so answers and results from an
/// earlier tab cannot leak into the next one.
#[derive(Debug, Clone)]
pub struct QuizBoard {
    banks: Vec<BankName>,
    active: BankName,
    generation: u64,
    state: BoardState,
}

impl QuizBoard {
    /// Create a board with the first bank active and its load pending.
    ///
    /// Call `reload` (or `select`) to obtain the ticket for the initial load.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoBanks` if `banks` is empty.
    pub fn new(banks: Vec<BankName>) -> Result<Self, QuizError> {
        let active = banks.first().cloned().ok_or(QuizError::NoBanks)?;
        Ok(Self {
            banks,
            active,
            generation: 0,
            state: BoardState::Loading,
        })
    }

    #[must_use]
    pub fn banks(&self) -> &[BankName] {
        &self.banks
    }

    #[must_use]
    pub fn active(&self) -> &BankName {
        &self.active
    }

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Bumped whenever a load or a fresh attempt starts; doubles as a render key for the quiz form.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Make `bank` the active tab, dropping the current attempt.
    ///
    /// Selecting the tab that already shows a quiz is a no-op and returns `None`; the
    /// attempt and its answers stay as they are. A loading or failed tab is reloaded.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownBank` if `bank` is not one of the board's banks.
    pub fn select(&mut self, bank: &BankName) -> Result<Option<LoadTicket>, QuizError> {
        if !self.banks.contains(bank) {
            return Err(QuizError::UnknownBank(bank.clone()));
        }
        if *bank == self.active && matches!(self.state, BoardState::Ready(_)) {
            return Ok(None);
        }
        self.active = bank.clone();
        Ok(Some(self.reload()))
    }

    /// Start over on the active bank, e.g. to retry a failed load.
    pub fn reload(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = BoardState::Loading;
        LoadTicket {
            bank: self.active.clone(),
            generation: self.generation,
        }
    }

    /// Apply the outcome of a load. Returns `false` and leaves the board untouched if a
    /// newer selection has superseded `ticket`.
    pub fn complete_load(
        &mut self,
        ticket: &LoadTicket,
        outcome: Result<QuestionBank, BankLoadError>,
    ) -> bool {
        if ticket.generation != self.generation || ticket.bank != self.active {
            log::debug!(
                "dropping stale load of `{}` (generation {}, current {})",
                ticket.bank,
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.state = match outcome {
            Ok(bank) => BoardState::Ready(QuizAttempt::start(Arc::new(bank))),
            Err(err) => BoardState::Failed(Arc::new(err)),
        };
        true
    }

    #[must_use]
    pub fn attempt(&self) -> Option<&QuizAttempt> {
        match &self.state {
            BoardState::Ready(attempt) => Some(attempt),
            BoardState::Loading | BoardState::Failed(_) => None,
        }
    }

    fn attempt_mut(&mut self) -> Result<&mut QuizAttempt, QuizError> {
        match &mut self.state {
            BoardState::Ready(attempt) => Ok(attempt),
            BoardState::Loading | BoardState::Failed(_) => Err(QuizError::NotReady),
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError::NotReady` while loading or after a failed load, plus any
    /// error from `QuizAttempt::record`.
    pub fn record(&mut self, position: usize, key: OptionKey) -> Result<(), QuizError> {
        self.attempt_mut()?.record(position, key)
    }

    /// # Errors
    ///
    /// Returns `QuizError::NotReady` when there is no attempt to grade.
    pub fn submit(&mut self) -> Result<QuizResult, QuizError> {
        Ok(self.attempt_mut()?.submit().clone())
    }

    /// Reshuffle the active bank in place without reloading it.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotReady` when there is no attempt to restart.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.attempt_mut()?.restart();
        self.generation += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{BankError, Question};

    fn name(raw: &str) -> BankName {
        BankName::new(raw).unwrap()
    }

    fn key(raw: &str) -> OptionKey {
        OptionKey::new(raw).unwrap()
    }

    fn bank(raw: &str) -> QuestionBank {
        let question = Question::new(
            "2+2?",
            [(key("a"), "3".to_string()), (key("b"), "4".to_string())],
            key("b"),
        )
        .unwrap();
        QuestionBank::new(name(raw), vec![question]).unwrap()
    }

    fn board() -> QuizBoard {
        QuizBoard::new(vec![name("paper1"), name("paper2")]).unwrap()
    }

    #[test]
    fn board_requires_banks() {
        assert_eq!(QuizBoard::new(Vec::new()).unwrap_err(), QuizError::NoBanks);
    }

    #[test]
    fn first_bank_is_active_and_loading() {
        let board = board();
        assert_eq!(board.active(), &name("paper1"));
        assert!(matches!(board.state(), BoardState::Loading));
        assert!(board.attempt().is_none());
    }

    #[test]
    fn switching_tabs_discards_answers_and_result() {
        let mut board = board();
        let ticket = board.reload();
        assert!(board.complete_load(&ticket, Ok(bank("paper1"))));
        board.record(0, key("b")).unwrap();
        board.submit().unwrap();

        let ticket = board.select(&name("paper2")).unwrap().unwrap();
        assert!(matches!(board.state(), BoardState::Loading));
        assert!(board.complete_load(&ticket, Ok(bank("paper2"))));

        let attempt = board.attempt().unwrap();
        assert!(attempt.answers().is_empty());
        assert!(attempt.result().is_none());
        assert_eq!(attempt.bank().name(), &name("paper2"));
    }

    #[test]
    fn stale_loads_are_ignored() {
        let mut board = board();
        let first = board.select(&name("paper1")).unwrap().unwrap();
        let second = board.select(&name("paper2")).unwrap().unwrap();

        assert!(!board.complete_load(&first, Ok(bank("paper1"))));
        assert!(matches!(board.state(), BoardState::Loading));

        assert!(board.complete_load(&second, Ok(bank("paper2"))));
        assert_eq!(board.attempt().unwrap().bank().name(), &name("paper2"));
    }

    #[test]
    fn failed_load_is_kept_and_reload_retries() {
        let mut board = board();
        let ticket = board.reload();
        let empty = BankLoadError::Bank(BankError::Empty {
            name: name("paper1"),
        });
        assert!(board.complete_load(&ticket, Err(empty)));
        match board.state() {
            BoardState::Failed(err) => assert!(err.is_no_data()),
            other => panic!("unexpected state: {other:?}"),
        }
        assert_eq!(board.record(0, key("a")), Err(QuizError::NotReady));
        assert_eq!(board.submit().unwrap_err(), QuizError::NotReady);

        let retry = board.reload();
        assert!(board.complete_load(&retry, Ok(bank("paper1"))));
        assert!(board.attempt().is_some());
    }

    #[test]
    fn reselecting_the_open_tab_keeps_the_attempt() {
        let mut board = board();
        let ticket = board.reload();
        board.complete_load(&ticket, Ok(bank("paper1")));
        board.record(0, key("b")).unwrap();
        let before = board.generation();

        assert_eq!(board.select(&name("paper1")).unwrap(), None);

        assert_eq!(board.generation(), before);
        let attempt = board.attempt().unwrap();
        assert_eq!(attempt.selected(0), Some(&key("b")));
        assert_eq!(attempt.answers().len(), 1);
    }

    #[test]
    fn reselecting_a_failed_or_loading_tab_reloads_it() {
        let mut board = board();
        assert!(board.select(&name("paper1")).unwrap().is_some());

        let ticket = board.reload();
        let broken = BankLoadError::Parse {
            bank: name("paper1"),
            message: "expected value".to_string(),
        };
        board.complete_load(&ticket, Err(broken));

        let retry = board.select(&name("paper1")).unwrap().unwrap();
        assert!(matches!(board.state(), BoardState::Loading));
        assert!(board.complete_load(&retry, Ok(bank("paper1"))));
        assert!(board.attempt().is_some());
    }

    #[test]
    fn unknown_bank_is_rejected_without_teardown() {
        let mut board = board();
        let ticket = board.reload();
        board.complete_load(&ticket, Ok(bank("paper1")));
        board.record(0, key("a")).unwrap();

        assert_eq!(
            board.select(&name("paper9")).unwrap_err(),
            QuizError::UnknownBank(name("paper9"))
        );
        assert_eq!(board.attempt().unwrap().answers().len(), 1);
    }

    #[test]
    fn restart_bumps_generation_and_clears_answers() {
        let mut board = board();
        let ticket = board.reload();
        board.complete_load(&ticket, Ok(bank("paper1")));
        board.record(0, key("a")).unwrap();
        board.submit().unwrap();
        let before = board.generation();

        board.restart().unwrap();

        assert_eq!(board.generation(), before + 1);
        let attempt = board.attempt().unwrap();
        assert!(attempt.answers().is_empty());
        assert!(!attempt.is_submitted());
    }
}
