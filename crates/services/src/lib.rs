#![forbid(unsafe_code)]

pub mod banks;
pub mod error;
pub mod sessions;

pub use banks::{BankSource, DirectoryBanks, EmbeddedBanks, HttpBanks, parse_bank};
pub use error::{BankLoadError, QuizError};
pub use sessions::{AttemptProgress, BoardState, LoadTicket, QuizAttempt, QuizBoard, QuizService};
