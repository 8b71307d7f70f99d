mod attempt;
mod board;
mod progress;
mod service;

// Public API of the quiz session subsystem.
pub use crate::error::QuizError;
pub use attempt::QuizAttempt;
pub use board::{BoardState, LoadTicket, QuizBoard};
pub use progress::AttemptProgress;
pub use service::QuizService;
