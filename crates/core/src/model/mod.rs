mod answers;
mod bank;
mod ids;
mod question;
mod result;
mod session;

pub use ids::{BankName, IdError, OptionKey};

pub use answers::{AnswerError, AnswerSet};
pub use bank::{BankError, QuestionBank};
pub use question::{Question, QuestionError, QuestionRecord};
pub use result::{QuestionOutcome, QuizResult};
pub use session::{QuizSession, SessionQuestion};
