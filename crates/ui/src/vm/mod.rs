mod board_vm;

pub use board_vm::{
    BoardVm, BodyVm, OptionMark, OptionVm, QuestionVm, QuizIntent, QuizVm, ResultSummaryVm,
    TabVm, map_board,
};
