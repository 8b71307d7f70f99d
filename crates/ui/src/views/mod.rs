mod quiz;
mod results;
mod tabs;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use quiz::QuizPage;
pub use results::ResultsSummary;
pub use tabs::TabBar;
