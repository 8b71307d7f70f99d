/// How far the user has got through an attempt, for progress labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptProgress {
    pub total: usize,
    pub answered: usize,
    pub submitted: bool,
}
