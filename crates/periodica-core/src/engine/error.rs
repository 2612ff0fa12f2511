use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QuizError {
    #[error("The quiz has already been submitted")]
    AlreadySubmitted,

    #[error("The quiz has not been submitted yet")]
    NotSubmitted,

    #[error("Unknown question id '{0}'")]
    UnknownQuestion(String),

    #[error("Only {answered} of {total} questions have been answered")]
    Incomplete { answered: usize, total: usize },
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NavigationError {
    #[error("Cannot navigate a lesson without sections")]
    NoSections,

    #[error("Section {index} does not exist (lesson has {len} sections)")]
    OutOfRange { index: usize, len: usize },

    #[error("Section {index} is locked; the furthest reachable section is {furthest}")]
    Locked { index: usize, furthest: usize },
}

#[derive(Debug, Error)]
pub enum RenderLoopError {
    #[error("Frame interval must be greater than zero")]
    ZeroInterval,

    #[error("Failed to spawn the frame driver thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("The draw callback panicked")]
    Panicked,
}
