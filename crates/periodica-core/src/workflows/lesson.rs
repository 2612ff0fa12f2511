use crate::core::lessons::library::{JumpPolicy, Lesson, MultipleChoice, Section};
use crate::engine::error::NavigationError;
use crate::engine::navigation::Navigator;
use crate::engine::quiz::{QuizEngine, QuizSnapshot};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSnapshot {
    pub lesson_id: String,
    pub active_section: usize,
    pub section_count: usize,
    pub quiz: QuizSnapshot,
}

/// One reader's pass through a lesson: where they are in the sections and
/// how far they are through the quiz.
#[derive(Debug, Clone)]
pub struct LessonSession<'a> {
    lesson: &'a Lesson,
    navigator: Navigator,
    quiz: QuizEngine<MultipleChoice>,
}

impl<'a> LessonSession<'a> {
    /// Starts at the first section using the lesson's own jump policy.
    pub fn new(lesson: &'a Lesson) -> Result<Self, NavigationError> {
        Self::with_policy(lesson, lesson.navigation)
    }

    pub fn with_policy(lesson: &'a Lesson, policy: JumpPolicy) -> Result<Self, NavigationError> {
        let navigator = Navigator::new(lesson.sections.len(), policy)?;
        info!(
            "Starting lesson '{}' ({} sections, {} questions, {:?} navigation).",
            lesson.id,
            lesson.sections.len(),
            lesson.questions.len(),
            policy
        );
        Ok(Self {
            lesson,
            navigator,
            quiz: QuizEngine::new(lesson.questions.clone()),
        })
    }

    pub fn lesson(&self) -> &'a Lesson {
        self.lesson
    }

    pub fn current_section(&self) -> &'a Section {
        &self.lesson.sections[self.navigator.active()]
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut Navigator {
        &mut self.navigator
    }

    pub fn quiz(&self) -> &QuizEngine<MultipleChoice> {
        &self.quiz
    }

    pub fn quiz_mut(&mut self) -> &mut QuizEngine<MultipleChoice> {
        &mut self.quiz
    }

    pub fn snapshot(&self) -> LessonSnapshot {
        LessonSnapshot {
            lesson_id: self.lesson.id.clone(),
            active_section: self.navigator.active(),
            section_count: self.navigator.len(),
            quiz: self.quiz.snapshot(),
        }
    }
}
