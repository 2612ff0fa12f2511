use super::question::Question;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument};

const BUILTIN_LESSONS_TOML: &str = include_str!("../../../data/lessons.toml");

/// How far ahead a reader may jump between lesson sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpPolicy {
    /// Any section may be opened at any time.
    #[default]
    Free,
    /// Backward jumps are free; forward jumps may go at most one section
    /// past the current one.
    Gated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MultipleChoice {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub answer: String,
    pub explanation: String,
}

impl Question for MultipleChoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn options(&self) -> &[String] {
        &self.options
    }

    fn correct_answer(&self) -> &str {
        &self.answer
    }

    fn explanation(&self) -> &str {
        &self.explanation
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub navigation: JumpPolicy,
    pub sections: Vec<Section>,
    #[serde(default)]
    pub questions: Vec<MultipleChoice>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLessonFile {
    lessons: Vec<Lesson>,
}

/// Errors raised while loading or validating a lesson file.
#[derive(Debug, Error)]
pub enum LessonLoadError {
    /// The lesson file could not be read from disk.
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The file is not valid TOML or does not match the lesson layout.
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Lesson id '{0}' is defined more than once")]
    DuplicateLesson(String),
    /// Navigation needs at least one section to point at.
    #[error("Lesson '{0}' has no sections")]
    NoSections(String),
    #[error("Question id '{question}' appears more than once in lesson '{lesson}'")]
    DuplicateQuestion { lesson: String, question: String },
    #[error("Question '{question}' in lesson '{lesson}' needs at least two options")]
    TooFewOptions { lesson: String, question: String },
    /// A question whose answer is not one of its options could never be
    /// answered correctly.
    #[error("The answer to question '{question}' in lesson '{lesson}' is not one of its options")]
    AnswerNotAnOption { lesson: String, question: String },
}

/// The ordered set of available lessons.
#[derive(Debug, Clone, Default)]
pub struct LessonLibrary {
    lessons: Vec<Lesson>,
}

impl LessonLibrary {
    pub fn builtin() -> Result<Self, LessonLoadError> {
        Self::from_toml_str(BUILTIN_LESSONS_TOML, "<builtin>")
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self, LessonLoadError> {
        let path_str = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| LessonLoadError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        Self::from_toml_str(&content, &path_str)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, LessonLoadError> {
        let raw: RawLessonFile = toml::from_str(content).map_err(|e| LessonLoadError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        let library = Self::from_lessons(raw.lessons)?;
        debug!("Loaded {} lessons from '{}'.", library.len(), origin);
        Ok(library)
    }

    pub fn from_lessons(lessons: Vec<Lesson>) -> Result<Self, LessonLoadError> {
        let mut lesson_ids = HashSet::new();
        for lesson in &lessons {
            if !lesson_ids.insert(lesson.id.as_str()) {
                return Err(LessonLoadError::DuplicateLesson(lesson.id.clone()));
            }
            validate_lesson(lesson)?;
        }
        Ok(Self { lessons })
    }

    pub fn get(&self, id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter()
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

fn validate_lesson(lesson: &Lesson) -> Result<(), LessonLoadError> {
    if lesson.sections.is_empty() {
        return Err(LessonLoadError::NoSections(lesson.id.clone()));
    }

    let mut question_ids = HashSet::new();
    for question in &lesson.questions {
        let context = || (lesson.id.clone(), question.id.clone());
        if !question_ids.insert(question.id.as_str()) {
            let (lesson, question) = context();
            return Err(LessonLoadError::DuplicateQuestion { lesson, question });
        }
        if question.options.len() < 2 {
            let (lesson, question) = context();
            return Err(LessonLoadError::TooFewOptions { lesson, question });
        }
        if !question.options.contains(&question.answer) {
            let (lesson, question) = context();
            return Err(LessonLoadError::AnswerNotAnOption { lesson, question });
        }
    }
    Ok(())
}
