use super::error::QuizError;
use crate::core::lessons::question::Question;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizPhase {
    NotStarted,
    InProgress,
    Submitted,
}

/// Outcome of one question, for display after submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult<'a> {
    pub question_id: &'a str,
    pub prompt: &'a str,
    pub selected: Option<&'a str>,
    pub correct_answer: &'a str,
    pub is_correct: bool,
    pub explanation: &'a str,
    pub explanation_visible: bool,
}

/// Serializable copy of the quiz state handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizSnapshot {
    pub phase: QuizPhase,
    pub answers: BTreeMap<String, String>,
    pub explanation_visible: BTreeMap<String, bool>,
    pub answered: usize,
    pub total: usize,
    /// Only present once the attempt has been submitted.
    pub score: Option<usize>,
}

/// The answer/submit/retake state machine shared by every lesson quiz.
///
/// An attempt moves `NotStarted -> InProgress -> Submitted`, and `retake`
/// returns it to `NotStarted`. Answers may only change before submission,
/// submission requires every question to be answered, and explanations can
/// only be toggled after submission. Rejected calls return an error and leave
/// the state untouched.
#[derive(Debug, Clone)]
pub struct QuizEngine<Q> {
    questions: Vec<Q>,
    answers: HashMap<String, String>,
    explanation_visible: HashSet<String>,
    submitted: bool,
}

impl<Q: Question> QuizEngine<Q> {
    pub fn new(questions: Vec<Q>) -> Self {
        Self {
            questions,
            answers: HashMap::new(),
            explanation_visible: HashSet::new(),
            submitted: false,
        }
    }

    pub fn questions(&self) -> &[Q] {
        &self.questions
    }

    pub fn phase(&self) -> QuizPhase {
        if self.submitted {
            QuizPhase::Submitted
        } else if self.answers.is_empty() {
            QuizPhase::NotStarted
        } else {
            QuizPhase::InProgress
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// True once every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.questions
            .iter()
            .all(|q| self.answers.contains_key(q.id()))
    }

    fn find(&self, question_id: &str) -> Option<&Q> {
        self.questions.iter().find(|q| q.id() == question_id)
    }

    /// Records (or replaces) the selected option for a question.
    ///
    /// The option text is not checked against the question's options.
    pub fn select_answer(
        &mut self,
        question_id: &str,
        option: impl Into<String>,
    ) -> Result<(), QuizError> {
        if self.submitted {
            debug!("Ignoring answer for '{}': quiz already submitted.", question_id);
            return Err(QuizError::AlreadySubmitted);
        }
        if self.find(question_id).is_none() {
            return Err(QuizError::UnknownQuestion(question_id.to_string()));
        }
        self.answers.insert(question_id.to_string(), option.into());
        Ok(())
    }

    /// Freezes the answers and returns the score.
    pub fn submit(&mut self) -> Result<usize, QuizError> {
        if self.submitted {
            return Err(QuizError::AlreadySubmitted);
        }
        if !self.is_complete() {
            debug!(
                "Rejecting submit with {} of {} answers.",
                self.answers.len(),
                self.questions.len()
            );
            return Err(QuizError::Incomplete {
                answered: self.answers.len(),
                total: self.questions.len(),
            });
        }
        self.submitted = true;
        let score = self.score();
        debug!("Quiz submitted with score {}/{}.", score, self.questions.len());
        Ok(score)
    }

    /// Clears answers and explanations for a new attempt.
    pub fn retake(&mut self) -> Result<(), QuizError> {
        if !self.submitted {
            return Err(QuizError::NotSubmitted);
        }
        self.answers.clear();
        self.explanation_visible.clear();
        self.submitted = false;
        Ok(())
    }

    /// Number of questions whose selected answer is correct.
    ///
    /// Meaningful only after submission, though nothing prevents calling it
    /// earlier.
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| self.answer(q.id()).is_some_and(|a| q.is_correct(a)))
            .count()
    }

    /// Flips the explanation for a question and returns its new visibility.
    pub fn toggle_explanation(&mut self, question_id: &str) -> Result<bool, QuizError> {
        if !self.submitted {
            return Err(QuizError::NotSubmitted);
        }
        if self.find(question_id).is_none() {
            return Err(QuizError::UnknownQuestion(question_id.to_string()));
        }
        if self.explanation_visible.remove(question_id) {
            Ok(false)
        } else {
            self.explanation_visible.insert(question_id.to_string());
            Ok(true)
        }
    }

    pub fn is_explanation_visible(&self, question_id: &str) -> bool {
        self.explanation_visible.contains(question_id)
    }

    pub fn results(&self) -> Vec<QuestionResult<'_>> {
        self.questions
            .iter()
            .map(|q| {
                let selected = self.answer(q.id());
                QuestionResult {
                    question_id: q.id(),
                    prompt: q.prompt(),
                    selected,
                    correct_answer: q.correct_answer(),
                    is_correct: selected.is_some_and(|a| q.is_correct(a)),
                    explanation: q.explanation(),
                    explanation_visible: self.is_explanation_visible(q.id()),
                }
            })
            .collect()
    }

    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            phase: self.phase(),
            answers: self
                .answers
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            explanation_visible: self
                .questions
                .iter()
                .map(|q| (q.id().to_string(), self.is_explanation_visible(q.id())))
                .collect(),
            answered: self.answers.len(),
            total: self.questions.len(),
            score: self.submitted.then(|| self.score()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lessons::library::MultipleChoice;

    fn question(id: &str) -> MultipleChoice {
        MultipleChoice {
            id: id.to_string(),
            prompt: format!("Prompt {id}"),
            options: vec!["right".to_string(), "wrong".to_string()],
            answer: "right".to_string(),
            explanation: format!("Explanation {id}"),
        }
    }

    fn five_question_quiz() -> QuizEngine<MultipleChoice> {
        QuizEngine::new(["q1", "q2", "q3", "q4", "q5"].map(question).to_vec())
    }

    #[test]
    fn all_correct_answers_score_five_and_retake_resets() {
        let mut quiz = five_question_quiz();
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);

        for id in ["q1", "q2", "q3", "q4", "q5"] {
            quiz.select_answer(id, "right").unwrap();
        }
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
        assert_eq!(quiz.submit(), Ok(5));
        assert_eq!(quiz.score(), 5);
        assert_eq!(quiz.phase(), QuizPhase::Submitted);

        quiz.retake().unwrap();
        assert_eq!(quiz.answered_count(), 0);
        assert!(!quiz.is_submitted());
        assert_eq!(quiz.phase(), QuizPhase::NotStarted);
    }

    #[test]
    fn incomplete_submit_is_rejected_without_changing_state() {
        let mut quiz = five_question_quiz();
        for id in ["q1", "q2", "q3"] {
            quiz.select_answer(id, "right").unwrap();
        }
        assert_eq!(
            quiz.submit(),
            Err(QuizError::Incomplete {
                answered: 3,
                total: 5
            })
        );
        assert!(!quiz.is_submitted());
        assert_eq!(quiz.answered_count(), 3);
        assert_eq!(quiz.phase(), QuizPhase::InProgress);
    }

    #[test]
    fn questions_sharing_an_id_are_complete_once_that_id_is_answered() {
        let mut quiz = QuizEngine::new(vec![question("q1"), question("q1")]);
        quiz.select_answer("q1", "right").unwrap();
        assert!(quiz.is_complete());
        assert_eq!(quiz.submit(), Ok(2));
    }

    #[test]
    fn answers_are_frozen_after_submission() {
        let mut quiz = five_question_quiz();
        for id in ["q1", "q2", "q3", "q4", "q5"] {
            quiz.select_answer(id, "wrong").unwrap();
        }
        quiz.select_answer("q1", "right").unwrap();
        assert_eq!(quiz.submit(), Ok(1));

        assert_eq!(
            quiz.select_answer("q2", "right"),
            Err(QuizError::AlreadySubmitted)
        );
        assert_eq!(quiz.answer("q2"), Some("wrong"));
        assert_eq!(quiz.submit(), Err(QuizError::AlreadySubmitted));
    }

    #[test]
    fn selecting_does_not_validate_option_text() {
        let mut quiz = five_question_quiz();
        quiz.select_answer("q1", "not an option").unwrap();
        assert_eq!(quiz.answer("q1"), Some("not an option"));
        assert_eq!(
            quiz.select_answer("q9", "right"),
            Err(QuizError::UnknownQuestion("q9".to_string()))
        );
    }

    #[test]
    fn retake_requires_a_submitted_attempt() {
        let mut quiz = five_question_quiz();
        quiz.select_answer("q1", "right").unwrap();
        assert_eq!(quiz.retake(), Err(QuizError::NotSubmitted));
        assert_eq!(quiz.answer("q1"), Some("right"));
    }

    #[test]
    fn explanations_toggle_only_after_submission() {
        let mut quiz = five_question_quiz();
        assert_eq!(quiz.toggle_explanation("q1"), Err(QuizError::NotSubmitted));

        for id in ["q1", "q2", "q3", "q4", "q5"] {
            quiz.select_answer(id, "right").unwrap();
        }
        quiz.submit().unwrap();
        assert_eq!(quiz.toggle_explanation("q1"), Ok(true));
        assert!(quiz.is_explanation_visible("q1"));
        assert_eq!(quiz.toggle_explanation("q1"), Ok(false));
        assert_eq!(quiz.toggle_explanation("q1"), Ok(true));

        quiz.retake().unwrap();
        assert!(!quiz.is_explanation_visible("q1"));
    }

    #[test]
    fn results_and_snapshot_report_each_question() {
        let mut quiz = five_question_quiz();
        for id in ["q1", "q2", "q3", "q4"] {
            quiz.select_answer(id, "right").unwrap();
        }
        quiz.select_answer("q5", "wrong").unwrap();
        quiz.submit().unwrap();
        quiz.toggle_explanation("q5").unwrap();

        let results = quiz.results();
        assert_eq!(results.len(), 5);
        let last = &results[4];
        assert_eq!(last.selected, Some("wrong"));
        assert_eq!(last.correct_answer, "right");
        assert!(!last.is_correct);
        assert!(last.explanation_visible);

        let snapshot = quiz.snapshot();
        assert_eq!(snapshot.phase, QuizPhase::Submitted);
        assert_eq!(snapshot.score, Some(4));
        assert_eq!(snapshot.answered, 5);
        assert_eq!(snapshot.explanation_visible.get("q5"), Some(&true));
        assert_eq!(snapshot.explanation_visible.get("q1"), Some(&false));
    }

    #[test]
    fn snapshot_hides_score_before_submission() {
        let mut quiz = five_question_quiz();
        quiz.select_answer("q1", "right").unwrap();
        let snapshot = quiz.snapshot();
        assert_eq!(snapshot.score, None);
        assert_eq!(snapshot.total, 5);
    }
}
