/// A single quiz question with one correct option.
///
/// The quiz engine only needs these accessors, so any question shape
/// (multiple choice, true/false, a numeric answer rendered as text) can be
/// scored by the same state machine.
pub trait Question {
    /// Stable identifier, unique within one question set.
    fn id(&self) -> &str;
    fn prompt(&self) -> &str;
    fn options(&self) -> &[String];
    fn correct_answer(&self) -> &str;
    fn explanation(&self) -> &str;

    fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer()
    }
}
