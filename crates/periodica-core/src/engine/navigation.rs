use super::error::NavigationError;
use crate::core::lessons::library::JumpPolicy;
use tracing::debug;

/// The active section of a lesson.
///
/// `next` and `previous` clamp at the ends. `jump_to` moves anywhere under
/// [`JumpPolicy::Free`]; under [`JumpPolicy::Gated`] it may go back freely
/// but at most one section forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    len: usize,
    active: usize,
    policy: JumpPolicy,
}

impl Navigator {
    pub fn new(len: usize, policy: JumpPolicy) -> Result<Self, NavigationError> {
        if len == 0 {
            return Err(NavigationError::NoSections);
        }
        Ok(Self {
            len,
            active: 0,
            policy,
        })
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn policy(&self) -> JumpPolicy {
        self.policy
    }

    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    pub fn is_last(&self) -> bool {
        self.active + 1 == self.len
    }

    pub fn next(&mut self) -> usize {
        self.active = (self.active + 1).min(self.len - 1);
        self.active
    }

    pub fn previous(&mut self) -> usize {
        self.active = self.active.saturating_sub(1);
        self.active
    }

    /// Highest index `jump_to` currently accepts.
    pub fn furthest_reachable(&self) -> usize {
        match self.policy {
            JumpPolicy::Free => self.len - 1,
            JumpPolicy::Gated => (self.active + 1).min(self.len - 1),
        }
    }

    pub fn can_jump_to(&self, index: usize) -> bool {
        index <= self.furthest_reachable()
    }

    pub fn jump_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        if index >= self.len {
            return Err(NavigationError::OutOfRange {
                index,
                len: self.len,
            });
        }
        let furthest = self.furthest_reachable();
        if index > furthest {
            debug!("Section {} is locked (furthest reachable is {}).", index, furthest);
            return Err(NavigationError::Locked { index, furthest });
        }
        self.active = index;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_lessons_without_sections() {
        assert_eq!(
            Navigator::new(0, JumpPolicy::Free),
            Err(NavigationError::NoSections)
        );
    }

    #[test]
    fn next_and_previous_clamp_at_the_ends() {
        let mut nav = Navigator::new(3, JumpPolicy::Free).unwrap();
        assert_eq!(nav.previous(), 0);
        assert!(nav.is_first());
        assert_eq!(nav.next(), 1);
        assert_eq!(nav.next(), 2);
        assert_eq!(nav.next(), 2);
        assert!(nav.is_last());
        assert_eq!(nav.previous(), 1);
    }

    #[test]
    fn gated_navigation_allows_one_step_forward_and_any_step_back() {
        let mut nav = Navigator::new(5, JumpPolicy::Gated).unwrap();
        assert_eq!(
            nav.jump_to(3),
            Err(NavigationError::Locked {
                index: 3,
                furthest: 1
            })
        );
        assert_eq!(nav.active(), 0);

        assert_eq!(nav.jump_to(1), Ok(1));
        assert_eq!(nav.jump_to(2), Ok(2));
        assert!(!nav.can_jump_to(4));
        assert_eq!(nav.jump_to(0), Ok(0));
    }

    #[test]
    fn free_navigation_jumps_anywhere_in_range() {
        let mut nav = Navigator::new(5, JumpPolicy::Free).unwrap();
        assert_eq!(nav.jump_to(4), Ok(4));
        assert_eq!(
            nav.jump_to(5),
            Err(NavigationError::OutOfRange { index: 5, len: 5 })
        );
        assert_eq!(nav.active(), 4);
    }
}
