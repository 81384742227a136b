use crate::models::{Category, Coordinates, PendingAction};

/// Transient values the main screen collects before launching another screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub coordinates: Coordinates,
    pub pending_action: PendingAction,
    category: Option<Category>,
}

impl SessionState {
    pub fn category(&self) -> Option<Category> {
        self.category
    }

    /// Checks `category` and unchecks the other two
    pub fn select_category(&mut self, category: Category) {
        self.category = Some(category);
    }

    #[cfg(test)]
    pub fn is_selected(&self, category: Category) -> bool {
        self.category == Some(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session() {
        let session = SessionState::default();
        assert_eq!(session.coordinates, Coordinates::new(0.0, 0.0));
        assert_eq!(session.pending_action, PendingAction::None);
        assert_eq!(session.category(), None);
    }

    #[test]
    fn test_at_most_one_category_for_any_click_sequence() {
        let all = Category::all();
        // every sequence of length 4 over the three checkboxes
        for n in 0..all.len().pow(4) {
            let mut session = SessionState::default();
            let mut rest = n;
            let mut last = None;
            for _ in 0..4 {
                let clicked = all[rest % all.len()];
                rest /= all.len();
                session.select_category(clicked);
                last = Some(clicked);
            }
            let checked = all.iter().filter(|c| session.is_selected(**c)).count();
            assert_eq!(checked, 1);
            assert_eq!(session.category(), last);
        }
    }
}
