//! List screen state

use crate::listing::entities::PresentationModel;
use serde::Serialize;

/// What the list screen shows: last fetch outcome layered over the latest model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScreenState {
    pub is_loading: bool,
    pub is_error: bool,
    pub model: PresentationModel,
}

impl ScreenState {
    /// A refresh cycle started; the previous error no longer applies.
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.is_error = false;
    }

    /// The fetch failed. The model is left as it was.
    pub fn fail(&mut self) {
        self.is_loading = false;
        self.is_error = true;
    }

    pub fn finish_loading(&mut self) {
        self.is_loading = false;
        self.is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::entities::ListItem;

    #[test]
    fn test_fail_keeps_model() {
        let model = PresentationModel {
            items: vec![ListItem::SessionsTitle],
        };
        let mut state = ScreenState {
            model: model.clone(),
            ..Default::default()
        };

        state.start_loading();
        state.fail();

        assert!(!state.is_loading);
        assert!(state.is_error);
        assert_eq!(state.model, model);
    }

    #[test]
    fn test_start_loading_clears_error() {
        let mut state = ScreenState::default();
        state.fail();
        state.start_loading();
        assert!(state.is_loading);
        assert!(!state.is_error);
    }
}
