/// The three ways an open dialog can be dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    CloseButton,
    Backdrop,
    EscapeKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Closed,
}

/// Per-instance dismissal guard shared by the close button, the backdrop
/// and the Escape listener. However many triggers fire, the transition to
/// `Closed` happens once, so the owner's close callback is emitted exactly
/// once.
#[derive(Debug)]
pub struct ModalLifecycle {
    state: ModalState,
}

impl ModalLifecycle {
    pub fn new() -> Self {
        ModalLifecycle {
            state: ModalState::Open,
        }
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Returns true only for the dismissal that actually closed the modal;
    /// any later trigger is a no-op.
    pub fn dismiss(&mut self, _trigger: DismissTrigger) -> bool {
        match self.state {
            ModalState::Open => {
                self.state = ModalState::Closed;
                true
            }
            ModalState::Closed => false,
        }
    }
}

impl Default for ModalLifecycle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_open() {
        assert_eq!(ModalLifecycle::new().state(), ModalState::Open);
    }

    #[test]
    fn first_dismissal_closes() {
        for trigger in [
            DismissTrigger::CloseButton,
            DismissTrigger::Backdrop,
            DismissTrigger::EscapeKey,
        ] {
            let mut lifecycle = ModalLifecycle::new();
            assert!(lifecycle.dismiss(trigger));
            assert_eq!(lifecycle.state(), ModalState::Closed);
        }
    }

    #[test]
    fn close_click_reaching_the_backdrop_closes_once() {
        // A close-button click that bubbles on to the backdrop handler
        // produces two triggers for one click; only the first closes.
        let mut lifecycle = ModalLifecycle::new();
        assert!(lifecycle.dismiss(DismissTrigger::CloseButton));
        assert!(!lifecycle.dismiss(DismissTrigger::Backdrop));
        assert_eq!(lifecycle.state(), ModalState::Closed);
    }

    #[test]
    fn second_dismissal_is_a_guarded_no_op() {
        let mut lifecycle = ModalLifecycle::new();
        assert!(lifecycle.dismiss(DismissTrigger::EscapeKey));
        assert!(!lifecycle.dismiss(DismissTrigger::EscapeKey));
        assert!(!lifecycle.dismiss(DismissTrigger::Backdrop));
        assert!(!lifecycle.dismiss(DismissTrigger::CloseButton));
        assert_eq!(lifecycle.state(), ModalState::Closed);
    }
}
