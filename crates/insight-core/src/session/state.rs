//! Request and panel state.

/// Whether a generation request is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    /// A generation call has been dispatched and has not returned yet.
    Awaiting,
}

impl RequestState {
    /// Moves `Idle -> Awaiting`. Returns `false` (and changes nothing) when a
    /// request is already outstanding.
    pub fn try_begin(&mut self) -> bool {
        match self {
            RequestState::Idle => {
                *self = RequestState::Awaiting;
                true
            }
            RequestState::Awaiting => false,
        }
    }

    /// Returns to `Idle` after the request completes or fails.
    pub fn finish(&mut self) {
        *self = RequestState::Idle;
    }

    pub fn is_pending(self) -> bool {
        self == RequestState::Awaiting
    }
}

/// Visibility of the chat panel and the unread badge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelState {
    open: bool,
    unread: usize,
}

impl PanelState {
    pub fn open(&mut self) {
        self.open = true;
        self.unread = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Counts an incoming assistant message as unread while the panel is closed.
    pub fn note_incoming(&mut self) {
        if !self.open {
            self.unread += 1;
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn unread(&self) -> usize {
        self.unread
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_state_transitions() {
        let mut state = RequestState::default();
        assert!(!state.is_pending());

        assert!(state.try_begin());
        assert!(state.is_pending());

        // second begin is rejected
        assert!(!state.try_begin());
        assert!(state.is_pending());

        state.finish();
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn test_unread_counts_only_while_closed() {
        let mut panel = PanelState::default();
        panel.note_incoming();
        panel.note_incoming();
        assert_eq!(panel.unread(), 2);

        panel.open();
        assert_eq!(panel.unread(), 0);
        panel.note_incoming();
        assert_eq!(panel.unread(), 0);
    }

    #[test]
    fn test_toggle() {
        let mut panel = PanelState::default();
        panel.toggle();
        assert!(panel.is_open());
        panel.toggle();
        assert!(!panel.is_open());
    }
}
