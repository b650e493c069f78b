use crate::game::GameAction;

/// Seam to the networking collaborator that carries an action to the server.
pub trait ActionSink {
    fn submit(&mut self, action: GameAction);
}

/// One submission may be outstanding per game. A second click before the
/// response lands is dropped, not queued; there is no retry or cancellation
/// here, and a failed submission simply re-arms the guard via [`resolve`].
///
/// [`resolve`]: SubmissionGuard::resolve
#[derive(Debug, Default)]
pub struct SubmissionGuard {
    in_flight: bool,
}

impl SubmissionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    /// Hands the action to the sink unless one is already outstanding.
    /// Returns whether the action was actually submitted.
    pub fn try_submit<S: ActionSink>(&mut self, sink: &mut S, action: GameAction) -> bool {
        if self.in_flight {
            log::debug!(
                "dropping {} click while a submission is in flight",
                action.action_type()
            );
            return false;
        }
        self.in_flight = true;
        sink.submit(action);
        true
    }

    /// The server answered (or the request failed); clicks count again.
    pub fn resolve(&mut self) {
        self.in_flight = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[derive(Default)]
    struct RecordingSink(Vec<GameAction>);

    impl ActionSink for RecordingSink {
        fn submit(&mut self, action: GameAction) {
            self.0.push(action);
        }
    }

    fn end_turn() -> GameAction {
        GameAction::EndTurn { color: Color::Red }
    }

    #[test]
    fn second_click_is_dropped_while_in_flight() {
        let mut sink = RecordingSink::default();
        let mut guard = SubmissionGuard::new();

        assert!(guard.try_submit(&mut sink, end_turn()));
        assert!(guard.in_flight());
        assert!(!guard.try_submit(&mut sink, end_turn()));
        assert_eq!(sink.0.len(), 1);
    }

    #[test]
    fn resolution_rearms_the_guard() {
        let mut sink = RecordingSink::default();
        let mut guard = SubmissionGuard::new();

        guard.try_submit(&mut sink, end_turn());
        guard.resolve();
        assert!(!guard.in_flight());
        assert!(guard.try_submit(&mut sink, end_turn()));
        assert_eq!(sink.0.len(), 2);
    }
}
