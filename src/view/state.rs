use serde::{Deserialize, Serialize};

use crate::utils::{ArgusError, Result};

/// Which panel a pipeline is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Results,
    /// Entered on failure and dismissed right after the notice is shown
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEvent {
    Submit,
    Resolved,
    Failed,
    Dismiss,
    Reset,
}

impl ViewEvent {
    fn verb(&self) -> &'static str {
        match self {
            ViewEvent::Submit => "submit",
            ViewEvent::Resolved => "resolve",
            ViewEvent::Failed => "fail",
            ViewEvent::Dismiss => "dismiss",
            ViewEvent::Reset => "reset",
        }
    }
}

/// Per-pipeline state machine.
///
/// ```text
/// Idle --submit--> Loading --resolved--> Results --reset--> Idle
///                  Loading --failed--> Error --dismiss--> Idle
/// Results --submit--> Loading
/// ```
#[derive(Debug, Clone, Default)]
pub struct ViewMachine {
    state: ViewState,
}

impl ViewMachine {
    pub fn new() -> Self {
        Self::default()
    }
    
    pub fn state(&self) -> ViewState {
        self.state
    }
    
    pub fn is_loading(&self) -> bool {
        self.state == ViewState::Loading
    }
    
    pub fn apply(&mut self, event: ViewEvent) -> Result<ViewState> {
        use ViewEvent::*;
        use ViewState::*;
        
        let next = match (self.state, event) {
            (Loading, Submit) => return Err(ArgusError::Busy),
            (Idle | Results, Submit) => Loading,
            (Loading, Resolved) => Results,
            (Loading, Failed) => Error,
            (Error, Dismiss) => Idle,
            (_, Reset) => Idle,
            (from, event) => {
                return Err(ArgusError::InvalidTransition {
                    from,
                    event: event.verb(),
                })
            }
        };
        
        tracing::trace!("view {:?} -> {:?} on {:?}", self.state, next, event);
        self.state = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_happy_path() {
        let mut m = ViewMachine::new();
        assert_eq!(m.state(), ViewState::Idle);
        assert_eq!(m.apply(ViewEvent::Submit).unwrap(), ViewState::Loading);
        assert_eq!(m.apply(ViewEvent::Resolved).unwrap(), ViewState::Results);
        assert_eq!(m.apply(ViewEvent::Reset).unwrap(), ViewState::Idle);
    }
    
    #[test]
    fn test_failure_returns_to_idle() {
        let mut m = ViewMachine::new();
        m.apply(ViewEvent::Submit).unwrap();
        assert_eq!(m.apply(ViewEvent::Failed).unwrap(), ViewState::Error);
        assert_eq!(m.apply(ViewEvent::Dismiss).unwrap(), ViewState::Idle);
    }
    
    #[test]
    fn test_double_submit_is_busy() {
        let mut m = ViewMachine::new();
        m.apply(ViewEvent::Submit).unwrap();
        assert!(matches!(m.apply(ViewEvent::Submit), Err(ArgusError::Busy)));
        assert!(m.is_loading());
    }
    
    #[test]
    fn test_rescan_from_results() {
        let mut m = ViewMachine::new();
        m.apply(ViewEvent::Submit).unwrap();
        m.apply(ViewEvent::Resolved).unwrap();
        assert_eq!(m.apply(ViewEvent::Submit).unwrap(), ViewState::Loading);
    }
    
    #[test]
    fn test_stray_events_are_rejected() {
        let mut m = ViewMachine::new();
        assert!(matches!(
            m.apply(ViewEvent::Resolved),
            Err(ArgusError::InvalidTransition { from: ViewState::Idle, .. })
        ));
        assert_eq!(m.state(), ViewState::Idle);
    }
}
