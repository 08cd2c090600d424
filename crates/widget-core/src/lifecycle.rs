//! Widget lifecycle tracking.

use std::fmt;

use crate::error::WidgetError;

/// Lifecycle phases of a widget instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetPhase {
    /// Product fetch in flight; nothing rendered yet.
    Loading,
    /// Product decoded, state initialized, first render done.
    Ready,
    /// Listeners attached; user actions are handled.
    Interactive,
    /// Initialization failed. Terminal.
    Failed(String),
}

impl WidgetPhase {
    /// Short name of the phase.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
            Self::Interactive => "interactive",
            Self::Failed(_) => "failed",
        }
    }

    /// Whether `next` is a legal successor of this phase.
    pub fn can_transition_to(&self, next: &WidgetPhase) -> bool {
        matches!(
            (self, next),
            (Self::Loading, Self::Ready)
                | (Self::Loading, Self::Failed(_))
                | (Self::Ready, Self::Interactive)
                | (Self::Ready, Self::Failed(_))
        )
    }

    /// Move to `next`, or report an invalid transition.
    pub fn advance(&mut self, next: WidgetPhase) -> Result<(), WidgetError> {
        if !self.can_transition_to(&next) {
            return Err(WidgetError::InvalidTransition {
                from: self.name().to_string(),
                to: next.name().to_string(),
            });
        }
        *self = next;
        Ok(())
    }

    /// Whether user actions are accepted in this phase.
    pub fn is_interactive(&self) -> bool {
        matches!(self, Self::Interactive)
    }
}

impl fmt::Display for WidgetPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Failed(reason) => write!(f, "failed ({})", reason),
            other => write!(f, "{}", other.name()),
        }
    }
}

/// Observer trait for lifecycle events.
///
/// Observers run on the UI thread, so no `Send` bound.
pub trait LifecycleObserver {
    /// Called after the widget enters a new phase.
    fn on_phase(&self, phase: &WidgetPhase);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_happy_path() {
        let mut phase = WidgetPhase::Loading;
        phase.advance(WidgetPhase::Ready).unwrap();
        phase.advance(WidgetPhase::Interactive).unwrap();
        assert!(phase.is_interactive());
    }

    #[test]
    fn test_failed_is_terminal() {
        let mut phase = WidgetPhase::Loading;
        phase.advance(WidgetPhase::Failed("boom".into())).unwrap();
        let err = phase.advance(WidgetPhase::Ready).unwrap_err();
        assert_eq!(
            err,
            WidgetError::InvalidTransition {
                from: "failed".into(),
                to: "ready".into()
            }
        );
    }

    #[test]
    fn test_cannot_skip_ready() {
        let mut phase = WidgetPhase::Loading;
        assert!(phase.advance(WidgetPhase::Interactive).is_err());
        assert_eq!(phase, WidgetPhase::Loading);
    }

    #[test]
    fn test_display() {
        assert_eq!(WidgetPhase::Ready.to_string(), "ready");
        assert_eq!(
            WidgetPhase::Failed("HTTP 500".into()).to_string(),
            "failed (HTTP 500)"
        );
    }
}
