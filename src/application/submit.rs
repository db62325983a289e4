//! Submission state machine and the backend seam. The shipped backend
//! only simulates processing; a real HTTP backend can implement
//! [`Backend`] without touching the modal's state handling.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use gloo_console::log;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// A new attempt is allowed from any settled state; a second submit
    /// while one is in flight is ignored.
    pub fn can_begin(self) -> bool {
        !matches!(self, SubmissionState::Submitting)
    }
}

/// The collected application, as it would be posted to a real backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ApplicationData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub mode: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    Rejected,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Rejected => write!(f, "application was not accepted"),
        }
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

pub trait Backend {
    fn submit(&self, data: ApplicationData) -> SubmitFuture;
}

/// Shared backend reference usable as a component prop.
#[derive(Clone)]
pub struct BackendHandle(pub std::rc::Rc<dyn Backend>);

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        std::rc::Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Fixed-delay stand-in for the eventual application service.
pub struct SimulatedBackend {
    pub delay_ms: u32,
    pub fail: bool,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self {
            delay_ms: config::submit_delay_ms(),
            fail: false,
        }
    }
}

impl Backend for SimulatedBackend {
    fn submit(&self, data: ApplicationData) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        let fail = self.fail;
        Box::pin(async move {
            log!(
                "simulated submit:",
                serde_json::to_string(&data).unwrap_or_default()
            );
            TimeoutFuture::new(delay_ms).await;
            if fail {
                Err(SubmitError::Rejected)
            } else {
                Ok(())
            }
        })
    }
}

/// Ties an in-flight submission to the modal session that started it.
/// Closing the modal invalidates the session, so a request that resolves
/// afterwards is dropped silently instead of notifying into a dialog the
/// visitor already dismissed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    generation: u32,
}

impl Session {
    pub fn token(&self) -> u32 {
        self.generation
    }

    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    pub fn accepts(&self, token: u32) -> bool {
        self.generation == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_an_inflight_submission_blocks_a_new_one() {
        assert!(SubmissionState::Idle.can_begin());
        assert!(SubmissionState::Succeeded.can_begin());
        assert!(SubmissionState::Failed.can_begin());
        assert!(!SubmissionState::Submitting.can_begin());
    }

    #[test]
    fn session_accepts_only_its_own_token() {
        let mut session = Session::default();
        let token = session.token();
        assert!(session.accepts(token));

        session.invalidate();
        assert!(!session.accepts(token));
        assert!(session.accepts(session.token()));
    }

    #[test]
    fn stale_token_stays_stale_across_sessions() {
        let mut session = Session::default();
        let token = session.token();
        session.invalidate();
        session.invalidate();
        assert!(!session.accepts(token));
    }
}
