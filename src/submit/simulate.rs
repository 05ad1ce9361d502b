use std::time::{Duration, Instant};

use crate::domain::ContactRecord;

use super::{PendingSubmit, SubmitAction};

/// Simulated submit action: resolves after a fixed delay, optionally with a
/// failure. Stands in for a real API call in the demo binary and the CLI.
#[derive(Debug, Clone)]
pub struct DelayedSubmit {
    delay: Duration,
    failure: Option<String>,
}

impl DelayedSubmit {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            failure: None,
        }
    }

    pub fn failing(delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            delay,
            failure: Some(reason.into()),
        }
    }
}

impl SubmitAction for DelayedSubmit {
    fn start(&mut self, _record: ContactRecord) -> Box<dyn PendingSubmit> {
        Box::new(DelayedPending {
            deadline: Instant::now() + self.delay,
            failure: self.failure.clone(),
        })
    }
}

struct DelayedPending {
    deadline: Instant,
    failure: Option<String>,
}

impl PendingSubmit for DelayedPending {
    fn poll(&mut self) -> Option<Result<(), String>> {
        if Instant::now() < self.deadline {
            return None;
        }
        Some(match self.failure.take() {
            Some(reason) => Err(reason),
            None => Ok(()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ContactRecord {
        ContactRecord {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            company: None,
            website: None,
            email: "jane@example.com".to_string(),
            message: "more than ten chars".to_string(),
        }
    }

    #[test]
    fn stays_unresolved_before_the_deadline() {
        let mut action = DelayedSubmit::new(Duration::from_secs(3600));
        let mut pending = action.start(record());
        assert_eq!(pending.poll(), None);
    }

    #[test]
    fn resolves_ok_after_the_deadline() {
        let mut action = DelayedSubmit::new(Duration::ZERO);
        let mut pending = action.start(record());
        assert_eq!(pending.poll(), Some(Ok(())));
    }

    #[test]
    fn failing_variant_carries_the_reason() {
        let mut action = DelayedSubmit::failing(Duration::ZERO, "boom");
        let mut pending = action.start(record());
        assert_eq!(pending.poll(), Some(Err("boom".to_string())));
    }
}
