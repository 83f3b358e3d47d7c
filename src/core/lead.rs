//! Email capture
//!
//! The contact form collects an email address, but where it goes (CRM, form
//! backend, mailing list) is not decided yet. Submissions flow through the
//! `LeadSink` trait; the only sink shipped drops them.

use serde::{Deserialize, Serialize};

/// One email-capture submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRequest {
    pub email: String,
    /// Page variant the visitor saw
    pub variant: String,
}

/// What happened to a submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadOutcome {
    Accepted,
    /// No destination is wired; the submission was dropped
    Ignored,
}

#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    #[error("lead destination rejected the submission: {0}")]
    Rejected(String),

    #[error("lead destination unreachable: {0}")]
    Unreachable(String),
}

/// Destination for email-capture submissions
pub trait LeadSink: Send + Sync {
    fn submit(&self, request: &LeadRequest) -> Result<LeadOutcome, LeadError>;
}

/// Sink used until a real destination exists
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopLeadSink;

impl LeadSink for NoopLeadSink {
    fn submit(&self, request: &LeadRequest) -> Result<LeadOutcome, LeadError> {
        leptos::logging::log!(
            "lead capture not wired, dropping submission from variant {}",
            request.variant
        );
        Ok(LeadOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingSink(Mutex<Vec<LeadRequest>>);

    impl LeadSink for RecordingSink {
        fn submit(&self, request: &LeadRequest) -> Result<LeadOutcome, LeadError> {
            self.0.lock().unwrap().push(request.clone());
            Ok(LeadOutcome::Accepted)
        }
    }

    fn request() -> LeadRequest {
        LeadRequest {
            email: "someone@example.com".to_string(),
            variant: "pinky".to_string(),
        }
    }

    #[test]
    fn test_noop_sink_ignores_everything() {
        let sink = NoopLeadSink;
        assert_eq!(sink.submit(&request()).unwrap(), LeadOutcome::Ignored);

        // nothing is validated either
        let empty = LeadRequest {
            email: String::new(),
            variant: "pinky".to_string(),
        };
        assert_eq!(sink.submit(&empty).unwrap(), LeadOutcome::Ignored);
    }

    #[test]
    fn test_sink_trait_object() {
        let sink: Box<dyn LeadSink> = Box::new(RecordingSink(Mutex::new(Vec::new())));
        assert_eq!(sink.submit(&request()).unwrap(), LeadOutcome::Accepted);
    }

    #[test]
    fn test_error_messages() {
        let err = LeadError::Rejected("quota".to_string());
        assert_eq!(
            err.to_string(),
            "lead destination rejected the submission: quota"
        );
    }
}
