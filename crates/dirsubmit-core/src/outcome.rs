use serde::ser::{Serialize, SerializeStruct, Serializer};

/// What is left for the human once a form has been filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Fields filled, the final submit click is left to a person
    ManualSubmit,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ManualSubmit => "manual-submit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    LoginRequired,
    Error(String),
}

impl FailureReason {
    pub fn as_str(&self) -> &str {
        match self {
            FailureReason::LoginRequired => "login-required",
            FailureReason::Error(message) => message,
        }
    }
}

/// Result of one submission procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Filled { action: Action },
    Failed { reason: FailureReason },
}

impl SubmissionOutcome {
    pub fn manual_submit() -> Self {
        SubmissionOutcome::Filled {
            action: Action::ManualSubmit,
        }
    }

    pub fn login_required() -> Self {
        SubmissionOutcome::Failed {
            reason: FailureReason::LoginRequired,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        SubmissionOutcome::Failed {
            reason: FailureReason::Error(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Filled { .. })
    }

    /// `manual-submit` on success, the failure reason otherwise
    pub fn detail(&self) -> &str {
        match self {
            SubmissionOutcome::Filled { action } => action.as_str(),
            SubmissionOutcome::Failed { reason } => reason.as_str(),
        }
    }
}

/// One directory's entry in a run summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub directory: String,
    pub outcome: SubmissionOutcome,
}

impl SubmissionResult {
    pub fn new(directory: impl Into<String>, outcome: SubmissionOutcome) -> Self {
        Self {
            directory: directory.into(),
            outcome,
        }
    }

    pub fn success(&self) -> bool {
        self.outcome.is_success()
    }
}

impl Serialize for SubmissionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SubmissionResult", 3)?;
        state.serialize_field("directory", &self.directory)?;
        state.serialize_field("success", &self.outcome.is_success())?;
        match &self.outcome {
            SubmissionOutcome::Filled { action } => {
                state.serialize_field("action", action.as_str())?;
            }
            SubmissionOutcome::Failed { reason } => {
                state.serialize_field("reason", reason.as_str())?;
            }
        }
        state.end()
    }
}
