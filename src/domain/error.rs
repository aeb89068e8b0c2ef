// ============================================================
// Layer 3 — Helper Errors
// ============================================================
// Every helper in this crate fails synchronously with one of
// these variants. Nothing is retried; callers decide what to do.
//
// The variants fall into four broad kinds so callers (and tests)
// can react to the class of failure rather than the message:
//
//   Argument   — a parameter is out of its allowed range
//   Value      — a name or symbol is not one we recognise
//   Runtime    — the request cannot be satisfied in this process
//   Arithmetic — the computation itself is undefined

/// Broad classification of a [`UtilsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Argument,
    Value,
    Runtime,
    Arithmetic,
}

/// Errors raised by the data, metrics and lookup helpers.
#[derive(Debug, thiserror::Error)]
pub enum UtilsError {
    #[error("invalid proportions: dev={dev}, test={test} (each must be in [0, 1) and sum below 1)")]
    InvalidProportion { dev: f64, test: f64 },

    #[error("cannot compute origin percentages of an empty generated set")]
    EmptyGenerated,

    #[error("unknown recurrent cell '{0}' (expected one of: rnn, lstm, gru)")]
    UnknownRnnKind(String),

    #[error("device '{0}' was requested but no accelerator is available")]
    DeviceUnavailable(String),

    #[error("unknown device '{0}' (expected cpu or cuda)")]
    UnknownDevice(String),

    #[error("language model contract violated: {0}")]
    ModelContract(String),

    #[error("phoneme '{0}' is not in the vocabulary")]
    UnknownPhoneme(String),
}

impl UtilsError {
    /// The broad kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            UtilsError::InvalidProportion { .. } => ErrorKind::Argument,
            UtilsError::EmptyGenerated           => ErrorKind::Arithmetic,
            UtilsError::UnknownRnnKind(_)        => ErrorKind::Value,
            UtilsError::DeviceUnavailable(_)     => ErrorKind::Value,
            UtilsError::UnknownDevice(_)         => ErrorKind::Runtime,
            UtilsError::ModelContract(_)         => ErrorKind::Runtime,
            UtilsError::UnknownPhoneme(_)        => ErrorKind::Value,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(UtilsError::EmptyGenerated.kind(), ErrorKind::Arithmetic);
        assert_eq!(UtilsError::UnknownDevice("tpu".into()).kind(), ErrorKind::Runtime);
        assert_eq!(UtilsError::DeviceUnavailable("cuda".into()).kind(), ErrorKind::Value);
        assert_eq!(
            UtilsError::InvalidProportion { dev: 0.6, test: 0.5 }.kind(),
            ErrorKind::Argument
        );
    }

    #[test]
    fn test_message_names_the_input() {
        let msg = UtilsError::UnknownRnnKind("frank zappa".into()).to_string();
        assert!(msg.contains("frank zappa"));
    }
}
