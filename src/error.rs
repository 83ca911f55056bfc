/// Errors that can occur while collecting input for a check.
///
/// The check itself is total and never fails; these cover the harness
/// around it.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("unknown strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("no input provided")]
    NoInput,

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
