use scriptdefs_core::DataType;

/// Errors that abort a whole emission pass.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    /// A record or include file has an empty name. For parameters the
    /// container is `CONTAINER.Function`.
    #[error("{container}: {what} #{index} has no name")]
    MissingName {
        container: String,
        what: &'static str,
        index: usize,
    },

    /// Strict mode: a value had to be emitted through the fallback rule.
    #[error("{container}: cannot emit `{value}` as {datatype} (in `{record}`)")]
    Fallback {
        container: String,
        record: String,
        datatype: DataType,
        value: String,
    },
}
