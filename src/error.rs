use thiserror::Error;

/// Failures that are not constraint violations.
///
/// The runner never hands these to callers; they are logged and collapsed
/// into the generic `form` error.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("{form} input does not match the expected shape")]
    MalformedInput {
        form: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub type SchemaResult<T> = Result<T, SchemaError>;
