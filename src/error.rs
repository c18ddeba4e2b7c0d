/// Errors raised while building a printing configuration or rendering a value.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid field selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("field `{selector}` is declared as `{declared}`, not `{requested}`")]
    FieldTypeMismatch {
        selector: String,
        declared: &'static str,
        requested: &'static str,
    },

    #[error("renderer for `{path}` failed: {source}")]
    Renderer {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("nesting at `{path}` exceeds the depth limit of {limit}")]
    DepthLimitExceeded { path: String, limit: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
