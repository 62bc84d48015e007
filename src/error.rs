use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex '{label}' does not exist in the graph")]
    #[diagnostic(
        code(cyclegraph::vertex_not_found),
        help("Add the vertex with `add_vertex` before looking it up, or check `contains` first")
    )]
    VertexNotFound { label: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(cyclegraph::config_error),
        help("Check the values passed to the configuration builder")
    )]
    ConfigurationError { message: String },
}

impl GraphError {
    pub(crate) fn vertex_not_found(label: &impl std::fmt::Debug) -> Self {
        GraphError::VertexNotFound {
            label: format!("{label:?}"),
        }
    }

    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        GraphError::ConfigurationError {
            message: message.into(),
        }
    }
}
