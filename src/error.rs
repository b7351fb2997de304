use thiserror::Error;

pub type ComponentResult<T> = Result<T, ComponentError>;

#[derive(Error, Debug, Clone)]
pub enum ComponentError {
    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("Missing 'component' key: a document must name the component it renders")]
    MissingComponentName,

    #[error("Unknown component '{name}'")]
    UnknownComponent { name: String },

    #[error("Empty document: no component found")]
    EmptyDocument,

    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

impl From<serde_yaml::Error> for ComponentError {
    fn from(err: serde_yaml::Error) -> Self {
        ComponentError::Yaml(err.to_string())
    }
}
