use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("Graph request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Container element '{id}' not found in {page}")]
    ContainerNotFoundError { id: String, page: String },

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Page,
    Configuration,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RefreshError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::IoError(_)
            | Self::PatternError(_)
            | Self::ContainerNotFoundError { .. }
            | Self::RenderError { .. } => ErrorCategory::Page,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            Self::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiError(_) => ErrorSeverity::Medium,
            Self::ContainerNotFoundError { .. } | Self::RenderError { .. } => ErrorSeverity::High,
            Self::IoError(_) | Self::PatternError(_) => ErrorSeverity::Critical,
            Self::TomlError(_)
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::SerializationError(_) => ErrorSeverity::Medium,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(_) => "Could not reach the graph endpoint".to_string(),
            Self::IoError(_) => "Could not read or write the page file".to_string(),
            Self::SerializationError(_) => "Could not process the response data".to_string(),
            Self::PatternError(_) => "Internal markup pattern is invalid".to_string(),
            Self::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::InvalidConfigValueError { field, .. } => {
                format!("Configuration field '{}' has an invalid value", field)
            }
            Self::ContainerNotFoundError { id, page } => {
                format!("The page '{}' has no element with id '{}'", page, id)
            }
            Self::RenderError { message } => format!("Could not update the page: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Check that the graph server is running and the endpoint URL is correct"
                    .to_string()
            }
            Self::IoError(_) => {
                "Check that the page file exists and is writable".to_string()
            }
            Self::SerializationError(_) => {
                "Check that the endpoint returns a JSON-encoded markup string".to_string()
            }
            Self::PatternError(_) => {
                "Check the container id for characters that break the element pattern".to_string()
            }
            Self::TomlError(_) | Self::ConfigError { .. } => {
                "Review the configuration file against the documented format".to_string()
            }
            Self::InvalidConfigValueError { reason, .. } => reason.clone(),
            Self::ContainerNotFoundError { id, .. } => format!(
                "Add an element with id '{}' to the page, or point --container-id at an existing one",
                id
            ),
            Self::RenderError { .. } => {
                "Check that the container element is well-formed".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, RefreshError>;
