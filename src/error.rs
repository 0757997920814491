use std::{error, fmt, path::PathBuf};

#[derive(Debug, derive_more::From)]
pub enum ZError {
    SceneError(zscene::Error),
    RonDeserializeError {
        error: ron::de::Error,
        path: PathBuf,
    },
    MqFileError(mq::file::FileError),

    #[from(ignore)]
    ActorNotFound {
        name: String,
    },

    #[from(ignore)]
    InvalidConfig {
        path: PathBuf,
        field: &'static str,
        reason: &'static str,
    },
}

impl ZError {
    pub fn from_ron_de_error(error: ron::de::Error, path: PathBuf) -> Self {
        ZError::RonDeserializeError { error, path }
    }

    pub fn invalid_config(path: PathBuf, field: &'static str, reason: &'static str) -> Self {
        ZError::InvalidConfig {
            path,
            field,
            reason,
        }
    }

    pub fn actor_not_found(name: &str) -> Self {
        ZError::ActorNotFound { name: name.into() }
    }
}

impl fmt::Display for ZError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZError::SceneError(ref e) => write!(f, "ZScene Error: {}", e),
            ZError::RonDeserializeError { error, path } => {
                let s = path.to_str().unwrap_or("<no path>");
                write!(f, "Can't deserialize '{}': {}", s, error)
            }
            ZError::MqFileError(ref e) => write!(f, "Macroquad File error: {}", e),
            ZError::ActorNotFound { name } => write!(f, "No actor named '{}' in the scene", name),
            ZError::InvalidConfig {
                path,
                field,
                reason,
            } => {
                let s = path.to_str().unwrap_or("<no path>");
                write!(f, "Bad '{}' in '{}': {}", field, s, reason)
            }
        }
    }
}

impl error::Error for ZError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ZError::SceneError(ref e) => Some(e),
            ZError::RonDeserializeError { error, .. } => Some(error),
            ZError::MqFileError(ref e) => Some(e),
            ZError::ActorNotFound { .. } => None,
            ZError::InvalidConfig { .. } => None,
        }
    }
}
