//! Error type shared by every file operation in the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::template::TemplateError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not determine home directory")]
    HomeDirNotFound,

    /// Stat failed for a reason other than the entry being absent.
    #[error("could not determine if {} exists", path.display())]
    Stat { path: PathBuf, source: io::Error },

    #[error("failed to create directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read {}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("failed to (de)serialize JSON at {}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Expected on first run, before anything has been cached.
    #[error("no client information exists at {}", .0.display())]
    NotFound(PathBuf),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("credential response is missing {0}")]
    MissingField(&'static str),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
