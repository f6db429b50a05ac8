use std::env;

use crate::error::AppError;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://mancala.db?mode=rwc";

/// Backend family, derived from the connection URL scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Sqlite,
    Postgres,
}

impl DbKind {
    pub fn from_url(url: &str) -> Result<DbKind, AppError> {
        if url.starts_with("sqlite:") {
            Ok(DbKind::Sqlite)
        } else if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            Ok(DbKind::Postgres)
        } else {
            Err(AppError::config(format!(
                "Unsupported DATABASE_URL scheme: '{}'",
                redact(url)
            )))
        }
    }
}

/// `DATABASE_URL`, falling back to a local SQLite file.
pub fn db_url() -> Result<String, AppError> {
    match env::var("DATABASE_URL") {
        Ok(url) if url.trim().is_empty() => {
            Err(AppError::config("DATABASE_URL is set but empty"))
        }
        Ok(url) => Ok(url),
        Err(env::VarError::NotPresent) => Ok(DEFAULT_DATABASE_URL.to_string()),
        Err(e) => Err(AppError::config(format!("DATABASE_URL is unreadable: {e}"))),
    }
}

/// In-memory SQLite gives every pooled connection its own database.
pub fn is_memory(url: &str) -> bool {
    url.starts_with("sqlite:") && url.contains(":memory:")
}

/// Drop credentials before a URL reaches logs or error details.
pub fn redact(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***{}", &url[..scheme_end], &url[at..])
        }
        _ => url.to_string(),
    }
}
