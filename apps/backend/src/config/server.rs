use std::env;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;

/// Bind address from `BACKEND_HOST` / `BACKEND_PORT`.
pub fn bind_addr() -> Result<(String, u16), AppError> {
    let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port = match env::var("BACKEND_PORT") {
        Ok(raw) => raw
            .trim()
            .parse::<u16>()
            .map_err(|_| AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'")))?,
        Err(_) => DEFAULT_PORT,
    };
    Ok((host, port))
}
