use std::path::PathBuf;
use std::process::ExitCode;

use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, Responder, Response};
use serde_json::json;
use thiserror::Error;

/// Raised when the cluster cannot be reached for any reason.
///
/// Unreachable hosts, rejected credentials, DNS and TLS failures, and
/// unparseable URIs all collapse into the same kind.
#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("failed to connect to MongoDB: {0}")]
    ConnectionFailure(#[from] mongodb::error::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to load env file {path}: {source}")]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Anything that stops the process before the host launches.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Connect(#[from] ConnectError),
    #[error("failed to launch server: {0}")]
    Launch(#[from] Box<rocket::Error>),
}

impl StartupError {
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::FAILURE
    }
}

/// JSON body used by the catchers.
pub struct ApiError {
    pub status: Status,
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let message = self.status.reason().unwrap_or("Unknown error");

        let body = json!({
            "error": message,
            "status": self.status.code
        })
        .to_string();

        Response::build()
            .status(self.status)
            .header(rocket::http::ContentType::JSON)
            .sized_body(body.len(), std::io::Cursor::new(body))
            .ok()
    }
}
