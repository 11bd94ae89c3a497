use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Build, Rocket, State, catch, catchers, get, routes};
use serde::{Deserialize, Serialize};

use crate::db::Connector;
use crate::errors::ApiError;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IndexStatus {
    pub database: String,
    pub status: String,
}

#[get("/")]
pub fn index(connector: &State<Connector>) -> Json<IndexStatus> {
    Json(IndexStatus {
        database: connector.database().name().to_string(),
        status: "connected".to_string(),
    })
}

#[catch(404)]
pub fn catch404() -> ApiError {
    ApiError {
        status: Status::NotFound,
    }
}

#[catch(500)]
pub fn catch500() -> ApiError {
    ApiError {
        status: Status::InternalServerError,
    }
}

/// Builds the host with `connector` in managed state.
pub fn build(connector: Connector) -> Rocket<Build> {
    rocket::build()
        .manage(connector)
        .register("/", catchers![catch404, catch500])
        .mount("/", routes![index])
}
