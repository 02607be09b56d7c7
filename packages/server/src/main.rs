#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Klima Insights API server binary.

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    klima_server::run_server().await
}
