// Lakeshore Realty - API Core
//
// Backend for the brokerage marketing site: the listing catalog, the
// side-by-side comparison state consumed by the site UI, the mortgage
// calculator math, and the voice-assistant token broker.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
pub use kernel::ServerDeps;
