//! Local HTTP server for the folio portfolio page.
//!
//! Every request is either an image asset, streamed from the base directory,
//! or a page request answered with the full portfolio document.

pub mod assets;
pub mod server;

pub use assets::{asset_response, resolve_asset, ASSET_CONTENT_TYPE, NOT_FOUND_BODY};
pub use server::{
    create_router, AppState, PortfolioServer, ServerConfig, ServerError, DEFAULT_HOST,
    DEFAULT_PORT,
};
