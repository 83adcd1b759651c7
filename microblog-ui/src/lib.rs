pub mod api;
pub mod components;
pub mod config;
pub mod error;
pub mod feed;
pub mod interop;
pub mod styles;

pub use api::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use feed::*;
pub use interop::*;
