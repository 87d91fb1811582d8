#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bot;
#[cfg(feature = "std")]
mod client;
mod common;
mod config;
mod game;
mod hashed;
mod hero;
#[cfg(feature = "std")]
mod logging;
mod position;
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
mod state;
mod tiles;
#[cfg(feature = "std")]
pub mod transport;

pub use bot::*;
#[cfg(feature = "std")]
pub use client::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use hashed::*;
pub use hero::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use position::*;
#[cfg(feature = "std")]
pub use protocol::*;
pub use state::*;
pub use tiles::*;
#[cfg(feature = "std")]
pub use transport::http::HttpTransport;
#[cfg(feature = "std")]
pub use transport::local::LocalTransport;
#[cfg(feature = "std")]
pub use transport::Transport;
