pub mod config;
pub mod error;
pub mod resources;

pub use config::{merge_kwargs, Config, InitKwargs, SidecarConfig};
