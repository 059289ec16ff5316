pub mod config_store;
pub mod display;
pub mod renderer;

pub use config_store::{ConfigStore, ConfigStoreError};
pub use display::{DisplayHost, DisplaySurface};
pub use renderer::Renderer;
