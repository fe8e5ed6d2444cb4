pub mod config;
pub mod models;
pub mod token;

mod memory;
pub use memory::MemoryTokenStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalTokenStore;

pub use config::ClientConfig;
pub use models::{Activity, ActivityBook, ActivityDetails};
pub use token::TokenStore;
