pub mod config;
pub mod decode;
pub mod errors;
pub mod kernel;
pub mod traits;
pub mod types;
