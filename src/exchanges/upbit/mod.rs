pub mod conversions;
pub mod signer;

pub mod builder;
pub mod connector;
pub mod rest;

// Re-export main components
pub use builder::{build_connector, UpbitBuilder};
pub use connector::{Account, MarketData, Trading, UpbitConnector};
pub use rest::UpbitRest;
pub use signer::{Claims, UpbitSigner};
