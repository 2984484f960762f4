pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::ExchangeConfig,
    errors::{DecodeError, ExchangeError},
    traits::{AccountInfo, ExchangeConnector, MarketDataSource, OrderManager},
    types::*,
};
pub use exchanges::upbit::{UpbitBuilder, UpbitConnector, UpbitSigner};
