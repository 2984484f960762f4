use crate::core::decode::decode_array;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::traits::OrderManager;
use crate::core::types::{Order, OrderFilter, OrderLookup, OrderWithFills};
use crate::exchanges::upbit::{conversions, rest::UpbitRest};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Upbit order queries and cancellation
#[derive(Debug)]
pub struct Trading<R: RestClient> {
    rest: UpbitRest<R>,
}

impl<R: RestClient + Clone> Trading<R> {
    pub fn new(rest: &R) -> Self {
        Self {
            rest: UpbitRest::new(rest.clone()),
        }
    }
}

#[async_trait]
impl<R: RestClient> OrderManager for Trading<R> {
    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_order(&self, lookup: &OrderLookup) -> Result<OrderWithFills, ExchangeError> {
        let response = self.rest.get_order(lookup).await?;
        Ok(conversions::decode_order_with_fills(&response)?)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn get_orders(&self, filter: &OrderFilter) -> Result<Vec<Order>, ExchangeError> {
        let response = self.rest.get_orders(filter).await?;
        let orders = decode_array(&response, "orders", conversions::decode_order)?;
        debug!(count = orders.len(), "decoded orders");
        Ok(orders)
    }

    #[instrument(skip(self), fields(exchange = "upbit"))]
    async fn cancel_order(&self, lookup: &OrderLookup) -> Result<Order, ExchangeError> {
        let response = self.rest.cancel_order(lookup).await?;
        let order = conversions::decode_order(&response)?;
        debug!(uuid = %order.uuid, state = %order.state, "order cancel accepted");
        Ok(order)
    }
}
