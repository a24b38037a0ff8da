//! Orders Repository

use std::{collections::BTreeMap, sync::RwLock};

use mockall::automock;

use crate::domain::orders::{
    errors::OrdersRepositoryError,
    models::{NewOrder, Order, OrderId},
};

#[automock]
pub trait OrdersRepository: Send + Sync {
    /// Records a new order.
    fn save_order(&self, order: NewOrder) -> Result<Order, OrdersRepositoryError>;

    /// Retrieve a single order.
    fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrdersRepositoryError>;

    /// Retrieves all orders, oldest first.
    fn get_orders(&self) -> Result<Vec<Order>, OrdersRepositoryError>;
}

#[derive(Debug, Default)]
struct OrderBook {
    orders: BTreeMap<OrderId, Order>,
    last_id: u64,
}

/// Orders held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryOrdersRepository {
    state: RwLock<OrderBook>,
}

impl InMemoryOrdersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrdersRepository for InMemoryOrdersRepository {
    fn save_order(&self, order: NewOrder) -> Result<Order, OrdersRepositoryError> {
        let mut state = self.state.write()?;

        state.last_id += 1;

        let saved = order.with_id(OrderId::new(state.last_id));

        state.orders.insert(saved.id, saved.clone());

        Ok(saved)
    }

    fn get_order(&self, id: OrderId) -> Result<Option<Order>, OrdersRepositoryError> {
        Ok(self.state.read()?.orders.get(&id).cloned())
    }

    fn get_orders(&self) -> Result<Vec<Order>, OrdersRepositoryError> {
        Ok(self.state.read()?.orders.values().cloned().collect())
    }
}
