use crate::{
    modules::{dish::repository::Dish, order::repository::Order},
    utils::id::IdGenerator,
};
use std::fmt;
use tokio::sync::Mutex;

const SEED_DISHES: &str = include_str!("../../../data/dishes.json");
const SEED_ORDERS: &str = include_str!("../../../data/orders.json");

/// In-memory tables. Handlers hold a table lock for the whole
/// validate-then-write sequence of a request.
pub struct Database {
    pub dishes: Mutex<Vec<Dish>>,
    pub orders: Mutex<Vec<Order>>,
    ids: Mutex<IdGenerator>,
}

#[derive(Debug)]
pub enum Error {
    InvalidSeed {
        table: &'static str,
        source: serde_json::Error,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSeed { table, source } => {
                write!(f, "Invalid seed data for {}: {}", table, source)
            }
        }
    }
}

impl std::error::Error for Error {}

impl Database {
    pub fn new() -> Self {
        Self::with_rows(vec![], vec![])
    }

    pub fn with_rows(dishes: Vec<Dish>, orders: Vec<Order>) -> Self {
        Self {
            dishes: Mutex::new(dishes),
            orders: Mutex::new(orders),
            ids: Mutex::new(IdGenerator::new()),
        }
    }

    pub fn seeded() -> Result<Self, Error> {
        let dishes = serde_json::from_str::<Vec<Dish>>(SEED_DISHES).map_err(|source| {
            Error::InvalidSeed {
                table: "dishes",
                source,
            }
        })?;
        let orders = serde_json::from_str::<Vec<Order>>(SEED_ORDERS).map_err(|source| {
            Error::InvalidSeed {
                table: "orders",
                source,
            }
        })?;

        tracing::debug!(
            "Seeded {} dishes and {} orders",
            dishes.len(),
            orders.len()
        );

        Ok(Self::with_rows(dishes, orders))
    }

    pub async fn next_id(&self, is_taken: impl Fn(&str) -> bool) -> String {
        self.ids.lock().await.next(is_taken)
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new()
    }
}
