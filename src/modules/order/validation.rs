use super::repository::{CreateOrderPayload, Order, OrderDish, OrderStatus, UpdateOrderPayload};
use crate::utils::validation::{self, Step};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Order fields as sent by the client. Fields stay untyped so that a value
/// of the wrong JSON type (a string for `dishes`, a number for `deliverTo`,
/// a line item that is not an object) is reported by the checks below.
#[derive(Deserialize, Default, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct OrderData {
    pub id: Option<Value>,
    pub deliver_to: Option<Value>,
    pub mobile_number: Option<Value>,
    pub status: Option<Value>,
    pub dishes: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingField(&'static str),
    NoDishes,
    InvalidDishQuantity(usize),
    InvalidStatus,
    ImmutableState,
    IdMismatch { id: String, route_id: String },
    InvalidState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Order must include a {}", field),
            Self::NoDishes => write!(f, "Order must include at least one dish"),
            Self::InvalidDishQuantity(index) => write!(
                f,
                "Dish {} must have a quantity that is an integer greater than 0",
                index
            ),
            Self::InvalidStatus => {
                let statuses = OrderStatus::ALL
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Order must have a status of {}", statuses)
            }
            Self::ImmutableState => write!(f, "A delivered order cannot be changed"),
            Self::IdMismatch { id, route_id } => write!(
                f,
                "Order id does not match route id. Order: {}, Route: {}.",
                id, route_id
            ),
            Self::InvalidState => write!(f, "An order cannot be deleted unless it is pending"),
        }
    }
}

fn has_deliver_to(data: &OrderData) -> Result<(), Error> {
    validation::has_text(&data.deliver_to)
        .then_some(())
        .ok_or(Error::MissingField("deliverTo"))
}

fn has_mobile_number(data: &OrderData) -> Result<(), Error> {
    validation::has_text(&data.mobile_number)
        .then_some(())
        .ok_or(Error::MissingField("mobileNumber"))
}

fn has_dishes(data: &OrderData) -> Result<(), Error> {
    match data.dishes {
        None | Some(Value::Null) => Err(Error::MissingField("dish")),
        Some(_) => Ok(()),
    }
}

fn has_at_least_one_dish(data: &OrderData) -> Result<(), Error> {
    match &data.dishes {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(dishes)) if !dishes.is_empty() => Ok(()),
        Some(_) => Err(Error::NoDishes),
    }
}

fn quantities_are_valid(data: &OrderData) -> Result<(), Error> {
    let dishes = lines(data);

    match dishes.iter().position(|dish| quantity(dish).is_none()) {
        Some(index) => Err(Error::InvalidDishQuantity(index)),
        None => Ok(()),
    }
}

fn status_is_valid(data: &OrderData) -> Result<(), Error> {
    match validation::text(&data.status).map(str::parse::<OrderStatus>) {
        Some(Ok(_)) => Ok(()),
        _ => Err(Error::InvalidStatus),
    }
}

// Creation may leave the status out (the order starts pending).
fn status_is_valid_if_present(data: &OrderData) -> Result<(), Error> {
    match &data.status {
        None | Some(Value::Null) => Ok(()),
        Some(Value::String(status)) if status.is_empty() => Ok(()),
        Some(_) => status_is_valid(data),
    }
}

pub const CREATE_CHECKS: &[Step<OrderData, Error>] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    has_at_least_one_dish,
    quantities_are_valid,
    status_is_valid_if_present,
];

pub const UPDATE_CHECKS: &[Step<OrderData, Error>] = &[
    has_deliver_to,
    has_mobile_number,
    has_dishes,
    has_at_least_one_dish,
    quantities_are_valid,
    status_is_valid,
];

/// Checked against the stored order, whatever status the update carries.
pub fn accepts_updates(current: &Order) -> Result<(), Error> {
    current
        .status
        .accepts_updates()
        .then_some(())
        .ok_or(Error::ImmutableState)
}

pub fn is_deletable(current: &Order) -> Result<(), Error> {
    current
        .status
        .is_deletable()
        .then_some(())
        .ok_or(Error::InvalidState)
}

pub fn id_matches_route(data: &OrderData, route_id: &str) -> Result<(), Error> {
    match validation::supplied_id(&data.id) {
        Some(id) if id != route_id => Err(Error::IdMismatch {
            id,
            route_id: route_id.to_string(),
        }),
        _ => Ok(()),
    }
}

fn lines(data: &OrderData) -> &[Value] {
    data.dishes
        .as_ref()
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn quantity(dish: &Value) -> Option<u64> {
    dish.get("quantity").and_then(validation::positive_integer)
}

// A non-string dish id is kept in its JSON form.
fn dish_id(dish: &Value) -> String {
    match dish.get("dishId") {
        Some(Value::String(id)) => id.clone(),
        None | Some(Value::Null) => String::new(),
        Some(other) => other.to_string(),
    }
}

fn status(data: &OrderData) -> OrderStatus {
    validation::text(&data.status)
        .and_then(|status| status.parse().ok())
        .unwrap_or_default()
}

fn dishes(data: &OrderData) -> Vec<OrderDish> {
    lines(data)
        .iter()
        .map(|dish| OrderDish {
            dish_id: dish_id(dish),
            quantity: quantity(dish).unwrap_or_default(),
        })
        .collect()
}

fn text(value: &Option<Value>) -> String {
    validation::text(value).unwrap_or_default().to_string()
}

impl From<OrderData> for CreateOrderPayload {
    fn from(data: OrderData) -> Self {
        Self {
            status: status(&data),
            deliver_to: text(&data.deliver_to),
            mobile_number: text(&data.mobile_number),
            dishes: dishes(&data),
        }
    }
}

impl From<OrderData> for UpdateOrderPayload {
    fn from(data: OrderData) -> Self {
        Self {
            status: status(&data),
            deliver_to: text(&data.deliver_to),
            mobile_number: text(&data.mobile_number),
            dishes: dishes(&data),
        }
    }
}
