use super::repository::{CreateDishPayload, UpdateDishPayload};
use crate::utils::validation::{self, Step};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Dish fields as sent by the client. Fields stay untyped so that a value of
/// the wrong JSON type is reported by the checks below, never by decoding.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct DishData {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub description: Option<Value>,
    pub price: Option<Value>,
    pub image_url: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MissingField(&'static str),
    InvalidPrice,
    IdMismatch { id: String, route_id: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField(field) => write!(f, "Dish must include a {}", field),
            Self::InvalidPrice => {
                write!(f, "Dish must have a price that is an integer greater than 0")
            }
            Self::IdMismatch { id, route_id } => write!(
                f,
                "Dish id does not match route id. Dish: {}, Route: {}",
                id, route_id
            ),
        }
    }
}

fn has_name(data: &DishData) -> Result<(), Error> {
    validation::has_text(&data.name)
        .then_some(())
        .ok_or(Error::MissingField("name"))
}

fn has_description(data: &DishData) -> Result<(), Error> {
    validation::has_text(&data.description)
        .then_some(())
        .ok_or(Error::MissingField("description"))
}

fn has_price(data: &DishData) -> Result<(), Error> {
    match data.price {
        None | Some(Value::Null) => Err(Error::MissingField("price")),
        Some(_) => Ok(()),
    }
}

fn has_image_url(data: &DishData) -> Result<(), Error> {
    validation::has_text(&data.image_url)
        .then_some(())
        .ok_or(Error::MissingField("image_url"))
}

fn price_is_valid(data: &DishData) -> Result<(), Error> {
    price(data).map(|_| ()).ok_or(Error::InvalidPrice)
}

/// Field checks shared by create and update, in reporting order.
pub const FIELD_CHECKS: &[Step<DishData, Error>] = &[
    has_name,
    has_description,
    has_price,
    has_image_url,
    price_is_valid,
];

/// A body id is optional; when present (and non-empty) it must name the route's dish.
pub fn id_matches_route(data: &DishData, route_id: &str) -> Result<(), Error> {
    match validation::supplied_id(&data.id) {
        Some(id) if id != route_id => Err(Error::IdMismatch {
            id,
            route_id: route_id.to_string(),
        }),
        _ => Ok(()),
    }
}

fn price(data: &DishData) -> Option<u64> {
    data.price.as_ref().and_then(validation::positive_integer)
}

fn text(value: &Option<Value>) -> String {
    validation::text(value).unwrap_or_default().to_string()
}

impl From<DishData> for CreateDishPayload {
    fn from(data: DishData) -> Self {
        Self {
            price: price(&data).unwrap_or_default(),
            name: text(&data.name),
            description: text(&data.description),
            image_url: text(&data.image_url),
        }
    }
}

impl From<DishData> for UpdateDishPayload {
    fn from(data: DishData) -> Self {
        Self {
            price: price(&data).unwrap_or_default(),
            name: text(&data.name),
            description: text(&data.description),
            image_url: text(&data.image_url),
        }
    }
}
