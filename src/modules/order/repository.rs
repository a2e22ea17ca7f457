use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Lifecycle of an order. Any status may be set over any other, except that a
/// delivered order is frozen and only a pending order may be removed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn accepts_updates(&self) -> bool {
        *self != OrderStatus::Delivered
    }

    pub fn is_deletable(&self) -> bool {
        *self == OrderStatus::Pending
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        };
        f.write_str(status)
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDish {
    pub dish_id: String,
    pub quantity: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub fn find_many(orders: &[Order]) -> Vec<Order> {
    orders.to_vec()
}

pub fn find_by_id(orders: &[Order], id: &str) -> Option<Order> {
    orders.iter().find(|order| order.id == id).cloned()
}

pub fn exists(orders: &[Order], id: &str) -> bool {
    orders.iter().any(|order| order.id == id)
}

pub fn create(orders: &mut Vec<Order>, id: String, payload: CreateOrderPayload) -> Order {
    let order = Order {
        id,
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
    };

    orders.push(order.clone());
    order
}

pub fn update_by_id(orders: &mut [Order], id: &str, payload: UpdateOrderPayload) -> Option<Order> {
    let order = orders.iter_mut().find(|order| order.id == id)?;

    order.deliver_to = payload.deliver_to;
    order.mobile_number = payload.mobile_number;
    order.status = payload.status;
    order.dishes = payload.dishes;

    Some(order.clone())
}

pub fn delete_by_id(orders: &mut Vec<Order>, id: &str) -> Option<Order> {
    let index = orders.iter().position(|order| order.id == id)?;
    Some(orders.remove(index))
}

#[cfg(test)]
mod test {
    use super::*;

    fn payload(status: OrderStatus) -> CreateOrderPayload {
        CreateOrderPayload {
            deliver_to: String::from("Rome"),
            mobile_number: String::from("555"),
            status,
            dishes: vec![OrderDish {
                dish_id: String::from("d1"),
                quantity: 2,
            }],
        }
    }

    #[test]
    fn should_round_trip_status_names() {
        for status in OrderStatus::ALL {
            assert_eq!(status.to_string().parse::<OrderStatus>(), Ok(status));
        }
        assert!("cancelled".parse::<OrderStatus>().is_err());
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn should_freeze_only_delivered_orders() {
        assert!(OrderStatus::Pending.accepts_updates());
        assert!(OrderStatus::Preparing.accepts_updates());
        assert!(OrderStatus::OutForDelivery.accepts_updates());
        assert!(!OrderStatus::Delivered.accepts_updates());
    }

    #[test]
    fn should_only_delete_pending_orders() {
        let deletable = OrderStatus::ALL
            .into_iter()
            .filter(OrderStatus::is_deletable)
            .collect::<Vec<_>>();
        assert_eq!(deletable, vec![OrderStatus::Pending]);
    }

    #[test]
    fn should_serialize_in_client_format() {
        let order = Order {
            id: String::from("o1"),
            deliver_to: String::from("Rome"),
            mobile_number: String::from("555"),
            status: OrderStatus::OutForDelivery,
            dishes: vec![OrderDish {
                dish_id: String::from("d1"),
                quantity: 1,
            }],
        };

        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["deliverTo"], "Rome");
        assert_eq!(value["mobileNumber"], "555");
        assert_eq!(value["status"], "out-for-delivery");
        assert_eq!(value["dishes"][0]["dishId"], "d1");
    }

    #[test]
    fn should_remove_deleted_order() {
        let mut orders = vec![];
        create(&mut orders, String::from("a"), payload(OrderStatus::Pending));
        create(&mut orders, String::from("b"), payload(OrderStatus::Preparing));

        let removed = delete_by_id(&mut orders, "a").unwrap();
        assert_eq!(removed.id, "a");
        assert!(find_by_id(&orders, "a").is_none());
        assert_eq!(find_many(&orders).len(), 1);
        assert!(delete_by_id(&mut orders, "a").is_none());
    }
}
