use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub image_url: String,
}

pub fn find_many(dishes: &[Dish]) -> Vec<Dish> {
    dishes.to_vec()
}

pub fn find_by_id(dishes: &[Dish], id: &str) -> Option<Dish> {
    dishes.iter().find(|dish| dish.id == id).cloned()
}

pub fn exists(dishes: &[Dish], id: &str) -> bool {
    dishes.iter().any(|dish| dish.id == id)
}

pub fn create(dishes: &mut Vec<Dish>, id: String, payload: CreateDishPayload) -> Dish {
    let dish = Dish {
        id,
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    dishes.push(dish.clone());
    dish
}

pub fn update_by_id(dishes: &mut [Dish], id: &str, payload: UpdateDishPayload) -> Option<Dish> {
    let dish = dishes.iter_mut().find(|dish| dish.id == id)?;

    dish.name = payload.name;
    dish.description = payload.description;
    dish.price = payload.price;
    dish.image_url = payload.image_url;

    Some(dish.clone())
}
