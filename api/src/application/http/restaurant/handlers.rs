pub mod get_restaurant;
pub mod search_restaurants;
