pub mod health;
pub mod menu;
pub mod places;
pub mod restaurant;
pub mod server;
