pub mod common;
pub mod dishes;
pub mod llm_output;
pub mod menu;
pub mod places;
pub mod restaurant;
