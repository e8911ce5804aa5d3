pub mod google_places;
pub mod llm;
pub mod yelp;
