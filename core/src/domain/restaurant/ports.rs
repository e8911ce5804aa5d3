use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    restaurant::{
        entities::{RestaurantData, RestaurantSearchResult, YelpBusiness, YelpReview},
        value_objects::SearchRestaurantsInput,
    },
};

/// Outbound Yelp Fusion client
#[cfg_attr(test, mockall::automock)]
pub trait YelpClient: Send + Sync {
    fn search_businesses(
        &self,
        term: String,
        location: String,
        limit: u32,
    ) -> impl Future<Output = Result<RestaurantSearchResult, CoreError>> + Send;

    fn get_business(
        &self,
        business_id: String,
    ) -> impl Future<Output = Result<YelpBusiness, CoreError>> + Send;

    /// Reviews that cannot be fetched (404, network) come back as an empty list.
    fn get_reviews(
        &self,
        business_id: String,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<YelpReview>, CoreError>> + Send;
}

/// Service trait for Yelp restaurant lookups
#[cfg_attr(test, mockall::automock)]
pub trait RestaurantService: Send + Sync {
    fn search_restaurants(
        &self,
        input: SearchRestaurantsInput,
    ) -> impl Future<Output = Result<RestaurantSearchResult, CoreError>> + Send;

    fn get_restaurant(
        &self,
        business_id: String,
    ) -> impl Future<Output = Result<RestaurantData, CoreError>> + Send;
}
