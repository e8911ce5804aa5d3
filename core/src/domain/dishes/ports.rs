use std::future::Future;

use crate::domain::dishes::entities::PopularDish;

/// Service trait for popular dish extraction
#[cfg_attr(test, mockall::automock)]
pub trait DishService: Send + Sync {
    /// Extracts dish mentions from review texts and returns the `top_n` most
    /// mentioned. Never fails: model or parse failures yield an empty list.
    fn extract_popular_dishes(
        &self,
        review_texts: Vec<String>,
        top_n: usize,
    ) -> impl Future<Output = Vec<PopularDish>> + Send;

    fn match_dish_to_menu(
        &self,
        dish_name: &str,
        menu_item_names: &[String],
        threshold: f64,
    ) -> Option<String>;
}
