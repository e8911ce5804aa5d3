use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    menu::{entities::ParsedMenu, value_objects::ParseMenuInput},
};

/// Service trait for menu vision parsing
#[cfg_attr(test, mockall::automock)]
pub trait MenuService: Send + Sync {
    /// Fails with `MissingConfiguration` when the vision model cannot be called.
    fn ensure_configured(&self) -> Result<(), CoreError>;

    /// Reads a menu photo into categories and items, optionally translated.
    ///
    /// Unrecoverable model output fails the whole request; no partial menu is
    /// returned.
    fn parse_menu(
        &self,
        input: ParseMenuInput,
    ) -> impl Future<Output = Result<ParsedMenu, CoreError>> + Send;
}
