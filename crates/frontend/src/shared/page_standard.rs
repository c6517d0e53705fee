//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"u001_place_order--usecase"`) and a `data-page-category` with one
//! of the constants below.

/// Use-case action page.
pub const PAGE_CAT_USECASE: &str = "usecase";

/// System page (session, configuration).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    matches!(id.split_once("--"), Some((entity, cat)) if !entity.is_empty() && !cat.is_empty())
}
