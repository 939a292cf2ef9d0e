//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a001_product--list"`) and a `data-page-category` taken from below.
//! Copying the id from the DOM inspector into an IDE search lands in the
//! matching `domain/` directory.

/// List of records with its inline form.
pub const PAGE_CAT_LIST: &str = "list";

/// Free-form page (landing, not-found).
pub const PAGE_CAT_CUSTOM: &str = "custom";
