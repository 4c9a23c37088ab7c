//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a006_delivery--detail"`)
//!   - `data-page-category` with one of the constants below

/// List of records: table with sorting and pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Read-only view of a single record with its action buttons.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Add / edit form.
pub const PAGE_CAT_FORM: &str = "form";

/// Home, login and other pages outside the entity set.
pub const PAGE_CAT_SYSTEM: &str = "system";

/// `{entity}--{category}`, e.g. `a006_delivery--list`
pub fn page_id(full_name: &str, category: &str) -> String {
    format!("{}--{}", full_name, category)
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        let id = page_id("a006_delivery", PAGE_CAT_DETAIL);
        assert_eq!(id, "a006_delivery--detail");
        assert!(is_valid_page_id(&id));
        assert!(!is_valid_page_id("a006_delivery"));
        assert!(!is_valid_page_id("--list"));
    }
}
