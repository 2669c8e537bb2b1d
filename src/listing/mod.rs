//! Listing logic shared by the home page: subcategory grouping and pagination.

pub mod grouping;
pub mod pagination;

pub use grouping::{SubcategoryGroup, group_by_subcategory};
pub use pagination::{PageMarker, PageState, parse_page_param};
