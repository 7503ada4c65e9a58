//! UI Components
//!
//! Leptos components for the tags page.

mod create_tag_form;
mod pagination;
mod tags_page;

pub use create_tag_form::CreateTagForm;
pub use pagination::Pagination;
pub use tags_page::TagsPage;
