//! BookStack wire types.

mod page;

pub use page::{Page, PagePayload};
