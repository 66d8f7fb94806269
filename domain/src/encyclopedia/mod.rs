//! Encyclopedia concepts: resolved pages.

pub mod page;

pub use page::Page;
