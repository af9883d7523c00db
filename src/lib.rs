//! Reading navigation for blog front ends.
//!
//! [`toc`] keeps a table of contents in sync with the scroll position,
//! [`pagination`] decides which page links a listing shows and
//! [`resize`] sizes split-view panels while a handle is dragged.

pub mod config;
pub mod markdown;
pub mod pagination;
pub mod resize;
pub mod toc;
pub mod utils;

pub use utils::error::{PagemarkError, Result};
