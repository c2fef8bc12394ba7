//! Inventory domain module.
//!
//! A [`Warehouse`] keeps its [`Article`] records in a
//! [`DynamicSequence`](stockroom_sequence::DynamicSequence), addressed by
//! linear scan over each record's [`ItemCode`](stockroom_core::ItemCode).

pub mod article;
pub mod warehouse;

pub use article::{Article, NewArticle};
pub use warehouse::Warehouse;
