//! # Real-World Pattern Examples
//!
//! Runnable examples for two classic object-oriented design patterns,
//! reworked in idiomatic Rust:
//!
//! - **Decorator** — a [`decorator::DataSource`] producer wrapped by chained
//!   text transformations (tag stripping, a +1 character shift)
//! - **Simple Factory** — [`simple_factory::UserSimpleFactory`] mapping a
//!   string key to one of several user variants, rejecting unknown keys
//!
//! Run the decorator demo with:
//!
//! ```bash
//! cargo run --bin decorator_demo
//! ```
//!
//! The factory example has no demo binary; its entry point is
//! [`simple_factory::UserSimpleFactory::create`].

pub mod decorator;
pub mod simple_factory;
