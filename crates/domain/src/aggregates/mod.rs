//! Aggregate roots - domain objects that own their related data
//!
//! The item builder owns the descriptor, metadata and extension payload of
//! the item under construction.
//!
//! # Rustic DDD Principles
//!
//! | Java DDD Pattern | Rustic Equivalent |
//! |------------------|-------------------|
//! | Private fields + getters | Private fields + `#[inline]` accessors |
//! | Aggregate root guards | Ownership (borrow checker enforces) |
//! | Subclass per category | Sum type payload + typed `*_mut()` handles |
//! | Factory pattern | `::new()` / `::of()` + fluent mutators |
//! | Checked exceptions | `Result<&mut Self, DomainError>` |

mod item_builder;

pub use item_builder::ItemBuilder;
