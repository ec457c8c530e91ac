//! Shopping cart domain module (event-sourced).
//!
//! This crate contains business rules for the cart, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod cart;

pub use cart::{
    AddItem, Cart, CartCleared, CartCommand, CartEntry, CartEvent, CartId, ClearCart, ItemAdded,
    ItemRemoved, QuantityUpdated, RemoveItem, UpdateQuantity,
};
