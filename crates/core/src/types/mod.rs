//! Core types for FoodCart.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod coordinates;
pub mod id;
pub mod phone;
pub mod status;

pub use coordinates::Coordinates;
pub use id::*;
pub use phone::{PhoneNumber, PhoneNumberError};
pub use status::{OrderStatus, PayMethod};
