mod booking;
mod common;
mod property;
mod user;

pub use self::{booking::*, common::*, property::*, user::*};
