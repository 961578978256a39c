mod booking;
mod property;
mod user;

pub use self::{booking::*, property::*, user::*};
