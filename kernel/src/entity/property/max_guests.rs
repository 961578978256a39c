use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct MaxGuests(i32);

impl MaxGuests {
    pub fn new(max: impl Into<i32>) -> Self {
        Self(max.into())
    }
}
