use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct GuestCount(i32);

impl GuestCount {
    pub fn new(count: impl Into<i32>) -> Self {
        Self(count.into())
    }
}
