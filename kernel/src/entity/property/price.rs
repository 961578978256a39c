use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PricePerNight(f64);

impl PricePerNight {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }
}
