use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Fromln, AsRefln, Serialize, Deserialize)]
pub struct TotalPrice(f64);

impl TotalPrice {
    pub fn new(price: impl Into<f64>) -> Self {
        Self(price.into())
    }
}
