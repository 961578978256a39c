pub use crate::error::*;

mod cancellation;
mod database;
mod entity;
mod error;
mod mapper;
mod modify;
mod query;
mod record;
mod validation;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
    pub mod policy {
        pub use crate::cancellation::*;
    }
    pub mod validation {
        pub use crate::validation::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod database {
        pub use crate::database::*;
    }
    pub mod mapper {
        pub use crate::mapper::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod record {
        pub use crate::record::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
