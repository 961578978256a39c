use std::ops::{Deref, DerefMut};

use error_stack::Report;
use sqlx::migrate::MigrateError;
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{DependOnBookingQuery, DependOnPropertyQuery, DependOnUserQuery};
use kernel::interface::update::{
    DependOnBookingModifier, DependOnPropertyModifier, DependOnUserModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{booking::*, property::*, user::*};

mod booking;
mod property;
mod user;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
    property_repository: PostgresPropertyRepository,
    user_repository: PostgresUserRepository,
    booking_repository: PostgresBookingRepository,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .convert_error()?;
        tracing::info!("connected to postgres and applied migrations");
        Ok(Self {
            pool,
            property_repository: PostgresPropertyRepository,
            user_repository: PostgresUserRepository,
            booking_repository: PostgresBookingRepository,
        })
    }
}

/// Every repository call of a service runs inside one of these.
pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;

    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl DependOnPropertyQuery for PostgresDatabase {
    type PropertyQuery = PostgresPropertyRepository;
    fn property_query(&self) -> &Self::PropertyQuery {
        &self.property_repository
    }
}

impl DependOnPropertyModifier for PostgresDatabase {
    type PropertyModifier = PostgresPropertyRepository;
    fn property_modifier(&self) -> &Self::PropertyModifier {
        &self.property_repository
    }
}

impl DependOnUserQuery for PostgresDatabase {
    type UserQuery = PostgresUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &self.user_repository
    }
}

impl DependOnUserModifier for PostgresDatabase {
    type UserModifier = PostgresUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &self.user_repository
    }
}

impl DependOnBookingQuery for PostgresDatabase {
    type BookingQuery = PostgresBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &self.booking_repository
    }
}

impl DependOnBookingModifier for PostgresDatabase {
    type BookingModifier = PostgresBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &self.booking_repository
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

impl<T> ConvertError for Result<T, MigrateError> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| Report::from(error).change_context(KernelError::Internal))
    }
}
