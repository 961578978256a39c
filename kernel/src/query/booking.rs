use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Booking, BookingId, PropertyId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError>;

    /// Every booking of the property ordered by check-in, each one
    /// reconstructed against the ones before it.
    async fn find_by_property_id(
        &self,
        con: &mut Self::Transaction,
        property_id: &PropertyId,
    ) -> error_stack::Result<Vec<Booking>, KernelError>;
}

pub trait DependOnBookingQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingQuery: BookingQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_query(&self) -> &Self::BookingQuery;
}
