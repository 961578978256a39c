use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Booking;
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookingModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError>;
    /// Persists price and status; the stay itself never changes.
    async fn update(
        &self,
        con: &mut Self::Transaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookingModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type BookingModifier: BookingModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn booking_modifier(&self) -> &Self::BookingModifier;
}
