use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Property;
use crate::KernelError;

#[async_trait::async_trait]
pub trait PropertyModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        property: &Property,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnPropertyModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type PropertyModifier: PropertyModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn property_modifier(&self) -> &Self::PropertyModifier;
}
