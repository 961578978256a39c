use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::mapper::{BookingMapper, PropertyMapper, UserMapper};
use kernel::interface::query::{
    BookingQuery, DependOnBookingQuery, DependOnPropertyQuery, DependOnUserQuery, PropertyQuery,
    UserQuery,
};
use kernel::interface::record::{BookingRecord, PropertyRecord, UserRecord};
use kernel::interface::update::{
    BookingModifier, DependOnBookingModifier, DependOnPropertyModifier, DependOnUserModifier,
    PropertyModifier, UserModifier,
};
use kernel::prelude::entity::{
    Booking, BookingId, BookingStatus, Property, PropertyId, User, UserId,
};
use kernel::KernelError;

#[derive(Debug, Clone, Default)]
pub(crate) struct MockState {
    pub properties: HashMap<String, PropertyRecord>,
    pub users: HashMap<String, UserRecord>,
    pub bookings: HashMap<String, BookingRecord>,
}

/// In-memory store whose transactions work on a copy of the state until
/// they are committed.
#[derive(Default)]
pub(crate) struct MockDatabase {
    state: Arc<Mutex<MockState>>,
    property_repository: MockPropertyRepository,
    user_repository: MockUserRepository,
    booking_repository: MockBookingRepository,
}

impl MockDatabase {
    pub fn snapshot(&self) -> MockState {
        lock(&self.state).clone()
    }
}

fn lock(state: &Mutex<MockState>) -> std::sync::MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub(crate) struct MockTransaction {
    shared: Arc<Mutex<MockState>>,
    working: MockState,
}

#[async_trait::async_trait]
impl DatabaseConnection for MockDatabase {
    type Transaction = MockTransaction;

    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let working = lock(&self.state).clone();
        Ok(MockTransaction {
            shared: Arc::clone(&self.state),
            working,
        })
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        *lock(&self.shared) = self.working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockPropertyRepository;

#[async_trait::async_trait]
impl PropertyQuery for MockPropertyRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &PropertyId,
    ) -> error_stack::Result<Option<Property>, KernelError> {
        con.working
            .properties
            .get::<String>(id.as_ref())
            .cloned()
            .map(PropertyMapper::to_domain)
            .transpose()
    }
}

#[async_trait::async_trait]
impl PropertyModifier for MockPropertyRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        let record = PropertyMapper::to_persistence(property);
        con.working.properties.insert(record.id.clone(), record);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockUserRepository;

#[async_trait::async_trait]
impl UserQuery for MockUserRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        con.working
            .users
            .get::<String>(id.as_ref())
            .cloned()
            .map(UserMapper::to_domain)
            .transpose()
    }
}

#[async_trait::async_trait]
impl UserModifier for MockUserRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        let record = UserMapper::to_persistence(user);
        con.working.users.insert(record.id.clone(), record);
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct MockBookingRepository;

#[async_trait::async_trait]
impl BookingQuery for MockBookingRepository {
    type Transaction = MockTransaction;

    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &BookingId,
    ) -> error_stack::Result<Option<Booking>, KernelError> {
        con.working
            .bookings
            .get::<String>(id.as_ref())
            .cloned()
            .map(|record| BookingMapper::to_domain(record, None))
            .transpose()
    }

    async fn find_by_property_id(
        &self,
        con: &mut MockTransaction,
        property_id: &PropertyId,
    ) -> error_stack::Result<Vec<Booking>, KernelError> {
        let key: &String = property_id.as_ref();
        let Some(property) = con.working.properties.get(key).cloned() else {
            return Ok(Vec::new());
        };
        let mut records = con
            .working
            .bookings
            .values()
            .filter(|record| &record.property.id == key)
            .cloned()
            .collect::<Vec<_>>();
        records.sort_by_key(|record| record.start_date);

        let mut context = PropertyMapper::to_domain(property)?;
        let mut bookings = Vec::with_capacity(records.len());
        for record in records {
            let availability =
                (record.status != Some(BookingStatus::Canceled)).then_some(&context);
            let booking = BookingMapper::to_domain(record, availability)?;
            context.add_booking(&booking);
            bookings.push(booking);
        }
        Ok(bookings)
    }
}

#[async_trait::async_trait]
impl BookingModifier for MockBookingRepository {
    type Transaction = MockTransaction;

    async fn create(
        &self,
        con: &mut MockTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        let record = BookingMapper::to_persistence(booking);
        if con.working.bookings.contains_key(&record.id) {
            return Err(Report::new(KernelError::Concurrency)
                .attach_printable(format!("Booking {} already exists", record.id)));
        }
        con.working.bookings.insert(record.id.clone(), record);
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        booking: &Booking,
    ) -> error_stack::Result<(), KernelError> {
        let record = BookingMapper::to_persistence(booking);
        let stored = con.working.bookings.get_mut(&record.id).ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("No booking found for id {}", record.id))
        })?;
        stored.total_price = record.total_price;
        stored.status = record.status;
        Ok(())
    }
}

impl DependOnPropertyQuery for MockDatabase {
    type PropertyQuery = MockPropertyRepository;
    fn property_query(&self) -> &Self::PropertyQuery {
        &self.property_repository
    }
}

impl DependOnPropertyModifier for MockDatabase {
    type PropertyModifier = MockPropertyRepository;
    fn property_modifier(&self) -> &Self::PropertyModifier {
        &self.property_repository
    }
}

impl DependOnUserQuery for MockDatabase {
    type UserQuery = MockUserRepository;
    fn user_query(&self) -> &Self::UserQuery {
        &self.user_repository
    }
}

impl DependOnUserModifier for MockDatabase {
    type UserModifier = MockUserRepository;
    fn user_modifier(&self) -> &Self::UserModifier {
        &self.user_repository
    }
}

impl DependOnBookingQuery for MockDatabase {
    type BookingQuery = MockBookingRepository;
    fn booking_query(&self) -> &Self::BookingQuery {
        &self.booking_repository
    }
}

impl DependOnBookingModifier for MockDatabase {
    type BookingModifier = MockBookingRepository;
    fn booking_modifier(&self) -> &Self::BookingModifier {
        &self.booking_repository
    }
}
