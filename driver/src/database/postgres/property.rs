use sqlx::PgConnection;

use kernel::interface::mapper::PropertyMapper;
use kernel::interface::query::PropertyQuery;
use kernel::interface::record::PropertyRecord;
use kernel::interface::update::PropertyModifier;
use kernel::prelude::entity::{Property, PropertyId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresPropertyRepository;

#[async_trait::async_trait]
impl PropertyQuery for PostgresPropertyRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &PropertyId,
    ) -> error_stack::Result<Option<Property>, KernelError> {
        PgPropertyInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl PropertyModifier for PostgresPropertyRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        PgPropertyInternal::create(con, property).await
    }
}

#[derive(sqlx::FromRow)]
struct PropertyRow {
    id: String,
    name: String,
    description: Option<String>,
    max_guests: i32,
    base_price_per_night: f64,
}

impl From<PropertyRow> for PropertyRecord {
    fn from(row: PropertyRow) -> Self {
        PropertyRecord {
            id: row.id,
            name: row.name,
            description: row.description,
            max_guests: row.max_guests,
            base_price_per_night: row.base_price_per_night,
        }
    }
}

pub(in crate::database) struct PgPropertyInternal;

impl PgPropertyInternal {
    pub(in crate::database) async fn find_by_id(
        con: &mut PgConnection,
        id: &PropertyId,
    ) -> error_stack::Result<Option<Property>, KernelError> {
        let row = sqlx::query_as::<_, PropertyRow>(
            // language=postgresql
            r#"
            SELECT id, name, description, max_guests, base_price_per_night
            FROM properties
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(PropertyRecord::from)
            .map(PropertyMapper::to_domain)
            .transpose()
    }

    async fn create(
        con: &mut PgConnection,
        property: &Property,
    ) -> error_stack::Result<(), KernelError> {
        let record = PropertyMapper::to_persistence(property);
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO properties (id, name, description, max_guests, base_price_per_night)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id)
        .bind(record.name)
        .bind(record.description)
        .bind(record.max_guests)
        .bind(record.base_price_per_night)
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
