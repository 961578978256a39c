use sqlx::PgConnection;

use kernel::interface::mapper::UserMapper;
use kernel::interface::query::UserQuery;
use kernel::interface::record::UserRecord;
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{User, UserId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresUserRepository;

#[async_trait::async_trait]
impl UserQuery for PostgresUserRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        PgUserInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl UserModifier for PostgresUserRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        user: &User,
    ) -> error_stack::Result<(), KernelError> {
        PgUserInternal::create(con, user).await
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: String,
    name: String,
}

impl From<UserRow> for UserRecord {
    fn from(row: UserRow) -> Self {
        UserRecord {
            id: row.id,
            name: row.name,
        }
    }
}

pub(in crate::database) struct PgUserInternal;

impl PgUserInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &UserId,
    ) -> error_stack::Result<Option<User>, KernelError> {
        let row = sqlx::query_as::<_, UserRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        row.map(UserRecord::from)
            .map(UserMapper::to_domain)
            .transpose()
    }

    async fn create(con: &mut PgConnection, user: &User) -> error_stack::Result<(), KernelError> {
        let record = UserMapper::to_persistence(user);
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO users (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(record.id)
        .bind(record.name)
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
