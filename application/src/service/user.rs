use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserId, UserName};
use kernel::KernelError;

use crate::transfer::{CreateUserDto, UserDto};

#[async_trait::async_trait]
pub trait CreateUserService: 'static + Sync + Send + DependOnUserModifier {
    async fn create_user(&self, dto: CreateUserDto) -> error_stack::Result<UserDto, KernelError> {
        let user = User::new(
            UserId::new(Uuid::new_v4().to_string()),
            UserName::new(dto.name),
        )?;

        let mut connection = self.database_connection().transact().await?;
        self.user_modifier().create(&mut connection, &user).await?;
        connection.commit().await?;

        Ok(UserDto::from(user))
    }
}

impl<T> CreateUserService for T where T: DependOnUserModifier {}
