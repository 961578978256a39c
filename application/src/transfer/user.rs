use kernel::prelude::entity::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDto {
    pub id: String,
    pub name: String,
}

impl From<&User> for UserDto {
    fn from(value: &User) -> Self {
        Self {
            id: value.id().as_ref().clone(),
            name: value.name().as_ref().clone(),
        }
    }
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self::from(&value)
    }
}

#[derive(Debug)]
pub struct CreateUserDto {
    pub name: String,
}
