use crate::entity::{User, UserId, UserName};
use crate::record::UserRecord;
use crate::KernelError;

pub struct UserMapper;

impl UserMapper {
    pub fn to_domain(record: UserRecord) -> error_stack::Result<User, KernelError> {
        User::new(UserId::new(record.id), UserName::new(record.name))
    }

    pub fn to_persistence(user: &User) -> UserRecord {
        UserRecord {
            id: user.id().as_ref().clone(),
            name: user.name().as_ref().clone(),
        }
    }
}
