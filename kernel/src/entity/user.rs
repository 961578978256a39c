mod id;
mod name;

pub use self::{id::*, name::*};
use serde::Serialize;
use vodca::References;

use crate::validation::{Validation, ValidationError};
use crate::KernelError;

/// ```compile_fail
/// use kernel::prelude::entity::{DestructUser, UserId, UserName};
///
/// let user = DestructUser {
///     id: UserId::new("u-1"),
///     name: UserName::new(""),
/// }
/// .freeze();
/// ```
#[derive(Debug, Clone, Eq, PartialEq, Serialize, References)]
pub struct User {
    id: UserId,
    name: UserName,
}

impl User {
    pub fn new(id: UserId, name: UserName) -> error_stack::Result<Self, KernelError> {
        Validation::new()
            .ensure(|| !name.as_ref().is_empty(), ValidationError::NameRequired)
            .ensure(|| !id.as_ref().is_empty(), ValidationError::IdRequired)
            .finish()?;
        Ok(Self { id, name })
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{User, UserId, UserName};
    use crate::validation::ValidationError;

    #[test]
    fn builds_valid_user() {
        let user = User::new(UserId::new("u-1"), UserName::new("Maria")).unwrap();
        assert_eq!(user.id(), &UserId::new("u-1"));
        assert_eq!(user.name(), &UserName::new("Maria"));
    }

    #[test]
    fn checks_name_before_id() {
        let report = User::new(UserId::new(""), UserName::new("")).unwrap_err();
        assert_eq!(
            report.current_context().validation(),
            Some(&ValidationError::NameRequired)
        );

        let report = User::new(UserId::new(""), UserName::new("Maria")).unwrap_err();
        assert_eq!(
            report.current_context().validation(),
            Some(&ValidationError::IdRequired)
        );
        assert_eq!(report.current_context().to_string(), "O ID é obrigatório");
    }
}
