use serde::Deserialize;

use application::transfer::CreateUserDto;
use kernel::prelude::validation::ValidationError;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    name: String,
}

pub struct UserTransformer;

impl Intake<CreateUserRequest> for UserTransformer {
    type To = CreateUserDto;
    fn emit(&self, input: CreateUserRequest) -> Self::To {
        CreateUserDto {
            name: input.name.trim().to_string(),
        }
    }
}

pub fn user_message(violation: &ValidationError) -> Option<&'static str> {
    match violation {
        ValidationError::NameRequired => Some("O campo nome é obrigatório."),
        _ => None,
    }
}
