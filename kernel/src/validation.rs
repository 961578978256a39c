use std::fmt::Display;

use error_stack::Report;

use crate::KernelError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    IdRequired,
    MaxGuestsNotPositive,
    SameDates,
    EndBeforeStart,
    GuestCountNotPositive,
    MaxGuestsExceeded { max: i32 },
    Unavailable,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "O nome é obrigatório"),
            ValidationError::IdRequired => write!(f, "O ID é obrigatório"),
            ValidationError::MaxGuestsNotPositive => {
                write!(f, "O número máximo de hóspedes deve ser maior que zero")
            }
            ValidationError::SameDates => {
                write!(f, "A data de início e término não podem ser iguais.")
            }
            ValidationError::EndBeforeStart => {
                write!(f, "A data de término deve ser posterior à data de início.")
            }
            ValidationError::GuestCountNotPositive => {
                write!(f, "O número de hóspedes deve ser maior que zero.")
            }
            ValidationError::MaxGuestsExceeded { max } => {
                write!(f, "Número máximo de hóspedes excedido. Máximo permitido: {max}")
            }
            ValidationError::Unavailable => {
                write!(
                    f,
                    "A propriedade não está disponível para o período selecionado."
                )
            }
        }
    }
}

/// Ordered list of invariant checks. Only the first violation is kept and
/// checks after it are never evaluated.
#[derive(Debug, Default)]
pub struct Validation {
    violation: Option<ValidationError>,
}

impl Validation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure(self, check: impl FnOnce() -> bool, violation: ValidationError) -> Self {
        match self.violation {
            Some(_) => self,
            None if check() => self,
            None => Self {
                violation: Some(violation),
            },
        }
    }

    pub fn violation(&self) -> Option<&ValidationError> {
        self.violation.as_ref()
    }

    pub fn finish(self) -> error_stack::Result<(), KernelError> {
        match self.violation {
            None => Ok(()),
            Some(violation) => Err(Report::new(KernelError::Validation(violation))),
        }
    }
}
