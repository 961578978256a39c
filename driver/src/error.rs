use kernel::KernelError;

/// Lifts a driver-level error into a kernel report.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
