use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VehicleError {
    #[error("Speed cannot be negative.")]
    NegativeSpeed { requested: i32 },
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("/ by zero")]
    DivideByZero,

    #[error("integer overflow")]
    Overflow,
}

impl ArithmeticError {
    /// Human readable explanation shown next to the raw message.
    pub fn explanation(&self) -> &'static str {
        match self {
            ArithmeticError::DivideByZero => "Cannot divide by zero.",
            ArithmeticError::Overflow => "Result does not fit in 32 bits.",
        }
    }
}
