use thiserror::Error;

use pyroshop_core::DomainError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
