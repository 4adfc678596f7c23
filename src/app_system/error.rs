use thiserror::Error;

use crate::auth::AuthError;
use crate::category_actor::CategoryError;
use crate::custom_request_actor::CustomRequestError;
use crate::payment_actor::PaymentError;
use crate::product_actor::ProductError;
use crate::review_actor::ReviewError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckoutError {
    #[error("Your cart is empty")]
    EmptyCart,
    #[error("Nothing to pay: the cart total is {0}")]
    NothingToPay(rust_decimal::Decimal),
    #[error("Please enter the transaction id from your payment")]
    MissingTransactionId,
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("Could not record payment: {0}")]
    Payment(#[from] PaymentError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackOfficeError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Review(#[from] ReviewError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    CustomRequest(#[from] CustomRequestError),
}
