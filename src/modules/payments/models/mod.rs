mod payment;

pub use payment::{CreatePaymentRequest, NewPayment, Payment};
