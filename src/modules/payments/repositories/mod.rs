mod payment_repository;

pub use payment_repository::{MySqlPaymentRepository, PaymentRepository};
