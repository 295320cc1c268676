mod car;

pub use car::{Car, CreateCarRequest, NewCar};
