pub mod promotion;
pub mod vehicle;
pub mod vehicle_request;
