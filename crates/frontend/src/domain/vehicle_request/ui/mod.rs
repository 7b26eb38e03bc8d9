pub mod dealer_manager;
pub mod dealer_staff;
pub mod evm_staff;
