//! Address infrastructure implementations

mod in_memory;
mod service;

pub use in_memory::InMemoryAddressStore;
pub use service::AddressService;
