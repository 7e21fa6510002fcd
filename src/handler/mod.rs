pub mod health;
pub mod remote_addr;
pub mod trigger;

pub use remote_addr::RemoteAddr;
