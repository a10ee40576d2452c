pub mod backend;

pub use backend::{evaluate_switch, BackendDescriptor, BackendId, BackendStatus, SwitchDecision};
