//! Value types that own heap resources and trace their copy, move and
//! destruction operations, together with the demonstration sequences that
//! exercise them.

pub mod composite;
pub mod owning_buffer;
pub mod scenarios;
pub mod string_holder;
pub mod trace;

pub use composite::Composite;
pub use owning_buffer::OwningBuffer;
pub use scenarios::Scenario;
pub use string_holder::StringHolder;
