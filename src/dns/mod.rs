pub mod enums;

pub use enums::{RecordClass, RecordType};
