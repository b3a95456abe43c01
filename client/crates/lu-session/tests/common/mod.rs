#![allow(unused_imports)]

pub(crate) mod failing_storage;
pub(crate) mod fixtures;

pub use failing_storage::*;
pub use fixtures::*;
