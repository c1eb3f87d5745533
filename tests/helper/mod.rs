pub mod fakes;

#[allow(unused_imports)]
pub use fakes::*;
