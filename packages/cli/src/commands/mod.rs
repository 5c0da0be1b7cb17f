pub mod convert;
pub mod init;
pub mod sample;

pub use convert::{convert, ConvertArgs};
pub use init::{init, InitArgs};
pub use sample::{sample, SampleArgs};
