pub mod driver;

pub use driver::MemDb;
