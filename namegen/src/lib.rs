pub mod common;
pub mod error;
pub mod generator;
pub mod utils;

#[cfg(test)]
pub mod test_utils;
