pub mod config;
pub mod logging;

pub mod checksum;
pub mod compare;
pub mod exec;

#[cfg(test)]
mod testing;
