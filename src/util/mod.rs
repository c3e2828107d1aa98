#![warn(missing_docs)]

#[cfg(test)]
pub mod counter;
#[cfg(test)]
pub mod hash;
pub mod panic;
#[cfg(all(feature = "time", target_os = "linux"))]
pub mod result;
pub mod sort;
