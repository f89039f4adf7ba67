pub mod check;
pub mod defs;
pub mod input;
pub mod library;
pub mod output;

#[cfg(test)]
mod library_tests;
#[cfg(test)]
mod output_tests;
