//! Keypad input

pub mod matrix;

pub use matrix::MatrixScanner;
