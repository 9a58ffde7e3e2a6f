#[allow(non_snake_case)]
pub mod NetParser;
#[allow(non_snake_case)]
pub mod Utils;
pub mod cli;
