/// Reading of statement files and emission of the compiled model
pub mod file_io;
