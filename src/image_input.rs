pub mod blob;
pub mod impl_file;
