pub mod cafes;
