pub mod root;
pub mod world;
