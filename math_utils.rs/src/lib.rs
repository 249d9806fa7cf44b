pub mod ext;
pub mod symmetry;
