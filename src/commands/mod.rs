pub mod bootstrap;
pub mod mask_sites;
pub mod splits;
