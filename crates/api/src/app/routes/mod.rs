pub mod items;
pub mod locations;
pub mod system;
