pub mod establishments;
