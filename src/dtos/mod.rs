pub mod product;
pub mod response;
