pub mod health;
pub mod kyc;
pub mod product;
