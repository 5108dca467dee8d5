pub mod kyc;
pub mod product;
