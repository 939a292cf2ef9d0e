pub mod aggregate;
pub mod normalize;

pub use aggregate::{Product, ProductDto};
pub use normalize::{normalize_product, parse_decimal, parse_leading_decimal, parse_product_list};
