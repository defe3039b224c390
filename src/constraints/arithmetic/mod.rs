mod linear_equal;
mod not_equal;

pub use linear_equal::LinearEqual;
pub use not_equal::NotEqual;
