//! Ready-made survey definitions for demos and tests.

pub mod business_profile;
pub mod product_feedback;

pub use business_profile::business_profile;
pub use product_feedback::product_feedback;
