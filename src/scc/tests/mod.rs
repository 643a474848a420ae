
#[cfg(feature = "serde")]
mod serialization_tests;
