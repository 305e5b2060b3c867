mod stability;

pub use stability::StabilityImageClient;
