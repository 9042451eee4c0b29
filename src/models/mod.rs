pub mod device;
pub mod location;
pub mod request;
pub mod result;

pub use device::Device;
pub use location::Location;
pub use request::{BatchRequest, ProviderAck, TestConfig, TestRequest};
pub use result::TestResult;
