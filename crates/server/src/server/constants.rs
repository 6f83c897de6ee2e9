pub const RESOURCES_PATH: &str = "/api/resources";
pub const RESOURCE_PATH: &str = "/api/resources/:id";
/// Prefix of the mock API, only mounted in demo mode.
pub const MOCK_API_PREFIX: &str = "/api/mock";
