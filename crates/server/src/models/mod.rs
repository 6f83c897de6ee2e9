pub mod resource;
pub mod response;
pub mod user;
