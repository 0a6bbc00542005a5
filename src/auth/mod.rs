//! Authentication: token issuance, validation, and the request guard

pub mod jwt;
pub mod middleware;
pub mod models;
pub mod store;

pub use jwt::{create_token, validate_token, Claims};
pub use middleware::{authorize, require_auth, AuthenticatedUser, Rejection};
pub use models::{LoginRequest, LoginResponse, User, UserInfo};
pub use store::UserStore;
