pub mod error;
pub mod login;
pub mod logout;
pub mod register;
pub mod verify_token;

pub use error::{AuthApiError, ErrorResponse};
pub use login::{LoginRequest, LoginResponse, login};
pub use logout::{MessageResponse, logout};
pub use register::{RegisterRequest, register};
pub use verify_token::{VerifyTokenRequest, VerifyTokenResponse, verify_token};
