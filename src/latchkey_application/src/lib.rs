pub mod use_cases;

pub use use_cases::{
    login::{LoginError, LoginUseCase},
    register::{RegisterError, RegisterUseCase},
    verify_session::{VerifySessionError, VerifySessionUseCase},
};
