//! Token lifecycle: the advice classification and the login/refresh flows.

pub mod advice;
pub(crate) mod flow;
pub mod token;

pub use advice::{evaluate_advice, AuthAdvice};
pub use token::{Credentials, TokenSet};
