//! Password-grant credentials, bearer tokens, and the token acquirer.

pub mod credentials;
pub mod token;

mod acquire;

pub use acquire::*;
pub use credentials::*;
pub use token::*;
