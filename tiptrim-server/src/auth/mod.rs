//! Authentication and authorization
//!
//! - [`JwtService`] - access token issue/validation
//! - [`gate::authorize`] - the Role Gate decision
//! - [`OwnerUser`] / [`CashierUser`] / [`CurrentUser`] - procedure-level gate (extractors)
//! - [`route_gate::route_gate`] - page-level gate (redirecting middleware)

pub mod extractor;
pub mod gate;
pub mod jwt;
pub mod password;
pub mod route_gate;

pub use extractor::{CashierUser, OwnerUser};
pub use gate::{Capability, GateRejection, authorize};
pub use jwt::{Claims, CurrentUser, IssuedToken, JwtConfig, JwtError, JwtService};
pub use password::{hash_password, verify_password};
