//! Role Gate
//!
//! The single authorization decision shared by the procedure extractors
//! and the page route gate. Pure: no I/O, no logging.

use super::CurrentUser;

/// Capability a caller must hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Any valid token
    Authenticated,
    /// Account kind OWNER
    Owner,
    /// Employee account with sub-role CASHIER
    Cashier,
}

/// Why a caller was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateRejection {
    /// No token, or a token that did not validate
    Unauthenticated,
    /// Valid token, insufficient role
    Forbidden,
}

pub fn authorize(user: Option<&CurrentUser>, required: Capability) -> Result<(), GateRejection> {
    let user = user.ok_or(GateRejection::Unauthenticated)?;
    let allowed = match required {
        Capability::Authenticated => true,
        Capability::Owner => user.is_owner(),
        Capability::Cashier => user.is_cashier(),
    };
    if allowed {
        Ok(())
    } else {
        Err(GateRejection::Forbidden)
    }
}
