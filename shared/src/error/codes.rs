//! Unified error codes for TipTrim
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Order errors
//! - 5xxx: Payroll errors
//! - 6xxx: Product errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so a client can match on
/// them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Owner account required
    OwnerRequired = 2002,
    /// Cashier role required
    CashierRequired = 2003,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Caller token carries no cashier id
    CashierIdMissing = 4003,
    /// Barber not found
    BarberNotFound = 4004,
    /// Referenced employee is not a barber
    NotABarber = 4005,
    /// Quantity outside the allowed range
    InvalidQuantity = 4006,

    // ==================== 5xxx: Payroll ====================
    /// Payroll not found
    PayrollNotFound = 5001,
    /// Period start is after period end
    PayrollInvalidPeriod = 5002,
    /// Salary is negative or not a number
    PayrollInvalidSalary = 5003,
    /// A paid payroll cannot go back to draft
    PayrollAlreadyPaid = 5004,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price must be positive
    ProductInvalidPrice = 6002,
    /// Bonus percentage must be within 0..=100
    ProductInvalidBonus = 6003,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Username already taken
    EmployeeUsernameExists = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            Self::Success => "Operation completed successfully",
            Self::Unknown => "An unknown error occurred",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field is missing",
            Self::ValueOutOfRange => "Value is out of range",

            // Auth
            Self::NotAuthenticated => "Not authenticated",
            Self::InvalidCredentials => "User or password is incorrect",
            Self::TokenExpired => "Token has expired",
            Self::TokenInvalid => "Invalid token",

            // Permission
            Self::PermissionDenied => "Permission denied",
            Self::OwnerRequired => "Owner access required",
            Self::CashierRequired => "Cashier access required",

            // Order
            Self::OrderNotFound => "Order not found",
            Self::OrderEmpty => "Order must contain at least one item",
            Self::CashierIdMissing => "Cashier ID not found in token",
            Self::BarberNotFound => "Barber not found",
            Self::NotABarber => "Employee is not a barber",
            Self::InvalidQuantity => "Invalid quantity",

            // Payroll
            Self::PayrollNotFound => "Payroll not found",
            Self::PayrollInvalidPeriod => "Period start must not be after period end",
            Self::PayrollInvalidSalary => "Salary must be a non-negative number",
            Self::PayrollAlreadyPaid => "Payroll is already paid",

            // Product
            Self::ProductNotFound => "Product not found",
            Self::ProductInvalidPrice => "Price must be greater than zero",
            Self::ProductInvalidBonus => "Bonus percentage must be between 0 and 100",

            // Employee
            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeUsernameExists => "Username already exists",

            // System
            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            6 => Ok(Self::InvalidFormat),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            // Auth
            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            1003 => Ok(Self::TokenExpired),
            1004 => Ok(Self::TokenInvalid),

            // Permission
            2001 => Ok(Self::PermissionDenied),
            2002 => Ok(Self::OwnerRequired),
            2003 => Ok(Self::CashierRequired),

            // Order
            4001 => Ok(Self::OrderNotFound),
            4002 => Ok(Self::OrderEmpty),
            4003 => Ok(Self::CashierIdMissing),
            4004 => Ok(Self::BarberNotFound),
            4005 => Ok(Self::NotABarber),
            4006 => Ok(Self::InvalidQuantity),

            // Payroll
            5001 => Ok(Self::PayrollNotFound),
            5002 => Ok(Self::PayrollInvalidPeriod),
            5003 => Ok(Self::PayrollInvalidSalary),
            5004 => Ok(Self::PayrollAlreadyPaid),

            // Product
            6001 => Ok(Self::ProductNotFound),
            6002 => Ok(Self::ProductInvalidPrice),
            6003 => Ok(Self::ProductInvalidBonus),

            // Employee
            8001 => Ok(Self::EmployeeNotFound),
            8002 => Ok(Self::EmployeeUsernameExists),

            // System
            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
