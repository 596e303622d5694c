//! Input validation helpers
//!
//! Every RPC input is checked before any write. Failures are collected per
//! field into one error whose details map the field name to the reason.

use shared::error::{AppError, ErrorCode};
use shared::models::{EmployeeCreate, OrderCreate, PayrollCreate, ProductCreate, ProductUpdate};

use crate::orders::money::{MAX_PRICE, MAX_QUANTITY, MAX_SALARY};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: employee, product
pub const MAX_NAME_LEN: usize = 200;

/// Product descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Login names
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Collects field failures, then converts to a single error.
///
/// A failure may carry its own code. When every failure carries the same
/// one, the error takes that code; otherwise the fallback given to
/// [`FieldErrors::finish`].
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: Vec<(String, String, Option<ErrorCode>)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.fields.push((field.into(), reason.into(), None));
    }

    pub fn add_coded(
        &mut self,
        code: ErrorCode,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) {
        self.fields.push((field.into(), reason.into(), Some(code)));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate that a required string is non-empty and within the length limit.
    pub fn required_text(&mut self, field: &str, value: &str, max_len: usize) {
        if value.trim().is_empty() {
            self.add_coded(ErrorCode::RequiredField, field, "must not be empty");
        } else if value.chars().count() > max_len {
            self.add(
                field,
                format!("is too long ({} chars, max {max_len})", value.chars().count()),
            );
        }
    }

    /// Validate that an optional-content string is within the length limit.
    pub fn optional_text(&mut self, field: &str, value: &str, max_len: usize) {
        if value.chars().count() > max_len {
            self.add(
                field,
                format!("is too long ({} chars, max {max_len})", value.chars().count()),
            );
        }
    }

    pub fn percentage(&mut self, code: ErrorCode, field: &str, value: f64) {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            self.add_coded(code, field, "must be between 0 and 100");
        }
    }

    /// `Ok(())` when nothing failed, else one error listing every field
    pub fn finish(self, fallback: ErrorCode) -> Result<(), AppError> {
        let Some((_, _, first)) = self.fields.first() else {
            return Ok(());
        };
        let code = match first {
            Some(code) if self.fields.iter().all(|(_, _, c)| c == first) => *code,
            _ => fallback,
        };
        let summary = self
            .fields
            .iter()
            .map(|(f, r, _)| format!("{f} {r}"))
            .collect::<Vec<_>>()
            .join("; ");
        let mut err = AppError::with_message(code, summary);
        for (field, reason, _) in self.fields {
            err = err.with_detail(field, reason);
        }
        Err(err)
    }
}

pub fn validate_employee_create(input: &EmployeeCreate) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.required_text("name", &input.name, MAX_NAME_LEN);
    errors.required_text("username", &input.username, MAX_SHORT_TEXT_LEN);
    let len = input.password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&len) {
        errors.add(
            "password",
            format!("must be between {MIN_PASSWORD_LEN} and {MAX_PASSWORD_LEN} characters"),
        );
    }
    errors.finish(ErrorCode::ValidationFailed)
}

pub fn validate_employee_name(name: &str) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    errors.required_text("name", name, MAX_NAME_LEN);
    errors.finish(ErrorCode::ValidationFailed)
}

fn check_product(
    errors: &mut FieldErrors,
    name: &str,
    price: f64,
    description: &str,
    barber_percent: f64,
    cashier_percent: f64,
) {
    errors.required_text("name", name, MAX_NAME_LEN);
    if !price.is_finite() || price <= 0.0 {
        errors.add_coded(ErrorCode::ProductInvalidPrice, "price", "must be greater than zero");
    } else if price > MAX_PRICE {
        errors.add_coded(
            ErrorCode::ProductInvalidPrice,
            "price",
            format!("exceeds maximum allowed ({MAX_PRICE})"),
        );
    }
    errors.optional_text("description", description, MAX_NOTE_LEN);
    let bonus = ErrorCode::ProductInvalidBonus;
    errors.percentage(bonus, "bonus_percentage_for_barber", barber_percent);
    errors.percentage(bonus, "bonus_percentage_for_cashier", cashier_percent);
}

pub fn validate_product_create(input: &ProductCreate) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    check_product(
        &mut errors,
        &input.name,
        input.price,
        &input.description,
        input.bonus_percentage_for_barber,
        input.bonus_percentage_for_cashier,
    );
    errors.finish(ErrorCode::ValidationFailed)
}

pub fn validate_product_update(input: &ProductUpdate) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    check_product(
        &mut errors,
        &input.name,
        input.price,
        &input.description,
        input.bonus_percentage_for_barber,
        input.bonus_percentage_for_cashier,
    );
    errors.finish(ErrorCode::ValidationFailed)
}

pub fn validate_order_create(input: &OrderCreate) -> Result<(), AppError> {
    if input.items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty).with_detail("items", "must not be empty"));
    }
    let mut errors = FieldErrors::new();
    for (i, line) in input.items.iter().enumerate() {
        if !(1..=MAX_QUANTITY).contains(&line.quantity) {
            errors.add(
                format!("items[{i}].quantity"),
                format!("must be between 1 and {MAX_QUANTITY}"),
            );
        }
    }
    errors.finish(ErrorCode::InvalidQuantity)
}

pub fn validate_payroll_create(input: &PayrollCreate) -> Result<(), AppError> {
    let mut errors = FieldErrors::new();
    if !input.salary.is_finite() || input.salary < 0.0 {
        errors.add_coded(
            ErrorCode::PayrollInvalidSalary,
            "salary",
            "must be a non-negative number",
        );
    } else if input.salary > MAX_SALARY {
        errors.add_coded(
            ErrorCode::PayrollInvalidSalary,
            "salary",
            format!("exceeds maximum allowed ({MAX_SALARY})"),
        );
    }
    if input.period_start > input.period_end {
        errors.add_coded(
            ErrorCode::PayrollInvalidPeriod,
            "period_start",
            "must not be after period_end",
        );
    }
    errors.finish(ErrorCode::ValidationFailed)
}
