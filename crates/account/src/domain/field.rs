//! Field Names
//!
//! Wire names of the account form fields, exactly as the UI controls post
//! them.

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const REMEMBER_ME: &str = "rememberMe";

pub const FULL_NAME: &str = "fullName";
pub const CONFIRM_PASSWORD: &str = "confirmPassword";
pub const COMPANY_NAME: &str = "companyName";
pub const PLAN: &str = "plan";
pub const TERMS: &str = "terms";
