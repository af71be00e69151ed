//! User and auth body validation.

use serde::Deserialize;

use entity::user::Role;

use super::FieldError;

const PASSWORD_MIN_LEN: usize = 8;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SignupBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    #[serde(rename = "confirmPassword")]
    confirm_password: Option<String>,
    photo: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CreateUserBody {
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    #[serde(rename = "confirmPassword")]
    confirm_password: Option<String>,
    photo: Option<String>,
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UpdateUserBody {
    name: Option<String>,
    email: Option<String>,
    photo: Option<String>,
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateProfileBody {
    name: Option<String>,
    email: Option<String>,
    photo: Option<String>,
    password: Option<serde_json::Value>,
    current_password: Option<serde_json::Value>,
    #[serde(rename = "confirmPassword")]
    confirm_password: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoginBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ForgotPasswordBody {
    email: Option<String>,
}

/// Validated signup input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupParams {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<String>,
}

/// Validated admin create-user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub photo: Option<String>,
    pub role: Role,
}

/// Validated admin update-user input; present fields only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub role: Option<Role>,
}

/// Validated self-service profile update; never carries password fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateProfileInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub photo: Option<String>,
}

/// Validated login credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

/// Validates a signup body.
pub fn parse_signup_body(body: serde_json::Value) -> Result<SignupParams, Vec<FieldError>> {
    let body: SignupBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();
    let name = require_name(body.name, &mut errors);
    let email = require_email(body.email, &mut errors);
    let password = require_password(body.password, body.confirm_password, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SignupParams {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
        photo: body.photo,
    })
}

/// Validates an admin create-user body; role defaults to `user`.
pub fn parse_create_user_body(body: serde_json::Value) -> Result<CreateUserInput, Vec<FieldError>> {
    let body: CreateUserBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();
    let name = require_name(body.name, &mut errors);
    let email = require_email(body.email, &mut errors);
    let password = require_password(body.password, body.confirm_password, &mut errors);
    let role = parse_role(body.role, &mut errors).unwrap_or(Role::User);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(CreateUserInput {
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
        photo: body.photo,
        role,
    })
}

/// Validates an admin update-user body; present fields only.
pub fn parse_update_user_body(body: serde_json::Value) -> Result<UpdateUserInput, Vec<FieldError>> {
    let body: UpdateUserBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();

    let name = match body.name {
        Some(name) if name.trim().is_empty() => {
            errors.push(FieldError::new("name", "Please provide your name"));
            None
        }
        other => other,
    };
    let email = match body.email {
        Some(email) => {
            let email = email.trim().to_lowercase();
            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.push(FieldError::new("email", "Please provide a valid email"));
                None
            }
        }
        None => None,
    };
    let role = parse_role(body.role, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateUserInput {
        name,
        email,
        photo: body.photo,
        role,
    })
}

/// Validates a self-service profile update.
///
/// Any password-related key is rejected so credentials can only change
/// through the dedicated password route.
pub fn parse_update_profile_body(
    body: serde_json::Value,
) -> Result<UpdateProfileInput, Vec<FieldError>> {
    let body: UpdateProfileBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();

    for (present, path) in [
        (body.password.is_some(), "password"),
        (body.current_password.is_some(), "currentPassword"),
        (body.confirm_password.is_some(), "confirmPassword"),
    ] {
        if present {
            errors.push(FieldError::new(path, "You can not update your password here."));
        }
    }

    let name = match body.name {
        Some(name) if name.trim().is_empty() => {
            errors.push(FieldError::new("name", "Please provide your name"));
            None
        }
        other => other,
    };
    let email = match body.email {
        Some(email) => {
            let email = email.trim().to_lowercase();
            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.push(FieldError::new("email", "Please provide a valid email"));
                None
            }
        }
        None => None,
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(UpdateProfileInput {
        name,
        email,
        photo: body.photo,
    })
}

/// Validates a login body.
pub fn parse_login_body(body: serde_json::Value) -> Result<LoginParams, Vec<FieldError>> {
    let body: LoginBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();
    let email = require_email(body.email, &mut errors);
    let password = match body.password {
        Some(password) if !password.is_empty() => Some(password),
        _ => {
            errors.push(FieldError::new("password", "Please provide your password"));
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(LoginParams {
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

/// Validates a forgot-password body, yielding the normalized email.
pub fn parse_forgot_password_body(body: serde_json::Value) -> Result<String, Vec<FieldError>> {
    let body: ForgotPasswordBody = match serde_json::from_value(body) {
        Ok(body) => body,
        Err(err) => return Err(vec![FieldError::new("", err.to_string())]),
    };

    let mut errors = Vec::new();
    let email = require_email(body.email, &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(email.unwrap_or_default())
}

fn require_name(name: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Some(name),
        _ => {
            errors.push(FieldError::new("name", "Please provide your name"));
            None
        }
    }
}

fn require_email(email: Option<String>, errors: &mut Vec<FieldError>) -> Option<String> {
    match email {
        Some(email) => {
            let email = email.trim().to_lowercase();
            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.push(FieldError::new("email", "Please provide a valid email"));
                None
            }
        }
        None => {
            errors.push(FieldError::new("email", "Please provide a valid email"));
            None
        }
    }
}

fn require_password(
    password: Option<String>,
    confirm: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    let password = match password {
        Some(password) if password.len() >= PASSWORD_MIN_LEN => Some(password),
        _ => {
            errors.push(FieldError::new(
                "password",
                format!("Password must be at least {PASSWORD_MIN_LEN} characters"),
            ));
            None
        }
    };

    if let Some(password) = &password {
        if confirm.as_deref() != Some(password.as_str()) {
            errors.push(FieldError::new("confirmPassword", "Passwords are not the same"));
            return None;
        }
    }

    password
}

fn parse_role(role: Option<String>, errors: &mut Vec<FieldError>) -> Option<Role> {
    match role.as_deref() {
        Some("user") => Some(Role::User),
        Some("guide") => Some(Role::Guide),
        Some("lead-guide") => Some(Role::LeadGuide),
        Some("admin") => Some(Role::Admin),
        Some(_) => {
            errors.push(FieldError::new(
                "role",
                "Role is either: user, guide, lead-guide, admin",
            ));
            None
        }
        None => None,
    }
}

/// Minimal structural email check: one `@` with a dotted domain.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}
