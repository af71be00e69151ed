//! Business logic layer.
//!
//! Services sit between the HTTP controllers and the repositories. They own
//! the domain rules that span more than one field or row (discount versus
//! price after a merge, page bounds against the total count, unique
//! constraint translation) and return domain models or `AppError`.

pub mod tour;
pub mod user;
