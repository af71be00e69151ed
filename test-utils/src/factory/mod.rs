//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let tour = factory::tour::create_tour(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let tour = factory::tour::TourFactory::new(&db)
//!     .name("The Forest Hiker")
//!     .price(397.0)
//!     .secret_tour(true)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod tour;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use tour::create_tour;
pub use user::create_user;
