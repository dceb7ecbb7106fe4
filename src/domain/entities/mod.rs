//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the microblog service. Entities are plain data structures
//! without business logic.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account with derived subscription counts
//! - [`Post`] - A microblog entry owned by one user
//! - [`Subscription`] - A follow edge between two users
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewUser`, `NewPost` - For creating new records
//! - `UserPatch` - For partial updates
//!
//! All entities include unit tests demonstrating their construction and usage.

pub mod post;
pub mod subscription;
pub mod user;

pub use post::{NewPost, POST_MAX_LEN, Post};
pub use subscription::Subscription;
pub use user::{NewUser, User, UserPatch};
