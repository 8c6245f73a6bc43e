//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and domain rules and expose a small
//! API to the HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::collection_service::CollectionService`] - Favorites and shopping cart membership
//! - [`services::shopping_list_service::ShoppingListService`] - Shopping list export
//! - [`services::short_link_service::ShortLinkService`] - Short recipe links
//! - [`services::auth_service::AuthService`] - API token verification

pub mod services;
