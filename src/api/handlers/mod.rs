//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod collections;
pub mod health;
pub mod shopping_list;
pub mod short_link;

pub use collections::{
    add_to_favorites_handler, add_to_shopping_cart_handler, remove_from_favorites_handler,
    remove_from_shopping_cart_handler,
};
pub use health::health_handler;
pub use shopping_list::download_shopping_cart_handler;
pub use short_link::{get_link_handler, short_link_redirect_handler};
