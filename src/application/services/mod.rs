//! Business logic services for the application layer.

pub mod auth_service;
pub mod collection_service;
pub mod ingredient_service;
pub mod shopping_list_service;
pub mod short_link_service;

pub use auth_service::AuthService;
pub use collection_service::CollectionService;
pub use ingredient_service::{IngredientService, LoadSummary};
pub use shopping_list_service::ShoppingListService;
pub use short_link_service::ShortLinkService;
