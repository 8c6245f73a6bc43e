//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{
    AuthService, CollectionService, ShoppingListService, ShortLinkService,
};
use crate::domain::repositories::{
    CollectionRepository, RecipeRepository, ShoppingCartRepository, TokenRepository,
};

pub type DynAuthService = AuthService<dyn TokenRepository>;
pub type DynCollectionService = CollectionService<dyn CollectionRepository, dyn RecipeRepository>;
pub type DynShoppingListService = ShoppingListService<dyn ShoppingCartRepository>;
pub type DynShortLinkService = ShortLinkService<dyn RecipeRepository>;

/// Settings that shape absolute URLs built from incoming requests.
#[derive(Debug, Clone, Default)]
pub struct LinkSettings {
    /// Fixed origin for generated links; overrides request headers when set.
    pub public_base_url: Option<String>,
    /// Trust `X-Forwarded-Proto` / `X-Forwarded-Host` from a reverse proxy.
    pub behind_proxy: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub collection_service: Arc<DynCollectionService>,
    pub shopping_list_service: Arc<DynShoppingListService>,
    pub short_link_service: Arc<DynShortLinkService>,
    pub auth_service: Arc<DynAuthService>,
    pub link_settings: LinkSettings,
}

impl AppState {
    /// Wires services on top of the given repositories.
    pub fn new(
        recipe_repository: Arc<dyn RecipeRepository>,
        collection_repository: Arc<dyn CollectionRepository>,
        shopping_cart_repository: Arc<dyn ShoppingCartRepository>,
        token_repository: Arc<dyn TokenRepository>,
        token_signing_secret: String,
        link_settings: LinkSettings,
    ) -> Self {
        Self {
            collection_service: Arc::new(CollectionService::new(
                collection_repository,
                recipe_repository.clone(),
            )),
            shopping_list_service: Arc::new(ShoppingListService::new(shopping_cart_repository)),
            short_link_service: Arc::new(ShortLinkService::new(recipe_repository.clone())),
            auth_service: Arc::new(AuthService::new(token_repository, token_signing_secret)),
            recipe_repository,
            link_settings,
        }
    }
}
