use std::path::Path;
use std::sync::Arc;

use crate::app::error::{Result, ShopError};
use crate::config::Config;
use crate::geocoding::{AddressResolver, GoogleGeocoder};
use crate::location::{LocationProvider, StaticLocationProvider};
use crate::store::ItemStore;

pub struct AppContext {
    pub config: Config,
    pub location: Arc<dyn LocationProvider + Send + Sync>,
    /// `None` when no geocoding API key is configured.
    pub resolver: Option<Arc<dyn AddressResolver + Send + Sync>>,
}

impl AppContext {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| ShopError::Config(e.to_string()))?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self> {
        let location: Arc<dyn LocationProvider + Send + Sync> =
            Arc::new(StaticLocationProvider::from_config(&config.location));

        let resolver: Option<Arc<dyn AddressResolver + Send + Sync>> =
            if config.geocoding.api_key.trim().is_empty() {
                tracing::info!("No geocoding API key configured; address lookup disabled");
                None
            } else {
                Some(Arc::new(GoogleGeocoder::new(&config.geocoding)?))
            };

        Ok(Self {
            config,
            location,
            resolver,
        })
    }

    pub fn with_parts(
        config: Config,
        location: Arc<dyn LocationProvider + Send + Sync>,
        resolver: Option<Arc<dyn AddressResolver + Send + Sync>>,
    ) -> Self {
        Self {
            config,
            location,
            resolver,
        }
    }

    /// A fresh, empty list for one session.
    pub fn new_store(&self) -> ItemStore {
        ItemStore::with_id_strategy(self.config.store.id_strategy)
    }

    pub fn resolver(&self) -> Result<&Arc<dyn AddressResolver + Send + Sync>> {
        self.resolver.as_ref().ok_or_else(|| {
            ShopError::Config("geocoding.api_key is not set; address lookup is disabled".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::IdStrategy;

    #[test]
    fn test_without_api_key_has_no_resolver() {
        let ctx = AppContext::from_config(Config::default()).unwrap();
        assert!(ctx.resolver.is_none());
        assert!(matches!(ctx.resolver(), Err(ShopError::Config(_))));
    }

    #[test]
    fn test_with_api_key_builds_resolver() {
        let mut config = Config::default();
        config.geocoding.api_key = "key".to_string();
        let ctx = AppContext::from_config(config).unwrap();
        assert!(ctx.resolver().is_ok());
    }

    #[test]
    fn test_bad_endpoint_is_rejected() {
        let mut config = Config::default();
        config.geocoding.api_key = "key".to_string();
        config.geocoding.endpoint = "not a url".to_string();
        assert!(matches!(
            AppContext::from_config(config),
            Err(ShopError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_new_store_follows_config() {
        let mut config = Config::default();
        config.store.id_strategy = IdStrategy::Monotonic;
        let ctx = AppContext::from_config(config).unwrap();
        assert_eq!(ctx.new_store().id_strategy(), IdStrategy::Monotonic);
    }
}
