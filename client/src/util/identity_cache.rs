//! Browser `localStorage` backend for the identity cache.
//!
//! TRADE-OFFS
//! ==========
//! Storage access is best-effort browser-only behavior. On the server every
//! call is a no-op, so SSR always renders the signed-out loading phase and the
//! browser restores the session after hydration.

#[cfg(test)]
#[path = "identity_cache_test.rs"]
mod identity_cache_test;

use access::IdentityCache;
#[cfg(feature = "hydrate")]
use access::CACHE_KEY;

/// `IdentityCache` stored under [`access::CACHE_KEY`] in `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageCache;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl IdentityCache for LocalStorageCache {
    fn read(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            storage()?.get_item(CACHE_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn write(&self, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                if storage.set_item(CACHE_KEY, raw).is_err() {
                    log::warn!("localStorage rejected identity record");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = raw;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = storage() {
                let _ = storage.remove_item(CACHE_KEY);
            }
        }
    }
}
