//! Tab-scoped storage slot for the backend-issued credential.
//!
//! Backed by `sessionStorage`, so the credential dies with the tab. This
//! layer is purely physical: one slot, unconditional overwrite, no expiry
//! checks. Requires a browser environment; native builds see an empty
//! store.

#[cfg(feature = "csr")]
const TOKEN_KEY: &str = "atlas_token";

#[cfg(feature = "csr")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.session_storage().ok().flatten())
}

/// Store a credential, replacing any previous one.
pub fn set(token: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
    }
}

/// Read the stored credential, if any.
pub fn get() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        storage().and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Discard the stored credential. Succeeds even when nothing is stored.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
