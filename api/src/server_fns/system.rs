use dioxus::prelude::*;
use shared::BackendId;

#[cfg(feature = "server")]
use crate::config::CONFIG;

/// Availability probe for one backend integration.
///
/// Reports whether the backend's settings are present; the integrations
/// themselves own actual reachability checks.
#[post("/api/system/probe")]
pub async fn probe_backend(id: BackendId) -> Result<bool, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(CONFIG.backend_configured(id))
    }
    #[cfg(not(feature = "server"))]
    {
        let _ = id;
        Ok(false)
    }
}

/// The backend a fresh session starts on.
#[get("/api/system/default-backend")]
pub async fn default_backend() -> Result<BackendId, ServerFnError> {
    #[cfg(feature = "server")]
    {
        Ok(CONFIG.default_backend)
    }
    #[cfg(not(feature = "server"))]
    Ok(BackendId::Google)
}
