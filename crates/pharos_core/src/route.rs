/// Key layout of the backing store: everything the router needs to map
/// request paths onto storage keys.
#[derive(Debug, Clone)]
pub struct KeyLayout {
    /// Root key of the published manifest.
    pub manifest_key: String,
    /// Keys under this prefix are never versioned.
    pub schema_prefix: String,
    /// Prefix under which immutable versioned snapshots live.
    pub versions_prefix: String,
    /// Query parameter carrying the version token.
    pub version_param: String,
}

impl Default for KeyLayout {
    fn default() -> Self {
        Self {
            manifest_key: "manifest.json".to_string(),
            schema_prefix: "schemas/".to_string(),
            versions_prefix: "versions".to_string(),
            version_param: "v".to_string(),
        }
    }
}

impl KeyLayout {
    pub fn versioned_key(&self, token: &str, logical_key: &str) -> String {
        format!("{}/{token}/{logical_key}", self.versions_prefix)
    }
}

/// A request as the router sees it: the URL path plus the optional
/// version token from the query string.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub pathname: String,
    pub version_token: Option<String>,
}

impl RequestDescriptor {
    pub fn new(pathname: impl Into<String>, version_token: Option<String>) -> Self {
        Self {
            pathname: pathname.into(),
            version_token,
        }
    }

    /// The path with its leading slash stripped.
    pub fn logical_key(&self) -> &str {
        self.pathname.trim_start_matches('/')
    }
}

/// Where a request goes after version validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Unpinned manifest request: redirect to the currently published
    /// version.
    ManifestRedirect,
    /// Pinned manifest request: validate the token against the current
    /// version, then serve the manifest key itself.
    ManifestPinned { token: String },
    /// Anything else: fetch this storage key.
    Object { storage_key: String },
}

impl Route {
    /// Deterministic, side-effect-free routing. The manifest fetches the
    /// two manifest variants require happen at the call site.
    ///
    /// The unversioned-default branch (no token, non-manifest path)
    /// serves the logical key unchanged. It stays independent of the
    /// manifest redirect flow; no redirect is injected into generic
    /// object serving.
    pub fn resolve(descriptor: &RequestDescriptor, layout: &KeyLayout) -> Self {
        let logical_key = descriptor.logical_key();

        if logical_key == layout.manifest_key {
            return match &descriptor.version_token {
                Some(token) => Route::ManifestPinned {
                    token: token.clone(),
                },
                None => Route::ManifestRedirect,
            };
        }

        // Schemas are addressed literally; any version token is ignored.
        if logical_key.starts_with(&layout.schema_prefix) {
            return Route::Object {
                storage_key: logical_key.to_string(),
            };
        }

        match &descriptor.version_token {
            Some(token) => Route::Object {
                storage_key: layout.versioned_key(token, logical_key),
            },
            None => Route::Object {
                storage_key: logical_key.to_string(),
            },
        }
    }
}
