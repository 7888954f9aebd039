use crate::server::PharosConfig;
use crate::writer::CacheWriter;
use pharos_core::traits::{EdgeCache, ObjectStore};

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState<S: ObjectStore + Clone, C: EdgeCache + Clone> {
    pub store: S,
    pub cache: C,
    pub config: Arc<PharosConfig>,
    pub writer: CacheWriter,
}
