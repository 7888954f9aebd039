pub use pharos_core::*;

#[cfg(feature = "server")]
pub mod server {
    pub use pharos_server::*;
}

#[cfg(feature = "fs")]
pub mod fs {
    pub use pharos_fs::*;
}

#[cfg(feature = "s3")]
pub mod s3 {
    pub use pharos_s3::*;
}

#[cfg(feature = "mem_cache")]
pub mod cache_mem {
    pub use pharos_cache_mem::*;
}

pub mod prelude {
    pub use pharos_core::prelude::*;

    #[cfg(feature = "server")]
    pub use pharos_server::prelude::*;

    #[cfg(feature = "fs")]
    pub use pharos_fs::FileSystemStore;

    #[cfg(feature = "s3")]
    pub use pharos_s3::S3Store;

    #[cfg(feature = "mem_cache")]
    pub use pharos_cache_mem::MemoryCache;
}
