pub mod content_type;
pub mod error;
pub mod manifest;
pub mod route;
pub mod traits;

pub mod prelude {
    pub use super::content_type::*;
    pub use super::error::*;
    pub use super::manifest::*;
    pub use super::route::*;
    pub use super::traits::*;
}
