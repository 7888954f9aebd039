mod api;

pub mod cors;
pub mod server;
pub mod state;
pub mod writer;

pub mod prelude {
    pub use crate::server::*;
    pub use crate::state::*;
    pub use crate::writer::*;
}
