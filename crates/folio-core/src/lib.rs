pub mod bindings;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod error;
pub mod interpolate;
pub mod particles;
pub mod pointer;
pub mod scroll;
pub mod sections;
pub mod signal;
pub mod spring;
pub mod viewport;

pub use bindings::*;
pub use config::*;
pub use constants::*;
pub use debounce::*;
pub use error::*;
pub use interpolate::*;
pub use particles::*;
pub use pointer::*;
pub use scroll::*;
pub use sections::*;
pub use signal::*;
pub use spring::*;
pub use viewport::*;
