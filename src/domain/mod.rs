// Domain types and value objects
pub mod case;
pub mod inlet_outlet;

// Re-export commonly used types
pub use case::Case;
pub use inlet_outlet::{
    DetermLimit, DomainError, ExtrapolateMode, InletOutletConfig, InletOutletZone,
};
