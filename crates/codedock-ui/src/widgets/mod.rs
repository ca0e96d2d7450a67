pub mod icons;
pub mod pin_trigger;

// Re-export commonly used widgets
pub use icons::*;
pub use pin_trigger::*;
