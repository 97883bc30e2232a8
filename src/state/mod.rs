// ============================================================================
// STATE MODULE - Estado de navegación (sin dependencias del navegador)
// ============================================================================

pub mod navigation;

pub use navigation::{FragmentOutcome, NavigationState, View};
