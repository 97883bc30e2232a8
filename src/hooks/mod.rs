pub mod use_clock;
pub mod use_navigation;
pub mod use_session;

pub use use_clock::use_clock;
pub use use_navigation::{use_navigation, UseNavigationHandle};
pub use use_session::{use_session, UseSessionHandle};
