// Job board core: keyword classification, listing normalization, filter evaluation
// and the per-session controller. Everything below `handlers` is synchronous and pure
// apart from the controller's own state.

pub mod classifier;
pub mod controller;
pub mod filter;
pub mod handlers;
pub mod sessions;
pub mod transform;

pub use controller::ListingController;
pub use sessions::SessionStore;
