//! # Folio Store
//!
//! Domain stores over the [`fs_storage`] engines: the write-through
//! [`ProfileStore`], the durable [`ViewCounter`] and the
//! [`PortfolioSession`] tying both to one portfolio root.

pub mod profile_store;
pub mod session;
pub mod view_counter;

pub use profile_store::ProfileStore;
pub use session::PortfolioSession;
pub use view_counter::{view_count_key, ViewCounter};
