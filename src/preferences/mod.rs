//! Preference storage for the matching engine.
//!
//! ## Components
//!
//! - [`PreferenceProfile`]: Validated input for both groups
//! - [`PreferenceNode`]: One list entry with a forward slab pointer
//! - [`PreferenceQueue`]: A proposer's untried receivers, consumed from the head
//! - [`PreferenceStore`]: All proposer queues over a shared slab
//! - [`RankTable`]: Flat `(owner, other) -> rank` lookup
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Validate profile | O(n²) |
//! | Build store / rank table | O(n²) |
//! | Pop next receiver | O(1) |
//! | Rank lookup | O(1) |

pub mod node;
pub mod queue;
pub mod store;
pub mod rank;
pub mod profile;

pub use node::PreferenceNode;
pub use queue::PreferenceQueue;
pub use store::PreferenceStore;
pub use rank::RankTable;
pub use profile::PreferenceProfile;
