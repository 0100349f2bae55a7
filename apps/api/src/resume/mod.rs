// Resume data store: reducer-style commands over one owned session, plus
// explicit save/reload through a key/value store.

pub mod commands;
pub mod defaults;
pub mod handlers;
pub mod ids;
pub mod lists;
pub mod persistence;
pub mod store;

pub use commands::ResumeState;
pub use store::ResumeStore;
