// Saved-lead persistence: pass-through insert / list / delete, always
// scoped by the owning user id.

pub mod handlers;
pub mod store;
