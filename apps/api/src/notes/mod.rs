// Technical notes: categories, note listings and rendered note pages.
// Content interpretation lives in crate::content; this module only wires it to HTTP.

pub mod handlers;
