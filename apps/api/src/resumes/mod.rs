// Résumé upload, comparison against job roles, and scan history.
// service.rs owns the workflows; handlers.rs only adapts HTTP to them.

pub mod handlers;
pub mod service;
