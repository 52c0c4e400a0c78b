// ABOUTME: Type-safe identifiers for runtime resources.
// ABOUTME: Keeps provisioned container ids distinct from plain strings.

mod id;

pub use id::ContainerId;
