//! Core types shared by the resolver and the verifier.

mod link;

pub use link::LinkKind;
