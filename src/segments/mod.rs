//! Segment canonicalization for annotation output.
//!
//! A traced path is reduced to its consecutive point pairs. Each pair is
//! rewritten as an anchor plus displacement, where the anchor is the endpoint
//! with the smaller `x` (ties broken by the smaller `y`). Segments keep their
//! input order; only the two endpoints within a segment are reordered.
//!
//! This is the single place line direction is decided, so downstream training
//! targets are invariant to the direction a path was traced in.
mod canonical;

pub use self::canonical::{canonicalize, canonicalize_pair, CanonicalSegment};
