//! Destinations tagged with a reference back to their originating record.

use crate::GeoPoint;

/// A coordinate tagged with an opaque reference to a domain record.
///
/// The reference lets a caller map the planned order back to its own
/// objects, e.g. a site identifier. Destinations are transient: they are
/// built per planning request and discarded afterwards.
///
/// # Examples
/// ```
/// use siteroute_core::{Destination, GeoPoint};
///
/// let site = Destination::new("site-7", GeoPoint::new(41.0, 29.0));
/// assert_eq!(site.reference, "site-7");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Destination<R> {
    /// Caller-defined reference to the originating record.
    pub reference: R,
    /// Where the destination is.
    pub location: GeoPoint,
}

impl<R> Destination<R> {
    /// Tag `location` with `reference`.
    #[must_use]
    pub const fn new(reference: R, location: GeoPoint) -> Self {
        Self {
            reference,
            location,
        }
    }

    /// Replace the reference while keeping the location.
    #[must_use]
    pub fn map_reference<S, F>(self, f: F) -> Destination<S>
    where
        F: FnOnce(R) -> S,
    {
        Destination::new(f(self.reference), self.location)
    }
}
