//! Stored Entity Abstraction

/// Identifier value meaning "not yet assigned"
pub const UNASSIGNED_ID: i64 = 0;

/// A stored domain object with a numeric identifier
///
/// Every object held by a [`Collection`](crate::Collection) implements this
/// trait. An identifier of [`UNASSIGNED_ID`] marks a transient
/// value that has not been inserted yet; the collection assigns a real
/// identifier on insertion. Parent relationships are carried as explicit
/// parent-identifier fields on the child (never as owning references), so the
/// only ownership edge is the child's containment in its parent's collection.
pub trait Entity {
    /// Current identifier, [`UNASSIGNED_ID`] if none has been assigned
    fn id(&self) -> i64;

    /// Assign the identifier
    ///
    /// Called by the owning collection during insertion.
    fn set_id(&mut self, id: i64);
}
