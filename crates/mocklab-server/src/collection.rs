//! Generic Entity Collection
//!
//! Insertion-order-preserving container of entities owned by one parent
//! object. Identifier allocation and uniqueness checking happen at insertion,
//! driven by a per-collection [`IdAllocation`] policy rather than per-kind
//! container subtypes.

use crate::entity::{Entity, UNASSIGNED_ID};
use crate::error::{ServerError, ServerResult};

/// Identifier allocation policy for a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdAllocation {
    /// Next identifier is `1 + max(current identifiers, default 0)`
    ///
    /// Matches the hosting service's historical behavior: after the
    /// highest-numbered entity is removed, its identifier can be reissued to a
    /// later insertion.
    MaxPlusOne,
    /// High-water-mark counter; identifiers are never reissued after removal
    Monotonic,
}

/// Ordered, identifier-keyed container of entities
///
/// Semantically a map from identifier to entity with insertion order preserved
/// for iteration. Invariant: no two contained entities share an identifier.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
    policy: IdAllocation,
    /// Highest identifier ever assigned; only consulted under [`IdAllocation::Monotonic`]
    high_water: i64,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection with the default `MaxPlusOne` policy
    pub fn new() -> Self {
        Self::with_policy(IdAllocation::MaxPlusOne)
    }

    /// Create an empty collection with an explicit allocation policy
    pub fn with_policy(policy: IdAllocation) -> Self {
        Collection {
            items: Vec::new(),
            policy,
            high_water: 0,
        }
    }

    /// Insert an entity, allocating an identifier if it has none
    ///
    /// An entity arriving with [`UNASSIGNED_ID`] is assigned the next
    /// identifier under this collection's policy. An entity arriving with an
    /// explicit identifier is inserted verbatim (the seeding path), unless the
    /// identifier is already occupied, in which case the insertion fails with
    /// [`ServerError::AlreadyExists`] and the collection is left unchanged.
    ///
    /// Returns the identifier under which the entity was stored.
    pub fn add(&mut self, mut entity: T) -> ServerResult<i64> {
        if entity.id() == UNASSIGNED_ID {
            entity.set_id(self.next_id());
        } else if self.get_by_id(entity.id()).is_some() {
            return Err(ServerError::already_exists(format!(
                "entity with id {} already exists",
                entity.id()
            )));
        }

        let id = entity.id();
        if id > self.high_water {
            self.high_water = id;
        }
        self.items.push(entity);
        Ok(id)
    }

    /// Look up an entity by identifier
    ///
    /// Returns the first entity whose identifier matches, or `None`. Lookup is
    /// a query, not a guarantee.
    pub fn get_by_id(&self, id: i64) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Look up an entity by identifier for in-place mutation
    pub fn get_mut_by_id(&mut self, id: i64) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Remove an entity by identifier, returning it if present
    pub fn remove_by_id(&mut self, id: i64) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Iterate over the entities in insertion order
    ///
    /// No identifier ordering is guaranteed; seeded entities keep whatever
    /// identifiers they arrived with.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Iterate mutably over the entities in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    /// Number of contained entities
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn next_id(&self) -> i64 {
        match self.policy {
            IdAllocation::MaxPlusOne => {
                self.items.iter().map(Entity::id).max().unwrap_or(0) + 1
            }
            IdAllocation::Monotonic => self.high_water + 1,
        }
    }
}

impl<'a, T: Entity> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
