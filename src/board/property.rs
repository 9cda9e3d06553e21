//! Property and property-set records.
//!
//! `Property` holds the per-square data that changes during play (owner,
//! houses, mortgage). `PropertySet` holds what members share: the kind of
//! square and the cost of a house. A square's set is a lookup by id, never
//! ownership; `Lot` joins the two for rule evaluation.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Property set identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetId(pub u16);

impl SetId {
    /// Create a new set ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Set({})", self.0)
    }
}

/// What kind of square a set's members are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Not purchasable: Go, jail, card squares, taxes.
    #[default]
    None,
    /// Streets that can be developed.
    Residential,
    /// Rent scales with the dice.
    Utility,
    /// Rent scales with how many stations the owner holds.
    Station,
}

/// A group of properties sharing a color and kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySet {
    pub id: SetId,

    /// Display color.
    pub color: String,

    pub kind: PropertyKind,

    /// Cost of one house on any member.
    #[serde(default)]
    pub building: i64,
}

impl PropertySet {
    #[must_use]
    pub fn new(id: SetId, color: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            id,
            color: color.into(),
            kind,
            building: 0,
        }
    }

    #[must_use]
    pub fn with_building(mut self, cost: i64) -> Self {
        self.building = cost;
        self
    }
}

/// One square of the board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,

    #[serde(default)]
    pub set: SetId,

    /// List price, or the amount due for a tax square.
    #[serde(default)]
    pub price: i64,

    /// Rent by development level (houses, or stations owned - 1).
    #[serde(default)]
    pub rent: Vec<i64>,

    #[serde(default)]
    pub houses: u8,

    #[serde(default)]
    pub owner: Option<PlayerId>,

    #[serde(default)]
    pub mortgaged: bool,

    /// Changed hands while mortgaged; lifting costs more.
    #[serde(default)]
    pub encumbered: bool,
}

impl Property {
    /// Create an unowned square in `set`.
    #[must_use]
    pub fn new(name: impl Into<String>, set: SetId) -> Self {
        Self {
            name: name.into(),
            set,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn with_rent(mut self, rent: impl Into<Vec<i64>>) -> Self {
        self.rent = rent.into();
        self
    }

    #[must_use]
    pub fn with_houses(mut self, houses: u8) -> Self {
        self.houses = houses;
        self
    }

    #[must_use]
    pub fn owned_by(mut self, owner: PlayerId) -> Self {
        self.owner = Some(owner);
        self
    }

    #[must_use]
    pub fn mortgaged(mut self) -> Self {
        self.mortgaged = true;
        self
    }

    /// Rent at a development level; levels past the table charge nothing.
    #[must_use]
    pub fn rent_at(&self, level: usize) -> i64 {
        self.rent.get(level).copied().unwrap_or(0)
    }
}

/// A property joined with its set.
#[derive(Clone, Copy, Debug)]
pub struct Lot<'a> {
    pub position: usize,
    pub property: &'a Property,
    pub set: &'a PropertySet,
}

impl<'a> Lot<'a> {
    #[must_use]
    pub fn kind(&self) -> PropertyKind {
        self.set.kind
    }

    /// Cost of one house here.
    #[must_use]
    pub fn building(&self) -> i64 {
        self.set.building
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.property.owner
    }

    /// Unowned and of a kind that can be bought.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        self.kind() != PropertyKind::None && self.property.owner.is_none()
    }

    /// A kindless square with a price charges that price on landing.
    #[must_use]
    pub fn is_tax(&self) -> bool {
        self.kind() == PropertyKind::None && self.property.price > 0
    }
}
