//! Action descriptors: the engine's wire contract.
//!
//! Every engine call answers with an [`Offer`]: one [`Action`] the caller
//! should take next, or several the caller may choose between. Actions are
//! plain data. A closed enum keeps the vocabulary exhaustively matchable.
//!
//! On the wire an action is a tagged record:
//!
//! ```
//! use monopoly_engine::core::Action;
//!
//! let json = serde_json::to_string(&Action::Rent { position: 3, amount: 8 }).unwrap();
//! assert_eq!(json, r#"{"action":"rent","position":3,"amount":8}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::SmallVec;

/// A single next step offered to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Action {
    Roll,
    GoToJail,
    /// Leave jail, optionally moving to `position` and paying `amount`.
    LeaveJail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        position: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<i64>,
    },
    UseCard,
    ServeTime,
    /// Collect `amount` for passing the first square, then move.
    PassGo { position: usize, amount: i64 },
    DrawCard,
    /// Keep the drawn card in hand.
    CollectCard,
    /// Move forward to `position`, passing Go if it wraps.
    Jump { position: usize },
    GoTo { position: usize },
    Pay { amount: i64 },
    Collect { amount: i64 },
    PayEachPlayer { amount: i64 },
    CollectFromEachPlayer { amount: i64 },
    Buy { position: usize, price: i64 },
    Rent { position: usize, amount: i64 },
    EndTurn,
    Mortgage { position: usize, amount: i64 },
    LiftMortgage { position: usize, amount: i64 },
    Develop { position: usize, amount: i64 },
    Demolish { position: usize, amount: i64 },
    /// Put `position` up for auction. `interrupt` suspends the current turn.
    Auction {
        position: usize,
        #[serde(default)]
        interrupt: bool,
    },
    /// Offered without an amount; the caller fills one in to apply it.
    Bid {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        amount: Option<i64>,
    },
    Stay,
    EndAuction,
}

impl Action {
    /// Leave jail paying the fee, without moving.
    #[must_use]
    pub fn pay_to_leave_jail(fee: i64) -> Self {
        Action::LeaveJail {
            position: None,
            amount: Some(fee),
        }
    }

    /// An unfilled bid, as offered.
    #[must_use]
    pub const fn bid() -> Self {
        Action::Bid { amount: None }
    }

    /// A bid of `amount`, ready to apply.
    #[must_use]
    pub const fn bid_of(amount: i64) -> Self {
        Action::Bid {
            amount: Some(amount),
        }
    }

    /// Whether this action, offered alone, leaves the caller nothing to
    /// decide. Rolling, ending the turn and anything property or auction
    /// related are never forced.
    #[must_use]
    pub fn is_forced(&self) -> bool {
        matches!(
            self,
            Action::GoToJail
                | Action::LeaveJail { .. }
                | Action::ServeTime
                | Action::PassGo { .. }
                | Action::DrawCard
                | Action::CollectCard
                | Action::Jump { .. }
                | Action::GoTo { .. }
                | Action::Pay { .. }
                | Action::Collect { .. }
                | Action::PayEachPlayer { .. }
                | Action::CollectFromEachPlayer { .. }
                | Action::Rent { .. }
                | Action::EndAuction
        )
    }

    /// The wire tag of this action.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Roll => "roll",
            Action::GoToJail => "goToJail",
            Action::LeaveJail { .. } => "leaveJail",
            Action::UseCard => "useCard",
            Action::ServeTime => "serveTime",
            Action::PassGo { .. } => "passGo",
            Action::DrawCard => "drawCard",
            Action::CollectCard => "collectCard",
            Action::Jump { .. } => "jump",
            Action::GoTo { .. } => "goTo",
            Action::Pay { .. } => "pay",
            Action::Collect { .. } => "collect",
            Action::PayEachPlayer { .. } => "payEachPlayer",
            Action::CollectFromEachPlayer { .. } => "collectFromEachPlayer",
            Action::Buy { .. } => "buy",
            Action::Rent { .. } => "rent",
            Action::EndTurn => "endTurn",
            Action::Mortgage { .. } => "mortgage",
            Action::LiftMortgage { .. } => "liftMortgage",
            Action::Develop { .. } => "develop",
            Action::Demolish { .. } => "demolish",
            Action::Auction { .. } => "auction",
            Action::Bid { .. } => "bid",
            Action::Stay => "stay",
            Action::EndAuction => "endAuction",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What the engine offers next.
///
/// A single action means "do this next"; several mean "these are offered
/// together, pick one". Serializes as a bare action or an array.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Offer {
    /// SmallVec keeps the common 1-3 entry offers off the heap.
    actions: SmallVec<[Action; 3]>,
}

impl Offer {
    /// Offer exactly one action.
    #[must_use]
    pub fn one(action: Action) -> Self {
        let mut actions = SmallVec::new();
        actions.push(action);
        Self { actions }
    }

    /// Offer a choice between actions, in order.
    #[must_use]
    pub fn choice(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            actions: actions.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn end_turn() -> Self {
        Self::one(Action::EndTurn)
    }

    #[must_use]
    pub fn roll() -> Self {
        Self::one(Action::Roll)
    }

    /// The `[bid, stay]` pair every open auction offers.
    #[must_use]
    pub fn bid_or_stay() -> Self {
        Self::choice([Action::bid(), Action::Stay])
    }

    /// Add an action to the end of the offer.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// The first (or only) action.
    #[must_use]
    pub fn first(&self) -> Option<&Action> {
        self.actions.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// True when exactly this one action is offered.
    #[must_use]
    pub fn is(&self, action: &Action) -> bool {
        self.actions.len() == 1 && self.actions[0] == *action
    }

    #[must_use]
    pub fn contains(&self, action: &Action) -> bool {
        self.actions.contains(action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

impl From<Action> for Offer {
    fn from(action: Action) -> Self {
        Self::one(action)
    }
}

impl Default for Offer {
    fn default() -> Self {
        Self::roll()
    }
}

impl IntoIterator for Offer {
    type Item = Action;
    type IntoIter = smallvec::IntoIter<[Action; 3]>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl Serialize for Offer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.actions.as_slice() {
            [single] => single.serialize(serializer),
            many => many.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Offer {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            One(Action),
            Many(Vec<Action>),
        }

        Ok(match Wire::deserialize(deserializer)? {
            Wire::One(action) => Offer::one(action),
            Wire::Many(actions) => Offer::choice(actions),
        })
    }
}
