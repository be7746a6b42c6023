//! Typed read access to actor records in a frame.
//!
//! Actor records are free-form objects. The fields below are the ones
//! the viewer understands; anything else is reachable through
//! [`ActorView::field`].
//!
//! | key        | meaning                                  |
//! |------------|------------------------------------------|
//! | `type`     | `"Player"` or `"Boss"`                   |
//! | `name`     | display name                             |
//! | `class`    | player class                             |
//! | `position` | `{x, y, z}`; absent actors are not drawn |
//! | `heading`  | radians                                  |
//! | `state`    | `"normal"`, `"Down"` or `"Dead"`         |
//! | `health`   | percent, 0 to 100                        |
//! | `color`    | CSS-style colour string                  |
//! | `buff`     | buff name to stack count                 |

use serde::{Deserialize, Serialize};
use serde_json::Value;
use vantage_core::{Position, StateTree};

/// What an actor is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    /// A player character.
    Player,
    /// An encounter boss.
    Boss,
    /// Anything else, or no `type` at all.
    #[serde(other)]
    Other,
}

impl ActorKind {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("Player") => Self::Player,
            Some("Boss") => Self::Boss,
            _ => Self::Other,
        }
    }
}

/// An actor's life state. Unknown or missing states read as `Normal`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorStatus {
    /// Alive and up.
    #[default]
    #[serde(rename = "normal")]
    Normal,
    /// Downed.
    Down,
    /// Dead.
    Dead,
}

impl ActorStatus {
    fn from_value(value: Option<&Value>) -> Self {
        match value.and_then(Value::as_str) {
            Some("Down") => Self::Down,
            Some("Dead") => Self::Dead,
            _ => Self::Normal,
        }
    }
}

/// A borrowed view of one actor's record in a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActorView<'a> {
    id: &'a str,
    fields: &'a StateTree,
}

impl<'a> ActorView<'a> {
    /// View `fields` as the record of actor `id`.
    pub fn new(id: &'a str, fields: &'a StateTree) -> Self {
        Self { id, fields }
    }

    /// The actor id (its key in the state tree).
    pub fn id(&self) -> &'a str {
        self.id
    }

    /// Raw access to any field.
    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.fields.get(key)
    }

    /// The whole record.
    pub fn fields(&self) -> &'a StateTree {
        self.fields
    }

    /// What the actor is.
    pub fn kind(&self) -> ActorKind {
        ActorKind::from_value(self.field("type"))
    }

    /// Display name, falling back to the actor id.
    pub fn name(&self) -> &'a str {
        self.field("name").and_then(Value::as_str).unwrap_or(self.id)
    }

    /// Player class, if recorded.
    pub fn class(&self) -> Option<&'a str> {
        self.field("class").and_then(Value::as_str)
    }

    /// World position. `None` means the actor is not drawn.
    pub fn position(&self) -> Option<Position> {
        self.field("position").and_then(Position::from_value)
    }

    /// Facing in radians.
    pub fn heading(&self) -> Option<f64> {
        self.field("heading")
            .and_then(Value::as_f64)
            .filter(|h| h.is_finite())
    }

    /// Life state.
    pub fn status(&self) -> ActorStatus {
        ActorStatus::from_value(self.field("state"))
    }

    /// Health percentage.
    pub fn health(&self) -> Option<f64> {
        self.field("health").and_then(Value::as_f64)
    }

    /// Marker colour.
    pub fn color(&self) -> Option<&'a str> {
        self.field("color").and_then(Value::as_str)
    }

    /// A cumulative numeric counter such as `bossdamage`.
    ///
    /// Numeric strings are accepted; integer prefixes of other strings
    /// are not.
    pub fn counter(&self, name: &str) -> Option<f64> {
        numeric(self.field(name)?)
    }

    /// Buff name and stack count, in record order. Non-numeric entries
    /// are skipped.
    pub fn buffs(&self) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.field("buff")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|buffs| buffs.iter())
            .filter_map(|(name, stacks)| Some((name.as_str(), numeric(stacks)?)))
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> StateTree {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn reads_player_fields() {
        let fields = record(json!({
            "type": "Player",
            "name": "Alice",
            "class": "Guardian",
            "position": {"x": 1.0, "y": 2.0, "z": 3.0},
            "heading": 1.5,
            "state": "Down",
            "color": "#ff0000",
            "bossdamage": 1200,
            "cleavedamage": "300",
            "buff": {"might": 25, "fury": 1, "broken": "x"},
        }));
        let actor = ActorView::new("Player.1", &fields);
        assert_eq!(actor.kind(), ActorKind::Player);
        assert_eq!(actor.name(), "Alice");
        assert_eq!(actor.class(), Some("Guardian"));
        assert_eq!(actor.position(), Some(Position::new(1.0, 2.0, 3.0)));
        assert_eq!(actor.heading(), Some(1.5));
        assert_eq!(actor.status(), ActorStatus::Down);
        assert_eq!(actor.color(), Some("#ff0000"));
        assert_eq!(actor.counter("bossdamage"), Some(1200.0));
        assert_eq!(actor.counter("cleavedamage"), Some(300.0));
        assert_eq!(actor.counter("missing"), None);
        assert_eq!(
            actor.buffs().collect::<Vec<_>>(),
            vec![("might", 25.0), ("fury", 1.0)]
        );
    }

    #[test]
    fn sparse_record_defaults() {
        let fields = record(json!({"type": "Minion"}));
        let actor = ActorView::new("adds.3", &fields);
        assert_eq!(actor.kind(), ActorKind::Other);
        assert_eq!(actor.name(), "adds.3");
        assert_eq!(actor.status(), ActorStatus::Normal);
        assert_eq!(actor.position(), None);
        assert_eq!(actor.health(), None);
        assert_eq!(actor.buffs().count(), 0);
    }
}
