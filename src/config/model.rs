use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::{
    config::schema::{self, ConfigField},
    foundation::error::{VitrineError, VitrineResult},
};

#[derive(Clone, Debug, PartialEq)]
/// One immutable configuration snapshot.
///
/// The tree mirrors the exported JSON document: top-level leaves plus the `button` and
/// `gallery` objects. Snapshots are never edited in place; [`Configuration::updated`] and
/// [`Configuration::merged_shallow`] return new values and leave `self` untouched.
pub struct Configuration {
    tree: Map<String, Value>,
}

impl Default for Configuration {
    /// The startup snapshot.
    fn default() -> Self {
        let mut config = Self { tree: Map::new() };
        for field in ConfigField::ALL {
            config.put_leaf(field, field.default_value());
        }
        config
    }
}

impl Configuration {
    /// Build a snapshot from a JSON object, validating every schema leaf it carries.
    ///
    /// Leaves absent from `value` stay absent; keys outside the schema are dropped.
    pub fn from_value(value: Value) -> VitrineResult<Self> {
        let Value::Object(incoming) = value else {
            return Err(VitrineError::validation("configuration must be a JSON object"));
        };
        let mut tree = Map::new();
        for (key, v) in incoming {
            if let Some(checked) = schema::check_top_level(&key, v)? {
                tree.insert(key, checked);
            }
        }
        Ok(Self { tree })
    }

    /// Wrap a JSON object as-is, without coercion or constraint checks.
    ///
    /// Meant for replaying trees captured elsewhere; the projector copes with unknown
    /// tokens but reports missing leaves.
    pub fn from_raw(value: Value) -> VitrineResult<Self> {
        match value {
            Value::Object(tree) => Ok(Self { tree }),
            other => Err(VitrineError::validation(format!(
                "configuration must be a JSON object, got {other}"
            ))),
        }
    }

    /// The whole tree as a JSON value.
    pub fn to_value(&self) -> Value {
        Value::Object(self.tree.clone())
    }

    /// Current value of a leaf, if present.
    pub fn leaf(&self, field: ConfigField) -> Option<&Value> {
        self.get_path(field.path())
    }

    /// Walk an arbitrary key sequence.
    pub fn get_path<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
        let (first, rest) = segments.split_first()?;
        let mut cur = self.tree.get(first.as_ref())?;
        for seg in rest {
            cur = cur.as_object()?.get(seg.as_ref())?;
        }
        Some(cur)
    }

    /// Leaves of the schema that this snapshot does not carry.
    pub fn missing_leaves(&self) -> Vec<ConfigField> {
        ConfigField::ALL
            .into_iter()
            .filter(|f| self.leaf(*f).is_none())
            .collect()
    }

    /// A new snapshot with `field` set to `value` after coercion and constraint checks.
    pub fn updated(&self, field: ConfigField, value: Value) -> VitrineResult<Self> {
        let checked = field.check(value)?;
        let mut next = self.clone();
        next.put_leaf(field, checked);
        Ok(next)
    }

    /// A new snapshot with the dynamic `path` set to `value`.
    pub fn updated_path<S: AsRef<str>>(&self, path: &[S], value: Value) -> VitrineResult<Self> {
        self.updated(ConfigField::from_path(path)?, value)
    }

    /// A new snapshot where each top-level key of `incoming` replaces the current one.
    ///
    /// Group objects are swapped wholesale, not merged: `{"button": {"borderRadius": 5}}`
    /// leaves a `button` object holding only `borderRadius`. All entries are validated
    /// before anything is applied.
    pub fn merged_shallow(&self, incoming: Map<String, Value>) -> VitrineResult<Self> {
        let mut checked = Vec::with_capacity(incoming.len());
        for (key, v) in incoming {
            if let Some(v) = schema::check_top_level(&key, v)? {
                checked.push((key, v));
            }
        }
        let mut next = self.clone();
        for (key, v) in checked {
            next.tree.insert(key, v);
        }
        Ok(next)
    }

    fn put_leaf(&mut self, field: ConfigField, value: Value) {
        match field.group() {
            None => {
                self.tree.insert(field.key().to_owned(), value);
            }
            Some(group) => {
                let slot = self
                    .tree
                    .entry(group.to_owned())
                    .or_insert_with(|| Value::Object(Map::new()));
                if !slot.is_object() {
                    *slot = Value::Object(Map::new());
                }
                if let Value::Object(obj) = slot {
                    obj.insert(field.key().to_owned(), value);
                }
            }
        }
    }
}

impl Serialize for Configuration {
    /// Schema keys come out in schema order, anything else afterwards.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let order = schema::top_level_keys();
        serialize_ordered(&self.tree, &order, serializer, true)
    }
}

fn serialize_ordered<S: Serializer>(
    map: &Map<String, Value>,
    order: &[&str],
    serializer: S,
    top_level: bool,
) -> Result<S::Ok, S::Error> {
    let mut out = serializer.serialize_map(Some(map.len()))?;
    for key in order {
        let Some(value) = map.get(*key) else {
            continue;
        };
        match value {
            Value::Object(obj) if top_level => {
                let sub_order: Vec<&str> = schema::group_fields(key).map(|f| f.key()).collect();
                out.serialize_entry(*key, &GroupRef { obj, order: sub_order })?;
            }
            other => out.serialize_entry(*key, other)?,
        }
    }
    for (key, value) in map {
        if !order.contains(&key.as_str()) {
            out.serialize_entry(key, value)?;
        }
    }
    out.end()
}

struct GroupRef<'a> {
    obj: &'a Map<String, Value>,
    order: Vec<&'static str>,
}

impl Serialize for GroupRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_ordered(self.obj, &self.order, serializer, false)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
