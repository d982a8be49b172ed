//! JSON Schema export for the snapshot wire format.

use serde_json::Value;
use tblparse_session::Snapshot;

/// JSON Schema describing a serialized [`Snapshot`].
pub fn snapshot_schema() -> anyhow::Result<Value> {
    let schema = schemars::schema_for!(Snapshot);
    Ok(serde_json::to_value(schema)?)
}
