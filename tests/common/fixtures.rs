use serde_json::{Value, json};

/// A document with a single profile.
pub fn document(profile: Value, root: Value) -> Value {
    json!({
        "profiles": [profile],
        "root": root
    })
}

pub fn profile(name: &str, width: f64, row_height: f64) -> Value {
    json!({ "name": name, "width": width, "rowHeight": row_height })
}

pub fn table(rows: Vec<Value>) -> Value {
    json!({ "table": true, "label": "table", "children": rows })
}

pub fn row(label: &str, columns: Vec<Value>) -> Value {
    json!({ "row": true, "label": label, "children": columns })
}

/// A leaf column whose content has a fixed height.
pub fn cell(label: &str, content_height: f64) -> Value {
    json!({ "column": true, "label": label, "content": { "fixed": content_height } })
}

/// A leaf column with a width weight for `profile`.
pub fn weighted_cell(label: &str, profile: &str, width: f64) -> Value {
    json!({
        "column": true,
        "label": label,
        "config": { profile: { "width": width } }
    })
}

/// A column holding nested rows.
pub fn compound(label: &str, rows: Vec<Value>) -> Value {
    json!({ "column": true, "label": label, "children": rows })
}

/// A nested row with a height weight for `profile`.
pub fn weighted_row(label: &str, profile: &str, height: f64, columns: Vec<Value>) -> Value {
    json!({
        "row": true,
        "label": label,
        "config": { profile: { "height": height } },
        "children": columns
    })
}

pub fn hidden(mut node: Value) -> Value {
    node["hidden"] = json!(true);
    node
}
