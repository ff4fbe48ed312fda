//! ICD-10 Category type.

/// A 3-character diagnostic category within a block, e.g. `A00`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Category {
    /// 3-character alphanumeric code.
    pub id: String,
    /// Human-readable category label.
    pub label: String,
    /// Range code of the owning block.
    pub block_id: String,
}
