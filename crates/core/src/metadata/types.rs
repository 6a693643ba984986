#![forbid(unsafe_code)]

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A statically known metadata facet stored under `TYPE_NAME`.
pub trait MetadataType: Serialize + DeserializeOwned {
    const TYPE_NAME: &'static str;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub autoincrement: bool,
    pub default: Option<String>,
    pub nullable: bool,
    #[serde(rename = "type")]
    pub data_type: String,
    pub generic_type: Option<String>,
    pub comment: Option<String>,
}

/// Column name to column description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableColumns(pub BTreeMap<String, TableColumn>);

impl MetadataType for TableColumns {
    const TYPE_NAME: &'static str = "columns";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TablePrimaryKey {
    pub name: String,
    pub constrained_columns: Vec<String>,
}

impl MetadataType for TablePrimaryKey {
    const TYPE_NAME: &'static str = "primary_key";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableForeignKey {
    pub constrained_columns: Vec<String>,
    pub referred_columns: Vec<String>,
    pub referred_schema: String,
    pub referred_table: String,
}

/// Constraint name to foreign key.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableForeignKeys(pub BTreeMap<String, TableForeignKey>);

impl MetadataType for TableForeignKeys {
    const TYPE_NAME: &'static str = "foreign_keys";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIndex {
    pub columns: Vec<String>,
    pub unique: bool,
}

/// Index name to index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableIndexes(pub BTreeMap<String, TableIndex>);

impl MetadataType for TableIndexes {
    const TYPE_NAME: &'static str = "indexes";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableComment(pub String);

impl MetadataType for TableComment {
    const TYPE_NAME: &'static str = "comment";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableViewDefinition(pub String);

impl MetadataType for TableViewDefinition {
    const TYPE_NAME: &'static str = "view_definition";
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLocation {
    pub database: String,
    pub instance: String,
    pub schema: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<String>,
}

impl MetadataType for TableLocation {
    const TYPE_NAME: &'static str = "location";
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableUserAccess {
    pub privileges: Vec<String>,
    pub read: bool,
    pub write: bool,
}

/// Grantee to privileges.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TableAccess(pub BTreeMap<String, TableUserAccess>);

impl MetadataType for TableAccess {
    const TYPE_NAME: &'static str = "access";
}
