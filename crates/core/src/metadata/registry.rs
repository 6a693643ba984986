#![forbid(unsafe_code)]

use super::types::*;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataShape {
    /// A single JSON object with fixed fields.
    Record,
    /// A JSON object keyed by a dynamic name (column, constraint, grantee).
    Keyed,
    /// A bare JSON string.
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetadataTypeInfo {
    pub name: &'static str,
    pub shape: MetadataShape,
    pub description: &'static str,
}

/// Metadata facets known at build time. The catalog stores any type name;
/// this table only gives the well-known ones a typed view.
pub const REGISTRY: &[MetadataTypeInfo] = &[
    MetadataTypeInfo {
        name: TableColumns::TYPE_NAME,
        shape: MetadataShape::Keyed,
        description: "column definitions of a table or view",
    },
    MetadataTypeInfo {
        name: TablePrimaryKey::TYPE_NAME,
        shape: MetadataShape::Record,
        description: "primary key constraint",
    },
    MetadataTypeInfo {
        name: TableForeignKeys::TYPE_NAME,
        shape: MetadataShape::Keyed,
        description: "foreign key constraints by name",
    },
    MetadataTypeInfo {
        name: TableIndexes::TYPE_NAME,
        shape: MetadataShape::Keyed,
        description: "indexes by name",
    },
    MetadataTypeInfo {
        name: TableComment::TYPE_NAME,
        shape: MetadataShape::Text,
        description: "free-form table comment",
    },
    MetadataTypeInfo {
        name: TableViewDefinition::TYPE_NAME,
        shape: MetadataShape::Text,
        description: "SQL text of a view",
    },
    MetadataTypeInfo {
        name: TableLocation::TYPE_NAME,
        shape: MetadataShape::Record,
        description: "database, instance and schema a table lives in",
    },
    MetadataTypeInfo {
        name: TableAccess::TYPE_NAME,
        shape: MetadataShape::Keyed,
        description: "privileges by grantee",
    },
];

pub fn lookup(name: &str) -> Option<&'static MetadataTypeInfo> {
    REGISTRY.iter().find(|info| info.name == name)
}

pub fn is_registered(name: &str) -> bool {
    lookup(name).is_some()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KnownMetadata {
    Columns(TableColumns),
    PrimaryKey(TablePrimaryKey),
    ForeignKeys(TableForeignKeys),
    Indexes(TableIndexes),
    Comment(TableComment),
    ViewDefinition(TableViewDefinition),
    Location(TableLocation),
    Access(TableAccess),
}

impl KnownMetadata {
    /// Typed view of a stored facet. `Ok(None)` for unregistered type names.
    pub fn decode(type_name: &str, value: &Value) -> Result<Option<Self>, serde_json::Error> {
        fn typed<T: MetadataType>(value: &Value) -> Result<T, serde_json::Error> {
            serde_json::from_value(value.clone())
        }

        let decoded = match type_name {
            TableColumns::TYPE_NAME => Self::Columns(typed(value)?),
            TablePrimaryKey::TYPE_NAME => Self::PrimaryKey(typed(value)?),
            TableForeignKeys::TYPE_NAME => Self::ForeignKeys(typed(value)?),
            TableIndexes::TYPE_NAME => Self::Indexes(typed(value)?),
            TableComment::TYPE_NAME => Self::Comment(typed(value)?),
            TableViewDefinition::TYPE_NAME => Self::ViewDefinition(typed(value)?),
            TableLocation::TYPE_NAME => Self::Location(typed(value)?),
            TableAccess::TYPE_NAME => Self::Access(typed(value)?),
            _ => return Ok(None),
        };
        Ok(Some(decoded))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Columns(_) => TableColumns::TYPE_NAME,
            Self::PrimaryKey(_) => TablePrimaryKey::TYPE_NAME,
            Self::ForeignKeys(_) => TableForeignKeys::TYPE_NAME,
            Self::Indexes(_) => TableIndexes::TYPE_NAME,
            Self::Comment(_) => TableComment::TYPE_NAME,
            Self::ViewDefinition(_) => TableViewDefinition::TYPE_NAME,
            Self::Location(_) => TableLocation::TYPE_NAME,
            Self::Access(_) => TableAccess::TYPE_NAME,
        }
    }
}
