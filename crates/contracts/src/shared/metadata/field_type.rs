//! Field type enumeration for model descriptors

/// How a field is rendered, parsed and serialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldType {
    #[default]
    String,
    Number,
    Integer,
    Boolean,
    /// `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp
    DateTime,
    /// Numeric code of a `configs.json` scope
    Status(&'static str),
    /// Numeric code of a `parameters.json` scope
    Parameter(&'static str),
    /// Id of another entity, the payload is the target route
    ForeignKey(&'static str),
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Status(_) => "status",
            Self::Parameter(_) => "parameter",
            Self::ForeignKey(_) => "foreign_key",
        }
    }

    /// Config scope for coded fields (status or parameter)
    pub fn scope(&self) -> Option<&'static str> {
        match self {
            Self::Status(scope) | Self::Parameter(scope) => Some(scope),
            _ => None,
        }
    }

    /// Value is sent to the API as a JSON number
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Number | Self::Integer | Self::Status(_) | Self::Parameter(_)
        )
    }

    /// Value must be a whole number
    pub fn is_integral(&self) -> bool {
        matches!(self, Self::Integer | Self::Status(_) | Self::Parameter(_))
    }
}

/// Sort direction for sortable list columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
