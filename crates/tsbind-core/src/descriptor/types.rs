use serde::{Deserialize, Serialize};

/// Scalar kinds of the source type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    /// Boolean
    Bool,
    /// 8-bit integer
    Byte,
    /// 16-bit integer
    Short,
    /// 32-bit integer
    Int,
    /// 64-bit integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Arbitrary-precision integer
    BigInteger,
    /// Arbitrary-precision decimal
    BigDecimal,
    /// Single character
    Char,
    /// String
    String,
    /// Calendar date
    Date,
    /// Date with time of day
    DateTime,
    /// Time of day
    Time,
    /// No value
    Void,
    /// Untyped object
    Any,
}

impl PrimitiveKind {
    /// Look up the TypeScript type for this kind.
    pub fn ts_type(&self) -> &'static str {
        match self {
            PrimitiveKind::Bool => "boolean",
            PrimitiveKind::Byte
            | PrimitiveKind::Short
            | PrimitiveKind::Int
            | PrimitiveKind::Long
            | PrimitiveKind::Float
            | PrimitiveKind::Double
            | PrimitiveKind::BigInteger
            | PrimitiveKind::BigDecimal => "number",
            PrimitiveKind::Char | PrimitiveKind::String => "string",
            PrimitiveKind::Date | PrimitiveKind::DateTime | PrimitiveKind::Time => "Date",
            PrimitiveKind::Void => "void",
            PrimitiveKind::Any => "any",
        }
    }

    /// Check if this kind maps to the TypeScript string type.
    pub fn is_string_like(&self) -> bool {
        matches!(self, PrimitiveKind::Char | PrimitiveKind::String)
    }

    /// Check if this kind maps to the TypeScript number type.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            PrimitiveKind::Byte
                | PrimitiveKind::Short
                | PrimitiveKind::Int
                | PrimitiveKind::Long
                | PrimitiveKind::Float
                | PrimitiveKind::Double
                | PrimitiveKind::BigInteger
                | PrimitiveKind::BigDecimal
        )
    }
}

/// Shape classification of a parameterized type, assigned once when the
/// descriptor is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenericKind {
    /// List/set/queue/deque family.
    Collection,
    /// Keyed container family.
    Map,
    /// Optional wrapper.
    Optional,
    /// Any other named generic type.
    Other,
}

impl GenericKind {
    /// Classify a raw generic name by container family. The whole
    /// list/set/queue/deque family collapses into one collection class.
    pub fn classify(name: &str) -> Self {
        match simple_name(name) {
            "Vec" | "VecDeque" | "LinkedList" | "HashSet" | "BTreeSet" | "BinaryHeap"
            | "List" | "ArrayList" | "Set" | "TreeSet" | "Queue" | "Deque" | "ArrayDeque"
            | "Collection" => GenericKind::Collection,
            "HashMap" | "BTreeMap" | "Map" | "TreeMap" | "LinkedHashMap" | "IndexMap" => {
                GenericKind::Map
            }
            "Option" | "Optional" => GenericKind::Optional,
            _ => GenericKind::Other,
        }
    }
}

/// Abstract representation of a source type, independent of any runtime
/// object.
///
/// The conversion to TypeScript is total: every descriptor renders to
/// exactly one non-empty type expression, degrading to `any` where the
/// source type is unknown or under-specified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeDescriptor {
    /// Non-reified type position (raw generic use, absent input).
    Unknown,
    /// Scalar kind.
    Primitive(PrimitiveKind),
    /// Enum type, by name. Members are not reified.
    Enum(String),
    /// Array of an element type.
    Array(Box<TypeDescriptor>),
    /// Homogeneous container; `None` is the raw, unparameterized use.
    Collection(Option<Box<TypeDescriptor>>),
    /// Keyed container; `None` sides are raw.
    Map {
        key: Option<Box<TypeDescriptor>>,
        value: Option<Box<TypeDescriptor>>,
    },
    /// Optional wrapper around an inner type.
    Optional(Box<TypeDescriptor>),
    /// Named generic type with its classification and arguments.
    Parameterized {
        name: String,
        kind: GenericKind,
        args: Vec<TypeDescriptor>,
    },
    /// Unclassified named type; emitted verbatim as a last resort.
    Opaque(String),
}

impl TypeDescriptor {
    /// Create a parameterized descriptor, classifying the raw name by
    /// container family.
    pub fn parameterized(name: impl Into<String>, args: Vec<TypeDescriptor>) -> Self {
        let name = name.into();
        let kind = GenericKind::classify(&name);
        TypeDescriptor::Parameterized { name, kind, args }
    }

    /// Create an array descriptor.
    pub fn array(element: TypeDescriptor) -> Self {
        TypeDescriptor::Array(Box::new(element))
    }

    /// Create a collection descriptor with a reified element type.
    pub fn collection(element: TypeDescriptor) -> Self {
        TypeDescriptor::Collection(Some(Box::new(element)))
    }

    /// Create a map descriptor with reified key and value types.
    pub fn map(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::Map {
            key: Some(Box::new(key)),
            value: Some(Box::new(value)),
        }
    }

    /// Create an optional descriptor.
    pub fn optional(inner: TypeDescriptor) -> Self {
        TypeDescriptor::Optional(Box::new(inner))
    }

    /// Convert this descriptor to a TypeScript type expression.
    ///
    /// Recursion depth is bounded by the nesting depth of the descriptor.
    /// Every call recomputes from scratch; descriptors are cheap and there
    /// is no hidden state.
    pub fn to_typescript(&self) -> String {
        match self {
            TypeDescriptor::Unknown => "any".to_string(),
            TypeDescriptor::Primitive(kind) => kind.ts_type().to_string(),
            // Enum members collapse into the string type.
            TypeDescriptor::Enum(_) => PrimitiveKind::String.ts_type().to_string(),
            TypeDescriptor::Array(element) => format!("{}[]", element.to_typescript()),
            TypeDescriptor::Collection(None) => "any[]".to_string(),
            TypeDescriptor::Collection(Some(element)) => format!("{}[]", element.to_typescript()),
            TypeDescriptor::Map { key, value } => {
                format!(
                    "{{ [key: {}]: {} }}",
                    key_type(key.as_deref()),
                    value
                        .as_deref()
                        .map_or_else(|| "any".to_string(), TypeDescriptor::to_typescript),
                )
            }
            TypeDescriptor::Optional(inner) => format!("{} | null", inner.to_typescript()),
            TypeDescriptor::Parameterized {
                kind: GenericKind::Collection,
                args,
                ..
            } => match args.first() {
                Some(element) => format!("{}[]", element.to_typescript()),
                None => "any[]".to_string(),
            },
            TypeDescriptor::Parameterized {
                kind: GenericKind::Map,
                args,
                ..
            } => {
                format!(
                    "{{ [key: {}]: {} }}",
                    key_type(args.first()),
                    args.get(1)
                        .map_or_else(|| "any".to_string(), TypeDescriptor::to_typescript),
                )
            }
            TypeDescriptor::Parameterized {
                kind: GenericKind::Optional,
                args,
                ..
            } if args.len() == 1 => format!("{} | null", args[0].to_typescript()),
            TypeDescriptor::Parameterized { name, args, .. } => {
                if args.is_empty() {
                    simple_name(name).to_string()
                } else {
                    let converted: Vec<String> =
                        args.iter().map(TypeDescriptor::to_typescript).collect();
                    format!("{}<{}>", simple_name(name), converted.join(", "))
                }
            }
            TypeDescriptor::Opaque(name) => name.clone(),
        }
    }
}

/// Index-signature key narrowing. Only `string` and `number` keys exist in
/// the target syntax; every other key kind coerces to `string`.
fn key_type(key: Option<&TypeDescriptor>) -> &'static str {
    match key {
        Some(TypeDescriptor::Primitive(kind)) if kind.is_string_like() => "string",
        Some(TypeDescriptor::Primitive(kind)) if kind.is_numeric() => "number",
        _ => "string",
    }
}

/// Last segment of a possibly qualified type name.
fn simple_name(name: &str) -> &str {
    let tail = name.rsplit("::").next().unwrap_or(name);
    tail.rsplit('.').next().unwrap_or(tail)
}
