//! Rust source parser for extracting script host members.
//!
//! This module parses Rust source files to find the functions, constants,
//! and enums a host exposes to scripts, without requiring compilation.

use std::collections::HashSet;
use std::path::Path;

use syn::{Attribute, Expr, FnArg, Lit, Meta, Pat, ReturnType};
use tsbind_core::{
    ConstantDef, DeclarationRegistry, FunctionArg, FunctionDef, GenericKind, PrimitiveKind,
    TypeDescriptor,
};
use walkdir::WalkDir;

use crate::Error;

/// A producer of script member definitions.
///
/// The syn-based [`SourceWalker`] is the default implementation; hosts that
/// already know their members can supply their own.
pub trait MemberSource {
    /// Collect all exposed members into a registry.
    fn members(&self) -> Result<DeclarationRegistry, Error>;
}

/// Walks a Rust source tree for `#[script_function]`, `#[script_constant]`,
/// and `#[script_enum]` items.
pub struct SourceWalker {
    src_dir: std::path::PathBuf,
}

impl SourceWalker {
    /// Create a walker over a source directory.
    pub fn new(src_dir: impl Into<std::path::PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
        }
    }
}

impl MemberSource for SourceWalker {
    fn members(&self) -> Result<DeclarationRegistry, Error> {
        parse_project(&self.src_dir)
    }
}

/// Parse all Rust source files in a directory and extract script members.
pub fn parse_project(src_dir: &Path) -> Result<DeclarationRegistry, Error> {
    let registry = DeclarationRegistry::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|ext| ext == "rs").unwrap_or(false))
    {
        let content = std::fs::read_to_string(entry.path())?;
        match syn::parse_file(&content) {
            Ok(file) => files.push(file),
            Err(e) => {
                tracing::debug!(file = ?entry.path(), error = %e, "Failed to parse file")
            }
        }
    }

    // Enum names must be known before member types are mapped.
    let enums = collect_enum_names(&files);

    for file in &files {
        register_members(file, &enums, &registry);
    }

    Ok(registry)
}

/// Parse a single source string and register its members.
pub fn parse_source(content: &str, registry: &DeclarationRegistry) -> Result<(), Error> {
    let file = syn::parse_file(content).map_err(|e| Error::Parse(e.to_string()))?;
    let files = [file];

    let enums = collect_enum_names(&files);
    for file in &files {
        register_members(file, &enums, registry);
    }

    Ok(())
}

/// Names of enums declared with #[script_enum]. References to these names
/// collapse to the string type during conversion.
fn collect_enum_names(files: &[syn::File]) -> HashSet<String> {
    let mut enums = HashSet::new();
    for file in files {
        for item in &file.items {
            if let syn::Item::Enum(item_enum) = item {
                if has_marker_attr(&item_enum.attrs, "script_enum") {
                    enums.insert(item_enum.ident.to_string());
                }
            }
        }
    }
    enums
}

/// Register all annotated members of a parsed file.
fn register_members(file: &syn::File, enums: &HashSet<String>, registry: &DeclarationRegistry) {
    for item in &file.items {
        match item {
            syn::Item::Fn(item_fn) => {
                if has_marker_attr(&item_fn.attrs, "script_function") {
                    registry.register_function(parse_function(item_fn, enums));
                }
            }
            syn::Item::Const(item_const) => {
                if has_marker_attr(&item_const.attrs, "script_constant") {
                    registry.register_constant(parse_constant(item_const, enums));
                }
            }
            _ => {}
        }
    }
}

/// Check if attributes contain #[<marker>] or #[tsbind::<marker>].
fn has_marker_attr(attrs: &[Attribute], marker: &str) -> bool {
    attrs.iter().any(|attr| {
        let path = attr.path();
        path.is_ident(marker)
            || path.segments.len() == 2
                && path.segments[0].ident == "tsbind"
                && path.segments[1].ident == marker
    })
}

/// Parse an annotated function into a FunctionDef.
fn parse_function(item: &syn::ItemFn, enums: &HashSet<String>) -> FunctionDef {
    let name = item.sig.ident.to_string();

    let return_type = match &item.sig.output {
        ReturnType::Default => TypeDescriptor::Primitive(PrimitiveKind::Void),
        ReturnType::Type(_, ty) => extract_result_type(ty, enums),
    };

    let mut func = FunctionDef::new(&name, return_type);
    func.doc = get_doc_comment(&item.attrs);

    for arg in &item.sig.inputs {
        if let FnArg::Typed(pat_type) = arg {
            if let Pat::Ident(pat_ident) = &*pat_type.pat {
                let descriptor = descriptor_for_type(&pat_type.ty, enums);
                func.args
                    .push(FunctionArg::new(pat_ident.ident.to_string(), descriptor));
            }
        }
    }

    func
}

/// Parse an annotated const item into a ConstantDef.
fn parse_constant(item: &syn::ItemConst, enums: &HashSet<String>) -> ConstantDef {
    let name = item.ident.to_string();
    let mut constant = ConstantDef::new(name, descriptor_for_type(&item.ty, enums));
    constant.doc = get_doc_comment(&item.attrs);
    constant
}

/// Extract the success type from a Result<T, E> return type.
fn extract_result_type(ty: &syn::Type, enums: &HashSet<String>) -> TypeDescriptor {
    let type_str = quote::quote!(#ty).to_string().replace(' ', "");

    if let Some((raw, args)) = split_generic(&type_str) {
        if last_segment(raw) == "Result" {
            if let Some(first) = args.first() {
                return descriptor_for_str(first, enums);
            }
        }
    }

    descriptor_for_str(&type_str, enums)
}

/// Convert a syn::Type to a TypeDescriptor.
fn descriptor_for_type(ty: &syn::Type, enums: &HashSet<String>) -> TypeDescriptor {
    let type_str = quote::quote!(#ty).to_string().replace(' ', "");
    descriptor_for_str(&type_str, enums)
}

/// Convert Rust type syntax to a TypeDescriptor.
///
/// Total: anything that cannot be classified falls through to an opaque
/// descriptor rather than failing the walk.
fn descriptor_for_str(type_str: &str, enums: &HashSet<String>) -> TypeDescriptor {
    let type_str = type_str.strip_prefix("&mut").unwrap_or(type_str);
    let type_str = type_str.strip_prefix('&').unwrap_or(type_str);

    match type_str {
        "bool" => return TypeDescriptor::Primitive(PrimitiveKind::Bool),
        "i8" | "u8" => return TypeDescriptor::Primitive(PrimitiveKind::Byte),
        "i16" | "u16" => return TypeDescriptor::Primitive(PrimitiveKind::Short),
        "i32" | "u32" => return TypeDescriptor::Primitive(PrimitiveKind::Int),
        "i64" | "u64" | "isize" | "usize" => {
            return TypeDescriptor::Primitive(PrimitiveKind::Long)
        }
        "f32" => return TypeDescriptor::Primitive(PrimitiveKind::Float),
        "f64" => return TypeDescriptor::Primitive(PrimitiveKind::Double),
        "char" => return TypeDescriptor::Primitive(PrimitiveKind::Char),
        "String" | "str" => return TypeDescriptor::Primitive(PrimitiveKind::String),
        "()" => return TypeDescriptor::Primitive(PrimitiveKind::Void),
        _ => {}
    }

    // Fixed-size arrays and slices
    if let Some(body) = type_str.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let element = body.rsplit_once(';').map(|(e, _)| e).unwrap_or(body);
        return TypeDescriptor::array(descriptor_for_str(element, enums));
    }

    if let Some((raw, args)) = split_generic(type_str) {
        let descriptors: Vec<TypeDescriptor> = args
            .iter()
            .map(|a| descriptor_for_str(a, enums))
            .collect();
        return TypeDescriptor::parameterized(raw, descriptors);
    }

    // Raw container names keep their container meaning even without
    // reified arguments.
    match GenericKind::classify(type_str) {
        GenericKind::Collection => return TypeDescriptor::Collection(None),
        GenericKind::Map => {
            return TypeDescriptor::Map {
                key: None,
                value: None,
            }
        }
        _ => {}
    }

    if enums.contains(last_segment(type_str)) {
        return TypeDescriptor::Enum(last_segment(type_str).to_string());
    }

    TypeDescriptor::Opaque(type_str.to_string())
}

/// Split `Raw<A, B>` into the raw name and its top-level argument list.
fn split_generic(type_str: &str) -> Option<(&str, Vec<&str>)> {
    let open = type_str.find('<')?;
    let body = type_str.strip_suffix('>')?;
    let (raw, rest) = body.split_at(open);
    let args_body = &rest[1..];

    let mut args = Vec::new();
    let mut depth = 0;
    let mut start = 0;
    for (i, c) in args_body.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth -= 1,
            ',' if depth == 0 => {
                args.push(&args_body[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if start < args_body.len() {
        args.push(&args_body[start..]);
    }

    Some((raw, args))
}

/// Last `::`-separated segment of a path.
fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Get string value from attribute like #[attr = "value"].
fn get_attribute_string_value(attr: &Attribute) -> Option<String> {
    if let Meta::NameValue(nv) = &attr.meta {
        if let Expr::Lit(lit) = &nv.value {
            if let Lit::Str(s) = &lit.lit {
                return Some(s.value());
            }
        }
    }
    None
}

/// Get documentation comment from attributes.
fn get_doc_comment(attrs: &[Attribute]) -> Option<String> {
    let docs: Vec<String> = attrs
        .iter()
        .filter_map(|attr| {
            if attr.path().is_ident("doc") {
                get_attribute_string_value(attr)
            } else {
                None
            }
        })
        .collect();

    if docs.is_empty() {
        None
    } else {
        Some(
            docs.into_iter()
                .map(|s| s.trim().to_string())
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_function_source() {
        let source = r#"
            /// Write a message to the host log.
            #[script_function]
            fn log(message: String) {
                println!("{}", message);
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        let func = registry.get_function("log").unwrap();
        assert_eq!(func.args.len(), 1);
        assert_eq!(func.args[0].name, "message");
        assert_eq!(func.doc.as_deref(), Some("Write a message to the host log."));
        assert_eq!(
            func.to_declaration(),
            "declare function log(message: string): void;"
        );
    }

    #[test]
    fn test_parse_constant_source() {
        let source = r#"
            /// Host version string.
            #[script_constant]
            const VERSION: &str = "1.0.0";

            const INTERNAL: u32 = 7;
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        let constant = registry.get_constant("VERSION").unwrap();
        assert_eq!(constant.to_declaration(), "declare const VERSION: string;");
        assert!(registry.get_constant("INTERNAL").is_none());
    }

    #[test]
    fn test_unannotated_items_are_skipped() {
        let source = r#"
            fn helper(x: i32) -> i32 {
                x + 1
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_qualified_marker_attr() {
        let source = r#"
            #[tsbind::script_function]
            fn ping() -> bool {
                true
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();
        assert!(registry.get_function("ping").is_some());
    }

    #[test]
    fn test_container_types() {
        let source = r#"
            #[script_function]
            fn tags() -> Vec<String> {
                Vec::new()
            }

            #[script_function]
            fn scores() -> std::collections::HashMap<i32, String> {
                Default::default()
            }

            #[script_function]
            fn find(id: u32) -> Option<f64> {
                None
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        assert_eq!(
            registry.get_function("tags").unwrap().to_declaration(),
            "declare function tags(): string[];"
        );
        assert_eq!(
            registry.get_function("scores").unwrap().to_declaration(),
            "declare function scores(): { [key: number]: string };"
        );
        assert_eq!(
            registry.get_function("find").unwrap().to_declaration(),
            "declare function find(id: number): number | null;"
        );
    }

    #[test]
    fn test_result_return_type_unwraps() {
        let source = r#"
            #[script_function]
            fn read_file(path: String) -> Result<String, std::io::Error> {
                todo!()
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        assert_eq!(
            registry.get_function("read_file").unwrap().to_declaration(),
            "declare function read_file(path: string): string;"
        );
    }

    #[test]
    fn test_enum_reference_collapses_to_string() {
        let source = r#"
            #[script_enum]
            enum Color {
                Red,
                Green,
                Blue,
            }

            #[script_function]
            fn paint(color: Color) {
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        assert_eq!(
            registry.get_function("paint").unwrap().to_declaration(),
            "declare function paint(color: string): void;"
        );
    }

    #[test]
    fn test_custom_types_fall_back() {
        let source = r#"
            #[script_function]
            fn spawn(kind: EntityKind, at: Position) -> Handle<Entity> {
                todo!()
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        assert_eq!(
            registry.get_function("spawn").unwrap().to_declaration(),
            "declare function spawn(kind: EntityKind, at: Position): Handle<Entity>;"
        );
    }

    #[test]
    fn test_slice_and_array_types() {
        let source = r#"
            #[script_function]
            fn checksum(data: &[u8]) -> u32 {
                0
            }

            #[script_function]
            fn corners() -> [f32; 4] {
                [0.0; 4]
            }
        "#;

        let registry = DeclarationRegistry::new();
        parse_source(source, &registry).unwrap();

        assert_eq!(
            registry.get_function("checksum").unwrap().to_declaration(),
            "declare function checksum(data: number[]): number;"
        );
        assert_eq!(
            registry.get_function("corners").unwrap().to_declaration(),
            "declare function corners(): number[];"
        );
    }

    #[test]
    fn test_invalid_source_is_an_error() {
        let registry = DeclarationRegistry::new();
        let result = parse_source("fn broken(", &registry);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_parse_project_skips_unparsable_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("host.rs"),
            r#"
                #[script_function]
                fn ping() -> bool {
                    true
                }
            "#,
        )
        .unwrap();
        std::fs::write(dir.path().join("broken.rs"), "fn broken(").unwrap();

        let registry = parse_project(dir.path()).unwrap();
        assert!(registry.get_function("ping").is_some());
    }

    #[test]
    fn test_nested_generic_split() {
        let (raw, args) = split_generic("HashMap<String,Vec<i32>>").unwrap();
        assert_eq!(raw, "HashMap");
        assert_eq!(args, vec!["String", "Vec<i32>"]);
    }
}
