//! Model field classification.
//!
//! Every model field becomes a [`CodeFragment`]: a typed description of the
//! click option that manipulates it. The option kind is chosen from the
//! field's `type` attribute through [`KIND_TABLE`]; anything not listed there
//! is treated as an opaque string value.

mod click;
mod fragment;

use opngen_model::Element;

pub use fragment::CodeFragment;

/// The kind of click option generated for a model field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// `--x/--no-x` boolean flag.
    Flag,
    /// Free text value.
    Text,
    /// Integer value, optionally bounded.
    Integer,
    /// Decimal value, optionally bounded.
    Float,
    /// One (or several) of the values listed under `OptionValues`.
    Choice,
    /// Comma separated list of free values.
    List,
    /// Unknown or missing model type, passed through as a string.
    Opaque,
}

/// Model type name to option kind.
pub const KIND_TABLE: &[(&str, OptionKind)] = &[
    ("BooleanField", OptionKind::Flag),
    ("TextField", OptionKind::Text),
    ("HostnameField", OptionKind::Text),
    ("NetworkField", OptionKind::Text),
    ("EmailField", OptionKind::Text),
    ("UrlField", OptionKind::Text),
    ("DescriptionField", OptionKind::Text),
    ("IPPortField", OptionKind::Text),
    ("MacAddressField", OptionKind::Text),
    ("IntegerField", OptionKind::Integer),
    ("PortField", OptionKind::Integer),
    ("NumericField", OptionKind::Float),
    ("OptionField", OptionKind::Choice),
    ("CSVListField", OptionKind::List),
];

impl OptionKind {
    /// Look up the kind for a model `type` attribute.
    pub fn from_model_type(model_type: Option<&str>) -> Self {
        model_type
            .and_then(|ty| KIND_TABLE.iter().find(|(name, _)| *name == ty))
            .map(|(_, kind)| *kind)
            .unwrap_or(OptionKind::Opaque)
    }
}

/// Field properties read from the model element's children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldProps {
    /// The declared model type, kept for opaque fields.
    pub model_type: Option<String>,
    pub default: Option<String>,
    pub required: bool,
    pub multiple: bool,
    pub minimum: Option<String>,
    pub maximum: Option<String>,
    /// Allowed values, in document order.
    pub choices: Vec<String>,
}

impl FieldProps {
    fn from_element(field: &Element) -> Self {
        let text_of = |name: &str| {
            field
                .child_named(name)
                .map(Element::text_content)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
        };
        let yes = |name: &str| text_of(name).is_some_and(|v| v.eq_ignore_ascii_case("y"));

        let choices = field
            .child_named("OptionValues")
            .map(|values| {
                values
                    .children()
                    .iter()
                    .map(|opt| opt.attribute("value").unwrap_or(opt.name()).to_string())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            model_type: field.field_type().map(str::to_string),
            default: text_of("default"),
            required: yes("Required"),
            multiple: yes("Multiple"),
            minimum: text_of("MinimumValue"),
            maximum: text_of("MaximumValue"),
            choices,
        }
    }
}

/// Classify a model field into its option code fragment.
///
/// Pure: the same element always yields an equal fragment.
pub fn classify(field: &Element) -> CodeFragment {
    let kind = OptionKind::from_model_type(field.field_type());
    CodeFragment::new(field.name(), kind, FieldProps::from_element(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_lookup() {
        assert_eq!(OptionKind::from_model_type(Some("BooleanField")), OptionKind::Flag);
        assert_eq!(OptionKind::from_model_type(Some("TextField")), OptionKind::Text);
        assert_eq!(OptionKind::from_model_type(Some("PortField")), OptionKind::Integer);
        assert_eq!(OptionKind::from_model_type(Some("NumericField")), OptionKind::Float);
        assert_eq!(OptionKind::from_model_type(Some("OptionField")), OptionKind::Choice);
        assert_eq!(OptionKind::from_model_type(Some("CSVListField")), OptionKind::List);
        assert_eq!(
            OptionKind::from_model_type(Some("ModelRelationField")),
            OptionKind::Opaque
        );
        assert_eq!(OptionKind::from_model_type(None), OptionKind::Opaque);
    }

    #[test]
    fn test_kind_lookup_is_case_sensitive() {
        assert_eq!(OptionKind::from_model_type(Some("booleanfield")), OptionKind::Opaque);
    }

    #[test]
    fn test_props_from_element() {
        let field = Element::new("type")
            .attr("type", "OptionField")
            .child(Element::new("Required").text("Y"))
            .child(Element::new("multiple").text("y"))
            .child(Element::new("default").text("aa"))
            .child(
                Element::new("OptionValues")
                    .child(Element::new("aa").text("AdAway"))
                    .child(Element::new("option2").attr("value", "ag").text("AdGuard")),
            );

        let props = FieldProps::from_element(&field);

        assert_eq!(props.model_type.as_deref(), Some("OptionField"));
        assert_eq!(props.default.as_deref(), Some("aa"));
        assert!(props.required);
        assert!(props.multiple);
        assert_eq!(props.choices, ["aa", "ag"]);
    }

    #[test]
    fn test_props_empty_default_is_absent() {
        let field = Element::new("description")
            .attr("type", "TextField")
            .child(Element::new("default").text("  "))
            .child(Element::new("Required").text("N"));

        let props = FieldProps::from_element(&field);

        assert_eq!(props.default, None);
        assert!(!props.required);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let field = Element::new("port")
            .attr("type", "PortField")
            .child(Element::new("default").text("53"));

        let first = classify(&field);
        let second = classify(&field.clone());

        assert_eq!(first, second);
        assert_eq!(first.code_for_create(), second.code_for_create());
        assert_eq!(first.code_for_update(), second.code_for_update());
    }
}
