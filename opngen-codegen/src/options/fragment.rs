use super::{
    FieldProps, OptionKind,
    click::{ClickOption, py_bool},
};
use crate::{
    literal::{python_list_literal, python_literal},
    naming::PYTHON_NAMING,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Create,
    Update,
}

/// The click option generated for one model field.
///
/// Create options carry the model default and may be required. Update
/// options always default to `None` so that an update only sends what the
/// user passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFragment {
    name: String,
    kind: OptionKind,
    props: FieldProps,
}

impl CodeFragment {
    pub fn new(name: impl Into<String>, kind: OptionKind, props: FieldProps) -> Self {
        Self {
            name: name.into(),
            kind,
            props,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> OptionKind {
        self.kind
    }

    pub fn props(&self) -> &FieldProps {
        &self.props
    }

    /// Option declaration for the create command, or `None` if the field
    /// cannot be expressed as an option.
    pub fn code_for_create(&self) -> Option<String> {
        self.option(Mode::Create).map(|option| option.build())
    }

    /// Option declaration for the update command, or `None` if the field
    /// cannot be expressed as an option.
    pub fn code_for_update(&self) -> Option<String> {
        self.option(Mode::Update).map(|option| option.build())
    }

    fn option(&self, mode: Mode) -> Option<ClickOption> {
        let create = mode == Mode::Create;
        let multiple = self.is_multiple();

        let option = self.declaration().param("help", python_literal(&self.help()));
        let option = match self.kind {
            OptionKind::Flag => option
                .param("is_flag", "True")
                .param("callback", "bool_as_string"),
            OptionKind::Text => option,
            OptionKind::Integer => option.param("type", self.integer_type()),
            OptionKind::Float => option.param("type", self.float_type()),
            OptionKind::Choice => {
                if self.props.choices.is_empty() {
                    tracing::warn!(field = %self.name, "choice field without OptionValues");
                    return None;
                }
                option
                    .param("type", format!("click.Choice({})", self.choice_list()))
                    .param_if(multiple, "multiple", "True")
                    .param_if(multiple, "callback", "tuple_to_csv")
            }
            OptionKind::List => option
                .param("multiple", "True")
                .param("callback", "tuple_to_csv"),
            OptionKind::Opaque => option.param("type", "str"),
        };

        let option = option
            .param_if(create, "show_default", "True")
            .param("default", self.default_value(mode))
            .param_if(create, "required", py_bool(self.required_on_create()));
        Some(option)
    }

    /// Quoted flag plus an explicit parameter name whenever click's own
    /// derivation (dashes to underscores, lowercased) would not reproduce the
    /// field name, so the payload keys match the model.
    fn declaration(&self) -> ClickOption {
        let flag = match self.kind {
            OptionKind::Flag => format!("--{0}/--no-{0}", self.name),
            _ => format!("--{}", self.name),
        };
        let derived = self.name.replace('-', "_").to_lowercase();

        let option = ClickOption::new(flag);
        if derived == self.name && PYTHON_NAMING.is_identifier(&derived) {
            option
        } else if PYTHON_NAMING.is_identifier(&self.name) {
            option.param_name(&self.name)
        } else {
            option.param_name(PYTHON_NAMING.field_name(&self.name))
        }
    }

    fn help(&self) -> String {
        let name = &self.name;
        match self.kind {
            OptionKind::Flag => format!("Enable or disable {name}."),
            OptionKind::Choice if self.props.multiple => format!("One or more values for {name}."),
            OptionKind::List => format!("Values for {name}, repeat the option for each value."),
            OptionKind::Integer | OptionKind::Float => format!("The numeric value for {name}."),
            OptionKind::Opaque => match &self.props.model_type {
                Some(ty) => format!("The value for {name} ({ty})."),
                None => format!("The value for {name}."),
            },
            OptionKind::Text | OptionKind::Choice => format!("The value for {name}."),
        }
    }

    fn is_multiple(&self) -> bool {
        match self.kind {
            OptionKind::List => true,
            OptionKind::Choice => self.props.multiple,
            _ => false,
        }
    }

    fn required_on_create(&self) -> bool {
        self.kind != OptionKind::Flag && self.props.required && self.props.default.is_none()
    }

    /// Optional fields accept an empty choice so a value can be cleared.
    fn choice_list(&self) -> String {
        let mut choices: Vec<&str> = Vec::with_capacity(self.props.choices.len() + 1);
        if !self.props.required {
            choices.push("");
        }
        choices.extend(self.props.choices.iter().map(String::as_str));
        python_list_literal(&choices)
    }

    fn integer_type(&self) -> String {
        let bound = |v: &Option<String>| v.as_deref().and_then(|s| s.parse::<i64>().ok());
        match (bound(&self.props.minimum), bound(&self.props.maximum)) {
            (Some(min), Some(max)) => format!("click.IntRange({min}, {max})"),
            (Some(min), None) => format!("click.IntRange(min={min})"),
            (None, Some(max)) => format!("click.IntRange(max={max})"),
            (None, None) => "int".to_string(),
        }
    }

    fn float_type(&self) -> String {
        fn bound(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| is_float_literal(s))
        }
        match (bound(&self.props.minimum), bound(&self.props.maximum)) {
            (Some(min), Some(max)) => format!("click.FloatRange({min}, {max})"),
            (Some(min), None) => format!("click.FloatRange(min={min})"),
            (None, Some(max)) => format!("click.FloatRange(max={max})"),
            (None, None) => "float".to_string(),
        }
    }

    fn default_value(&self, mode: Mode) -> String {
        if mode == Mode::Update {
            return "None".to_string();
        }

        let default = self.props.default.as_deref();
        if self.kind == OptionKind::Flag {
            let on = default.is_some_and(|d| matches!(d, "1" | "Y" | "y" | "true" | "True"));
            return py_bool(on).to_string();
        }

        let Some(default) = default else {
            return "None".to_string();
        };
        if self.is_multiple() {
            let values: Vec<&str> = default
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .collect();
            return python_list_literal(&values);
        }
        if self.kind == OptionKind::Integer && default.parse::<i64>().is_ok() {
            return default.to_string();
        }
        if self.kind == OptionKind::Float && is_float_literal(default) {
            return default.to_string();
        }
        python_literal(default)
    }
}

/// A plain decimal number that is also valid Python source, e.g. `0.5`.
/// Rejects `inf` and `NaN`, which parse as `f64` but are not literals.
fn is_float_literal(value: &str) -> bool {
    value.parse::<f64>().is_ok()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}

#[cfg(test)]
mod tests {
    use opngen_model::Element;

    use crate::options::classify;

    #[test]
    fn test_flag() {
        let field = Element::new("enabled")
            .attr("type", "BooleanField")
            .child(Element::new("default").text("1"))
            .child(Element::new("Required").text("Y"));
        let fragment = classify(&field);

        insta::assert_snapshot!(fragment.code_for_create().unwrap(), @r"
        @click.option(
            '--enabled/--no-enabled',
            help='Enable or disable enabled.',
            is_flag=True,
            callback=bool_as_string,
            show_default=True,
            default=True,
            required=False,
        )
        ");
        insta::assert_snapshot!(fragment.code_for_update().unwrap(), @r"
        @click.option(
            '--enabled/--no-enabled',
            help='Enable or disable enabled.',
            is_flag=True,
            callback=bool_as_string,
            default=None,
        )
        ");
    }

    #[test]
    fn test_flag_without_default_is_off() {
        let fragment = classify(&Element::new("blocklist").attr("type", "BooleanField"));
        assert!(fragment.code_for_create().unwrap().contains("default=False,"));
    }

    #[test]
    fn test_multiple_choice() {
        let field = Element::new("type")
            .attr("type", "OptionField")
            .child(Element::new("Multiple").text("Y"))
            .child(Element::new("default").text("aa, ag"))
            .child(
                Element::new("OptionValues")
                    .child(Element::new("aa").text("AdAway List"))
                    .child(Element::new("ag").text("AdGuard List")),
            );

        insta::assert_snapshot!(classify(&field).code_for_create().unwrap(), @r"
        @click.option(
            '--type',
            help='One or more values for type.',
            type=click.Choice(['', 'aa', 'ag']),
            multiple=True,
            callback=tuple_to_csv,
            show_default=True,
            default=['aa', 'ag'],
            required=False,
        )
        ");
    }

    #[test]
    fn test_required_choice_has_no_empty_value() {
        let field = Element::new("mode")
            .attr("type", "OptionField")
            .child(Element::new("Required").text("Y"))
            .child(
                Element::new("OptionValues")
                    .child(Element::new("opt1").attr("value", "http"))
                    .child(Element::new("opt2").attr("value", "tcp")),
            );
        let fragment = classify(&field);

        let create = fragment.code_for_create().unwrap();
        assert!(create.contains("type=click.Choice(['http', 'tcp']),"));
        assert!(create.contains("required=True,"));

        let update = fragment.code_for_update().unwrap();
        assert!(update.contains("default=None,"));
        assert!(!update.contains("required="));
    }

    #[test]
    fn test_choice_without_values_yields_nothing() {
        let fragment = classify(&Element::new("mode").attr("type", "OptionField"));

        assert_eq!(fragment.code_for_create(), None);
        assert_eq!(fragment.code_for_update(), None);
    }

    #[test]
    fn test_bounded_integer() {
        let field = Element::new("port")
            .attr("type", "PortField")
            .child(Element::new("Required").text("Y"))
            .child(Element::new("MinimumValue").text("1"))
            .child(Element::new("MaximumValue").text("65535"));

        insta::assert_snapshot!(classify(&field).code_for_create().unwrap(), @r"
        @click.option(
            '--port',
            help='The numeric value for port.',
            type=click.IntRange(1, 65535),
            show_default=True,
            default=None,
            required=True,
        )
        ");
    }

    #[test]
    fn test_integer_default_is_bare_only_when_numeric() {
        let numeric = Element::new("ttl")
            .attr("type", "IntegerField")
            .child(Element::new("default").text("3600"));
        let symbolic = Element::new("ttl")
            .attr("type", "IntegerField")
            .child(Element::new("default").text("auto"));

        assert!(classify(&numeric).code_for_create().unwrap().contains("default=3600,"));
        assert!(classify(&symbolic).code_for_create().unwrap().contains("default='auto',"));
    }

    #[test]
    fn test_keyword_name_and_quoted_default() {
        let field = Element::new("class")
            .attr("type", "TextField")
            .child(Element::new("default").text("it's"));

        insta::assert_snapshot!(classify(&field).code_for_create().unwrap(), @r"
        @click.option(
            '--class',
            'class_',
            help='The value for class.',
            show_default=True,
            default='it\'s',
            required=False,
        )
        ");
    }

    #[test]
    fn test_opaque_field() {
        let field = Element::new("linkedServer").attr("type", "ModelRelationField");

        insta::assert_snapshot!(classify(&field).code_for_create().unwrap(), @r"
        @click.option(
            '--linkedServer',
            'linkedServer',
            help='The value for linkedServer (ModelRelationField).',
            type=str,
            show_default=True,
            default=None,
            required=False,
        )
        ");
    }

    #[test]
    fn test_camel_case_name_keeps_its_case() {
        let field = Element::new("linkedServer").attr("type", "TextField");
        let fragment = classify(&field);

        assert!(fragment
            .code_for_create()
            .unwrap()
            .starts_with("@click.option(\n    '--linkedServer',\n    'linkedServer',\n"));
        assert!(fragment
            .code_for_update()
            .unwrap()
            .starts_with("@click.option(\n    '--linkedServer',\n    'linkedServer',\n"));
    }

    #[test]
    fn test_lowercase_name_has_no_parameter_name() {
        let code = classify(&Element::new("domains").attr("type", "TextField"))
            .code_for_create()
            .unwrap();

        assert!(code.starts_with("@click.option(\n    '--domains',\n    help="));
    }

    #[test]
    fn test_decimal_numeric_field() {
        let field = Element::new("weight")
            .attr("type", "NumericField")
            .child(Element::new("default").text("0.5"))
            .child(Element::new("MinimumValue").text("0.5"))
            .child(Element::new("MaximumValue").text("10"));

        insta::assert_snapshot!(classify(&field).code_for_create().unwrap(), @r"
        @click.option(
            '--weight',
            help='The numeric value for weight.',
            type=click.FloatRange(0.5, 10),
            show_default=True,
            default=0.5,
            required=False,
        )
        ");
    }

    #[test]
    fn test_unbounded_numeric_field() {
        let field = Element::new("ratio")
            .attr("type", "NumericField")
            .child(Element::new("default").text("inf"));
        let code = classify(&field).code_for_create().unwrap();

        assert!(code.contains("type=float,"));
        assert!(code.contains("default='inf',"));
    }

    #[test]
    fn test_dotted_name_gets_parameter_name() {
        let fragment = classify(&Element::new("ssl.verify").attr("type", "BooleanField"));
        let code = fragment.code_for_update().unwrap();

        assert!(code.contains("'--ssl.verify/--no-ssl.verify',\n    'ssl_verify',"));
    }

    #[test]
    fn test_list_field() {
        let field = Element::new("lists")
            .attr("type", "CSVListField")
            .child(Element::new("default").text("a,b"));
        let code = classify(&field).code_for_create().unwrap();

        assert!(code.contains("multiple=True,\n    callback=tuple_to_csv,"));
        assert!(code.contains("default=['a', 'b'],"));
    }

    #[test]
    fn test_create_and_update_differ() {
        let field = Element::new("domains")
            .attr("type", "TextField")
            .child(Element::new("default").text("example.com"));
        let fragment = classify(&field);

        assert_ne!(fragment.code_for_create(), fragment.code_for_update());
    }
}
