use armlint::config::LinterConfig;
use armlint::diagnostic::Diagnostic;
use armlint::parse::*;
use armlint::program::{HttpLocation, HttpVerb, ResourceKind, TypeGraph};

// =============================================================================
// Type references
// =============================================================================

pub fn model_ref(id: &str) -> TypeRefDecl {
    TypeRefDecl::Model(id.into())
}

pub fn scalar_ref(id: &str) -> TypeRefDecl {
    TypeRefDecl::Scalar(id.into())
}

pub fn union_ref(id: &str) -> TypeRefDecl {
    TypeRefDecl::Union(id.into())
}

pub fn string() -> TypeRefDecl {
    scalar_ref("string")
}

// =============================================================================
// Node builders
// =============================================================================

pub fn prop(name: &str, ty: TypeRefDecl) -> PropertyDecl {
    PropertyDecl {
        name: name.into(),
        ty,
        pattern: None,
        http: None,
        source: None,
        span: None,
    }
}

pub trait PropertyExt {
    fn pattern(self, pattern: &str) -> Self;
    fn http(self, location: HttpLocation) -> Self;
    fn copied_from(self, model: &str, property: &str) -> Self;
    fn span(self, file: &str, pos: usize, end: usize) -> Self;
}

impl PropertyExt for PropertyDecl {
    fn pattern(mut self, pattern: &str) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    fn http(mut self, location: HttpLocation) -> Self {
        self.http = Some(location);
        self
    }

    fn copied_from(mut self, model: &str, property: &str) -> Self {
        self.source = Some(SourceRefDecl {
            model: model.into(),
            property: property.into(),
        });
        self
    }

    fn span(mut self, file: &str, pos: usize, end: usize) -> Self {
        self.span = Some(SpanDecl {
            file: file.into(),
            pos,
            end,
        });
        self
    }
}

/// Named model whose id equals its name.
pub fn model(name: &str, properties: Vec<PropertyDecl>) -> ModelDecl {
    ModelDecl {
        id: name.into(),
        name: Some(name.into()),
        namespace: Some("Contoso".into()),
        error: false,
        resource: None,
        template_args: vec![],
        properties,
        span: None,
    }
}

pub fn anonymous_model(id: &str, properties: Vec<PropertyDecl>) -> ModelDecl {
    ModelDecl {
        name: None,
        ..model(id, properties)
    }
}

pub trait ModelExt {
    fn resource(self) -> Self;
    fn template_args(self, args: Vec<TypeRefDecl>) -> Self;
}

impl ModelExt for ModelDecl {
    fn resource(mut self) -> Self {
        self.resource = Some(ResourceDecl {
            kind: ResourceKind::Tracked,
        });
        self
    }

    fn template_args(mut self, args: Vec<TypeRefDecl>) -> Self {
        self.template_args = args;
        self
    }
}

pub fn union(id: &str, variants: Vec<(&str, TypeRefDecl)>) -> UnionDecl {
    UnionDecl {
        id: id.into(),
        name: None,
        namespace: None,
        variants: variants
            .into_iter()
            .map(|(name, ty)| VariantDecl {
                name: name.into(),
                ty,
            })
            .collect(),
    }
}

/// `ok: <model> | default: ErrorResponse`
pub fn ok_or_error(id: &str, model: &str) -> UnionDecl {
    union(id, vec![("ok", model_ref(model)), ("default", model_ref("ErrorResponse"))])
}

pub fn operation(id: &str, verb: HttpVerb, parameters: &str, returns: TypeRefDecl) -> OperationDecl {
    OperationDecl {
        id: id.into(),
        name: id.into(),
        namespace: Some("Contoso".into()),
        verb: Some(verb),
        parameters: parameters.into(),
        return_type: returns,
        span: None,
    }
}

pub fn patch_op(id: &str, parameters: &str, returns: &str) -> OperationDecl {
    operation(id, HttpVerb::Patch, parameters, union_ref(returns))
}

// =============================================================================
// Documents
// =============================================================================

/// Scalars plus the shared `ErrorResponse` model.
pub fn base_doc() -> TypeGraphDoc {
    let mut error = model("ErrorResponse", vec![prop("code", string())]);
    error.error = true;
    error.namespace = Some("Azure.ResourceManager".into());
    TypeGraphDoc {
        sources: vec![],
        scalars: vec![
            ScalarDecl {
                id: "string".into(),
                name: "string".into(),
                namespace: Some("TypeSpec".into()),
            },
            ScalarDecl {
                id: "int32".into(),
                name: "int32".into(),
                namespace: Some("TypeSpec".into()),
            },
        ],
        models: vec![error],
        unions: vec![],
        operations: vec![],
    }
}

/// `Widget { name, tags: Tags, properties: WidgetProperties { foo, bar } }`
/// with a PATCH `update` whose body is the single parameter `properties: <body>`.
pub fn widget_doc(body: Vec<ModelDecl>, body_model: &str) -> TypeGraphDoc {
    let mut doc = base_doc();
    doc.models.extend([
        model("Tags", vec![]),
        model("WidgetProperties", vec![prop("foo", string()), prop("bar", string())]),
        model(
            "Widget",
            vec![
                prop("name", string()),
                prop("tags", model_ref("Tags")),
                prop("properties", model_ref("WidgetProperties")),
            ],
        )
        .resource(),
    ]);
    doc.models.extend(body);
    doc.models.push(anonymous_model(
        "update.params",
        vec![
            prop("widgetName", string()).http(HttpLocation::Path),
            prop("api-version", string()).http(HttpLocation::Query),
            prop("properties", model_ref(body_model)).http(HttpLocation::BodyRoot),
        ],
    ));
    doc.unions.push(ok_or_error("update.result", "Widget"));
    doc.operations.push(patch_op("update", "update.params", "update.result"));
    doc
}

pub fn build(doc: &TypeGraphDoc) -> TypeGraph {
    match TypeGraph::build(doc) {
        Ok(graph) => graph,
        Err(errors) => panic!("document should build, got: {:?}", errors),
    }
}

pub fn lint_doc(doc: &TypeGraphDoc) -> Vec<Diagnostic> {
    armlint::lint(&build(doc), &LinterConfig::default())
}

/// Diagnostics excluding the name-pattern rule, which every unpatterned
/// `Widget.name` triggers.
pub fn patch_diagnostics(doc: &TypeGraphDoc) -> Vec<Diagnostic> {
    lint_doc(doc)
        .into_iter()
        .filter(|d| d.rule == armlint::rules::RuleId::ResourcePatch)
        .collect()
}
