//! The process-wide registry: functions, builders, symbols, environments,
//! and font metrics.
//!
//! A [`MathTexContext`] is populated once (normally via `Default`) and only
//! read afterwards, so independent parses on different threads can share one
//! context immutably.

use crate::define_environment::{self, EnvDefSpec, EnvSpec};
use crate::define_function::{FunctionDefSpec, FunctionSpec, HtmlBuilder, MathMlBuilder};
use crate::font_metrics::{FONT_METRICS, FontMetrics, font_size_index};
use crate::font_metrics_data::FontMetricsData;
use crate::functions;
use crate::namespace::KeyMap;
use crate::parser::parse_node::NodeType;
use crate::symbols::{Symbols, create_symbols};

/// Registry of everything the parser and builders dispatch on.
pub struct MathTexContext {
    /// Control sequence name → function spec.
    pub functions: KeyMap<String, FunctionSpec>,
    /// Node type → visual builder.
    pub html_group_builders: KeyMap<NodeType, HtmlBuilder>,
    /// Node type → semantic builder.
    pub mathml_group_builders: KeyMap<NodeType, MathMlBuilder>,
    /// The symbol table.
    pub symbols: Symbols,
    /// Environment name → environment spec.
    pub environments: KeyMap<String, EnvSpec>,
    /// Glyph metric tables.
    pub font_metrics: FontMetricsData,
}

impl MathTexContext {
    /// Register a function family.
    pub fn define_function(&mut self, spec: FunctionDefSpec) {
        let FunctionDefSpec {
            node_type,
            names,
            props,
            handler,
            html_builder,
            mathml_builder,
        } = spec;

        let data = FunctionSpec {
            node_type,
            handler,
            num_args: props.num_args,
            num_optional_args: props.num_optional_args,
            arg_types: props.arg_types,
            allowed_in_argument: props.allowed_in_argument,
            allowed_in_text: props.allowed_in_text,
            allowed_in_math: props.allowed_in_math,
            infix: props.infix,
            primitive: props.primitive,
        };
        for name in names {
            self.functions.insert((*name).to_owned(), data.clone());
        }
        if let Some(node_type) = node_type {
            self.define_function_builders(node_type, html_builder, mathml_builder);
        }
    }

    /// Register builders for a node type without a parse handler.
    pub fn define_function_builders(
        &mut self,
        node_type: NodeType,
        html_builder: Option<HtmlBuilder>,
        mathml_builder: Option<MathMlBuilder>,
    ) {
        if let Some(builder) = html_builder {
            self.html_group_builders.insert(node_type, builder);
        }
        if let Some(builder) = mathml_builder {
            self.mathml_group_builders.insert(node_type, builder);
        }
    }

    /// Register an environment family.
    pub fn define_environment(&mut self, spec: EnvDefSpec) {
        let data = EnvSpec {
            node_type: spec.node_type,
            num_args: spec.props.num_args,
            arg_types: spec.props.arg_types.clone(),
            allowed_in_text: spec.props.allowed_in_text,
            num_optional_args: spec.props.num_optional_args,
            handler: spec.handler,
        };
        for name in spec.names {
            self.environments.insert((*name).to_owned(), data.clone());
        }
        self.define_function_builders(spec.node_type, spec.html_builder, spec.mathml_builder);
    }

    /// Global font metrics for a size level.
    #[must_use]
    pub const fn get_global_metrics(&self, size: usize) -> &'static FontMetrics {
        &FONT_METRICS[font_size_index(size)]
    }
}

impl Default for MathTexContext {
    fn default() -> Self {
        /// Everything registered at startup, one registrar per family.
        const REGISTRARS: &[fn(&mut MathTexContext)] = &[
            functions::define_accent,
            functions::define_accentunder,
            functions::define_arrow,
            functions::define_char,
            functions::define_color,
            functions::define_cr,
            functions::define_def,
            functions::define_delimsizing,
            functions::define_enclose,
            functions::define_environment,
            functions::define_font,
            functions::define_genfrac,
            functions::define_hbox,
            functions::define_horiz_brace,
            functions::define_href,
            functions::define_html,
            functions::define_htmlmathml,
            functions::define_includegraphics,
            functions::define_kern,
            functions::define_lap,
            functions::define_math,
            functions::define_mathchoice,
            functions::define_mclass,
            functions::define_op,
            functions::define_operatorname,
            functions::define_ordgroup,
            functions::define_overline,
            functions::define_phantom,
            functions::define_raisebox,
            functions::define_relax,
            functions::define_rule,
            functions::define_sizing,
            functions::define_smash,
            functions::define_spacing,
            functions::define_sqrt,
            functions::define_styling,
            functions::define_supsub,
            functions::define_symbols,
            functions::define_tag,
            functions::define_text,
            functions::define_underline,
            functions::define_vcenter,
            functions::define_verb,
            define_environment::define_array,
        ];

        let mut ctx = Self {
            functions: KeyMap::default(),
            html_group_builders: KeyMap::default(),
            mathml_group_builders: KeyMap::default(),
            symbols: create_symbols(),
            environments: KeyMap::default(),
            font_metrics: FontMetricsData::default(),
        };
        for register in REGISTRARS {
            register(&mut ctx);
        }
        ctx
    }
}
