mod setup;

use mathtex::{
    MathTexContext, Settings, TrustSetting,
    build_html::{GroupType, build_expression},
    dom_tree::HtmlDomNode,
    options::Options,
    parser::parse_node::ParseNode,
    render_to_string,
    style::TEXT,
    symbols::Atom,
    types::{OutputFormat, StrictMode, StrictSetting},
};
use setup::*;

fn root_options() -> Options {
    Options::builder()
        .style(TEXT)
        .max_size(f64::INFINITY)
        .min_rule_thickness(0.0)
        .build()
}

fn build_expr(expression: &str) -> Vec<HtmlDomNode> {
    let parsed = get_parsed(expression).unwrap();
    build_expression(
        default_ctx(),
        &parsed,
        &root_options(),
        GroupType::Root,
        (None, None),
    )
    .unwrap()
}

fn first_class(node: &HtmlDomNode) -> Option<&str> {
    node.classes().first().map(String::as_str)
}

#[test]
fn a_parser() {
    it("should not fail on an empty string", || {
        get_parsed("").map(|_| ())
    });

    it("should ignore whitespace", || {
        let a = get_parsed("    x    y    ")?;
        let b = get_parsed("xy")?;
        assert_eq!(a.len(), b.len());
        Ok(())
    });

    it("should produce the same tree for identical calls", || {
        let a = get_parsed(r"\frac{a+b}{c}\sqrt[3]{x}")?;
        let b = get_parsed(r"\frac{a+b}{c}\sqrt[3]{x}")?;
        assert_eq!(a, b);
        Ok(())
    });
}

#[test]
fn an_ord_parser() {
    let expression = "1234abcdzABZ";
    it("should parse one ord per character", || {
        let parsed = get_parsed(expression)?;
        assert_eq!(parsed.len(), expression.chars().count());
        for node in &parsed {
            assert!(
                matches!(node, ParseNode::MathOrd(_) | ParseNode::TextOrd(_)),
                "expected ord, got {node:?}"
            );
        }
        Ok(())
    });
}

#[test]
fn a_bin_parser() {
    it("should classify binary operators", || {
        for node in get_parsed(r"+-*\cdot\pm\div")? {
            let ParseNode::Atom(atom) = node else {
                panic!("expected atom, got {node:?}");
            };
            assert_eq!(atom.family, Atom::Bin);
        }
        Ok(())
    });
}

#[test]
fn a_supsub_parser() {
    it("should attach scripts to the base", || {
        let parsed = get_parsed("x^2_3")?;
        assert_eq!(parsed.len(), 1);
        let ParseNode::SupSub(supsub) = &parsed[0] else {
            panic!("expected supsub");
        };
        assert!(supsub.base.is_some());
        assert!(supsub.sup.is_some());
        assert!(supsub.sub.is_some());
        Ok(())
    });

    it("should reject double superscripts", || {
        expect_parse_error("x^2^3");
        expect_parse_error("x_2_3");
        Ok(())
    });

    it("should collapse primes into superscripts", || {
        let parsed = get_parsed("f''")?;
        assert_eq!(parsed.len(), 1);
        assert!(matches!(&parsed[0], ParseNode::SupSub(s) if s.sup.is_some()));
        Ok(())
    });
}

#[test]
fn spacing_insertion() {
    it("should insert binop glue around +", || {
        // a + b: ord, glue, bin, glue, ord
        let built = build_expr("a+b");
        assert_eq!(built.len(), 5);
        assert_eq!(first_class(&built[0]), Some("mord"));
        assert!(built[1].has_class("mspace"));
        assert_eq!(first_class(&built[2]), Some("mbin"));
        assert!(built[3].has_class("mspace"));
        assert_eq!(first_class(&built[4]), Some("mord"));
        Ok(())
    });

    it("should insert thick glue around relations", || {
        let built = build_expr("a=b");
        assert_eq!(built.len(), 5);
        assert_eq!(first_class(&built[2]), Some("mrel"));
        Ok(())
    });

    it("should not space adjacent ords", || {
        let built = build_expr("ab");
        assert!(built.iter().all(|node| !node.has_class("mspace")));
        Ok(())
    });
}

#[test]
fn bin_cancellation() {
    it("should demote a leading + to ord", || {
        let built = build_expr("+b");
        assert_eq!(first_class(&built[0]), Some("mord"));
        Ok(())
    });

    it("should demote + after an open paren", || {
        let built = build_expr("(+b");
        assert_eq!(first_class(&built[1]), Some("mord"));
        Ok(())
    });

    it("should demote + before a relation", || {
        let built = build_expr("a+=b");
        // No node may remain mbin adjacent to the rel.
        let classes: Vec<_> = built.iter().filter_map(first_class).collect();
        assert!(!classes.contains(&"mbin"), "classes: {classes:?}");
        Ok(())
    });

    it("should demote a trailing binary operator", || {
        let built = build_expr("a+");
        let last = built.last().unwrap();
        assert_eq!(first_class(last), Some("mord"));
        Ok(())
    });

    it("should keep an infix + binary", || {
        let built = build_expr("a+b");
        assert_eq!(first_class(&built[2]), Some("mbin"));
        Ok(())
    });
}

#[test]
fn color_transparency() {
    it("should keep binop spacing through a color wrapper", || {
        // The color fragment is spliced inline, so a + b spacing survives.
        let built = build_expr(r"\textcolor{red}{a}+b");
        let has_bin = built
            .iter()
            .any(|node| first_class(node) == Some("mbin"));
        let space_count = built.iter().filter(|node| node.has_class("mspace")).count();
        assert!(has_bin);
        assert_eq!(space_count, 2);
        Ok(())
    });

    it("should cancel a bin that opens a color group", || {
        let built = build_expr(r"\textcolor{red}{+}b");
        assert!(built.iter().all(|node| first_class(node) != Some("mbin")));
        Ok(())
    });
}

#[test]
fn fractions() {
    it("should parse and build \\frac", || {
        let markup = render(r"\frac{1}{2}")?;
        assert!(markup.contains("mfrac"));
        assert!(markup.contains("frac-line"));
        Ok(())
    });

    it("should respect minRuleThickness", || {
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .min_rule_thickness(0.1)
            .build();
        let markup = render_to_string(default_ctx(), r"\frac{1}{2}", &settings)?;
        assert!(markup.contains("border-bottom-width:0.1em"));
        Ok(())
    });

    it("should support infix \\over", || {
        let parsed = get_parsed(r"a \over b")?;
        assert_eq!(parsed.len(), 1);
        assert!(matches!(&parsed[0], ParseNode::Genfrac(_)));
        Ok(())
    });

    it("should support \\binom delimiters", || {
        let markup = render(r"\binom{n}{k}")?;
        assert!(markup.contains("mopen"));
        assert!(markup.contains("mclose"));
        Ok(())
    });
}

#[test]
fn delimiters() {
    it("should build \\left..\\right as minner", || {
        let built = build_expr(r"\left( x \right)");
        assert_eq!(built.len(), 1);
        assert_eq!(first_class(&built[0]), Some("minner"));
        Ok(())
    });

    it("should reject \\middle outside \\left..\\right", || {
        expect_parse_error(r"a \middle| b");
        Ok(())
    });

    it("should accept \\middle inside \\left..\\right", || {
        get_parsed(r"\left( a \middle| b \right)").map(|_| ())
    });

    it("should reject unmatched \\right", || {
        expect_parse_error(r"x \right)");
        Ok(())
    });

    it("should grow sized delimiters monotonically", || {
        // \big < \Big < \bigg < \Bigg total extents.
        let mut last = 0.0;
        for command in [r"\big(", r"\Big(", r"\bigg(", r"\Bigg("] {
            let built = build_expr(command);
            let extent = built[0].height() + built[0].depth();
            assert!(extent > last, "{command} extent {extent} not > {last}");
            last = extent;
        }
        Ok(())
    });
}

#[test]
fn sqrt_builds() {
    it("should render a surd", || {
        let markup = render(r"\sqrt{x}")?;
        assert!(markup.contains("sqrt"));
        assert!(markup.contains("svg"));
        Ok(())
    });

    it("should render an index for \\sqrt[3]", || {
        let markup = render(r"\sqrt[3]{x}")?;
        assert!(markup.contains("root"));
        Ok(())
    });
}

#[test]
fn struts_and_line_breaking() {
    it("should emit a strut per base chunk", || {
        let markup = render("a+b")?;
        assert!(markup.contains("class=\"strut\""));
        Ok(())
    });

    it("should wrap output in katex-html with aria-hidden", || {
        let markup = render("x")?;
        assert!(markup.contains("katex-html"));
        assert!(markup.contains("aria-hidden=\"true\""));
        Ok(())
    });
}

#[test]
fn tags() {
    it("should reject \\tag outside display mode", || {
        assert!(render(r"a\tag{1}").is_err());
        Ok(())
    });

    it("should append a tag child in display mode", || {
        let markup = render_display(r"a\tag{1}")?;
        assert_eq!(markup.matches("class=\"tag\"").count(), 1);
        Ok(())
    });

    it("should support \\tag*", || {
        let markup = render_display(r"a\tag*{x}")?;
        assert!(markup.contains("class=\"tag\""));
        // The starred form omits the parentheses.
        assert!(!markup.contains("(x)"));
        Ok(())
    });
}

#[test]
fn error_handling() {
    it("should throw on unknown control sequences", || {
        expect_parse_error(r"\nosuchcommand");
        Ok(())
    });

    it("should render a red error span with throwOnError off", || {
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .throw_on_error(false)
            .error_color("#cc0000".to_owned())
            .build();
        let markup =
            render_to_string(default_ctx(), r"\nosuchcommand{x}", &settings)?;
        assert!(markup.contains("katex-error"));
        assert!(markup.contains("#cc0000"));
        assert!(markup.contains(r"\nosuchcommand"));
        Ok(())
    });

    it("should report error positions", || {
        let err = get_parsed(r"x^").unwrap_err();
        assert!(err.position.is_some());
        Ok(())
    });

    it("should enforce maxExpand", || {
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .max_expand(10)
            .build();
        let result = render_to_string(
            default_ctx(),
            r"\def\x{\x}\x",
            &settings,
        );
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn macros_and_definitions() {
    it("should expand user macros from settings", || {
        let mut macros = mathtex::macro_expander::MacroMap::default();
        macros.insert(
            r"\half".to_owned(),
            mathtex::macros::MacroDefinition::String(r"\frac{1}{2}".to_owned()),
        );
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .macros(macros)
            .build();
        let markup = render_to_string(default_ctx(), r"\half", &settings)?;
        assert!(markup.contains("mfrac"));
        Ok(())
    });

    it("should support \\def with parameters", || {
        let markup = render(r"\def\foo#1{#1^2}\foo{x}")?;
        assert!(markup.contains("msupsub"));
        Ok(())
    });

    it("should support \\newcommand", || {
        render(r"\newcommand{\hop}[1]{#1+1}\hop{2}").map(|_| ())
    });

    it("should scope \\def to groups", || {
        expect_parse_error(r"{\def\foo{x}}\foo");
        Ok(())
    });

    it("should support \\gdef across groups", || {
        render(r"{\gdef\foo{y}}\foo").map(|_| ())
    });
}

#[test]
fn environments() {
    it("should parse the matrix family", || {
        for env in ["matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix"] {
            let src = format!("\\begin{{{env}}} a & b \\\\ c & d \\end{{{env}}}");
            get_parsed(&src)?;
        }
        Ok(())
    });

    it("should reject mismatched \\begin and \\end", || {
        expect_parse_error(r"\begin{matrix} a \end{pmatrix}");
        Ok(())
    });

    it("should parse cases", || {
        let markup = render(r"f(x)=\begin{cases} 1 & x>0 \\ 0 & x\le 0 \end{cases}")?;
        assert!(markup.contains("mtable"));
        Ok(())
    });

    it("should parse aligned", || {
        render(r"\begin{aligned} x &= y \\ z &= w \end{aligned}").map(|_| ())
    });

    it("should parse array with column specs and rules", || {
        render(r"\begin{array}{l|c} a & b \\ \hline c & d \end{array}").map(|_| ())
    });

    it("should honor row gaps", || {
        render(r"\begin{matrix} a \\[1em] b \end{matrix}").map(|_| ())
    });
}

#[test]
fn operators() {
    it("should render \\sum as a large op in display mode", || {
        let markup = render_display(r"\sum_{i=0}^n i")?;
        assert!(markup.contains("op-limits"));
        Ok(())
    });

    it("should keep integral scripts beside the base", || {
        let markup = render_display(r"\int_0^1 x")?;
        assert!(!markup.contains("op-limits"));
        Ok(())
    });

    it("should render named functions upright", || {
        let markup = render(r"\sin x")?;
        assert!(markup.contains("mop"));
        Ok(())
    });

    it("should honor \\limits", || {
        let markup = render(r"\sum\limits_0^1 x")?;
        assert!(markup.contains("op-limits"));
        Ok(())
    });

    it("should support \\operatorname", || {
        let markup = render(r"\operatorname{foo}(x)")?;
        assert!(markup.contains("mop"));
        Ok(())
    });
}

#[test]
fn text_mode() {
    it("should preserve spaces in \\text", || {
        let markup = render(r"\text{a b}")?;
        assert!(markup.contains("\u{a0}"));
        Ok(())
    });

    it("should form ligatures", || {
        // "--" merges into one node at parse time; the en-dash replacement
        // happens at build time through the symbol table.
        let parsed = get_parsed(r"\text{--}")?;
        let ParseNode::Text(text) = &parsed[0] else {
            panic!("expected text node");
        };
        assert_eq!(text.body.len(), 1);
        assert_eq!(text.body[0].text(), Some("--"));
        let markup = render(r"\text{--}")?;
        assert!(markup.contains('\u{2013}'));
        Ok(())
    });

    it("should reject math-only commands in text mode", || {
        expect_parse_error(r"\text{\frac{1}{2}}");
        Ok(())
    });

    it("should allow nested math inside text", || {
        render(r"\text{the value $x^2$}").map(|_| ())
    });
}

#[test]
fn trust_policy() {
    it("should reject \\href by default", || {
        assert!(render(r"\href{https://example.com/}{x}").is_err());
        Ok(())
    });

    it("should render \\href when trusted", || {
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .trust(TrustSetting::Bool(true))
            .build();
        let markup =
            render_to_string(default_ctx(), r"\href{https://example.com/}{x}", &settings)?;
        assert!(markup.contains("<a "));
        assert!(markup.contains("href=\"https://example.com/\""));
        Ok(())
    });
}

#[test]
fn mathml_output() {
    it("should emit mi/mn/mo with annotation", || {
        let markup = render("x+1")?;
        assert!(markup.contains("<mi>x</mi>"));
        assert!(markup.contains("<mn>1</mn>"));
        assert!(markup.contains("<mo>+</mo>"));
        assert!(markup.contains("annotation"));
        assert!(markup.contains("application/x-tex"));
        Ok(())
    });

    it("should emit mfrac and msqrt", || {
        let markup = render(r"\frac{1}{2}\sqrt{x}")?;
        assert!(markup.contains("<mfrac>"));
        assert!(markup.contains("<msqrt>"));
        Ok(())
    });

    it("should emit mroot for indexed roots", || {
        let markup = render(r"\sqrt[3]{x}")?;
        assert!(markup.contains("<mroot>"));
        Ok(())
    });

    it("should support mathml-only output", || {
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .output(OutputFormat::Mathml)
            .build();
        let markup = render_to_string(default_ctx(), "x", &settings)?;
        assert!(markup.contains("<math"));
        assert!(!markup.contains("katex-html"));
        Ok(())
    });

    it("should mark display mode on the math root", || {
        let markup = render_display("x")?;
        assert!(markup.contains("display=\"block\""));
        Ok(())
    });
}

#[test]
fn markup_validity() {
    it("should escape attribute content", || {
        let settings = Settings::builder()
            .strict(StrictSetting::Mode(StrictMode::Ignore))
            .trust(TrustSetting::Bool(true))
            .build();
        let markup = render_to_string(
            default_ctx(),
            "\\href{https://example.com/?a=1&b=2}{x}",
            &settings,
        )?;
        assert!(markup.contains("a=1&amp;b=2"));
        Ok(())
    });

    it("should balance all emitted tags", || {
        let markup = render(r"\frac{a+b}{\sqrt{c}}\left(\sum_{i}^{n} x\right)")?;
        for tag in ["span", "svg", "math", "mrow", "semantics"] {
            let open = markup.matches(&format!("<{tag}")).count();
            let close = markup.matches(&format!("</{tag}>")).count();
            assert_eq!(open, close, "unbalanced <{tag}>");
        }
        Ok(())
    });

    it("should escape text content", || {
        let markup = render(r"\text{a<b}")?;
        assert!(markup.contains("a&lt;b"));
        Ok(())
    });
}

#[test]
fn styles_and_sizing() {
    it("should apply sizing classes", || {
        let markup = render(r"\Huge x")?;
        assert!(markup.contains("size11"));
        Ok(())
    });

    it("should switch styles", || {
        render(r"\displaystyle x \textstyle y \scriptstyle z").map(|_| ())
    });

    it("should use the display style for display mode", || {
        let ctx = MathTexContext::default();
        let settings = Settings::builder().display_mode(true).build();
        let markup = render_to_string(&ctx, r"x", &settings)?;
        assert!(markup.contains("katex-display"));
        Ok(())
    });

    it("should scale glue in sized groups", || {
        // A single sizing node derives glue options from its size.
        render(r"\Huge{a+b}").map(|_| ())
    });
}

#[test]
fn visual_determinism() {
    it("should render identical markup for identical input", || {
        let a = render(r"\sum_{i=0}^{n} \frac{i}{2}")?;
        let b = render(r"\sum_{i=0}^{n} \frac{i}{2}")?;
        assert_eq!(a, b);
        Ok(())
    });
}
