//! The array family: `array`, the matrix environments, `cases`, `aligned`,
//! `gathered`, `alignedat`, `smallmatrix`, `subarray`.

use crate::build_common::{
    VListElemAndShift, VListParam, make_line_span, make_span, make_v_list,
};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_environment::{EnvDefSpec, EnvProps};
use crate::dom_tree::HtmlDomNode;
use crate::macros::MacroContextInterface as _;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::Parser;
use crate::parser::parse_node::{
    AlignSpec, AnyParseNode, ColSeparationType, NodeType, ParseNode, ParseNodeArray,
    ParseNodeLeftRight, ParseNodeOrdGroup, ParseNodeStyling,
};
use crate::style::{DISPLAY, TEXT, Style};
use crate::types::{BreakToken, CssProperty, Mode, ParseError, ParseErrorKind};
use crate::units::make_em;

/// Read `\hline` / `\hdashline` tokens at a row boundary.
fn get_hlines(parser: &mut Parser) -> Result<Vec<bool>, ParseError> {
    let mut hlines = Vec::new();
    parser.consume_spaces()?;
    let mut next = parser.fetch()?.text.clone();
    while next == "\\hline" || next == "\\hdashline" {
        parser.consume();
        hlines.push(next == "\\hdashline");
        parser.consume_spaces()?;
        next = parser.fetch()?.text.clone();
    }
    Ok(hlines)
}

struct ArrayOptions {
    hskip_before_and_after: bool,
    add_jot: bool,
    cols: Option<Vec<AlignSpec>>,
    arraystretch: Option<f64>,
    col_separation_type: Option<ColSeparationType>,
}

/// Parse the body of an array-like environment up to (but not consuming)
/// `\end`.
fn parse_array(
    parser: &mut Parser,
    config: ArrayOptions,
    style: &'static Style,
) -> Result<AnyParseNode, ParseError> {
    parser.gullet.begin_group();

    let arraystretch = match config.arraystretch {
        Some(stretch) => stretch,
        None => {
            // \arraystretch, when user-defined, overrides the default.
            match parser.gullet.expand_macro_as_text("\\arraystretch")? {
                Some(text) => text.trim().parse::<f64>().map_err(|_| {
                    ParseError::new(ParseErrorKind::InvalidArrayStretch {
                        stretch: text.clone(),
                    })
                })?,
                None => 1.0,
            }
        }
    };
    if arraystretch < 0.0 {
        return Err(ParseError::new(ParseErrorKind::InvalidArrayStretch {
            stretch: arraystretch.to_string(),
        }));
    }

    let mut body: Vec<Vec<AnyParseNode>> = Vec::new();
    let mut row: Vec<AnyParseNode> = Vec::new();
    let mut row_gaps = Vec::new();
    let mut h_lines_before_row = Vec::new();

    h_lines_before_row.push(get_hlines(parser)?);

    loop {
        let cell = parser.parse_expression(false, Some(&BreakToken::DoubleBackslash))?;
        let cell = AnyParseNode::OrdGroup(ParseNodeOrdGroup {
            mode: parser.mode,
            loc: None,
            body: vec![AnyParseNode::Styling(ParseNodeStyling {
                mode: parser.mode,
                loc: None,
                style,
                body: cell,
            })],
            semisimple: false,
        });
        row.push(cell);

        let next = parser.fetch()?.text.clone();
        if next == "&" {
            parser.consume();
        } else if next == "\\end" {
            // The last empty row (from a trailing \\) drops, like LaTeX.
            if row.len() == 1
                && let AnyParseNode::OrdGroup(ord) = &row[0]
                && let Some(AnyParseNode::Styling(styling)) = ord.body.first()
                && styling.body.is_empty()
                && !body.is_empty()
            {
                row.clear();
            }
            if !row.is_empty() {
                body.push(core::mem::take(&mut row));
            }
            break;
        } else if next == "\\\\" {
            parser.consume();
            // \\ takes an optional gap argument.
            let size = if parser.gullet.future_mut()?.text == "[" {
                parser.parse_size_group(true)?.map(|s| s.value)
            } else {
                None
            };
            row_gaps.push(size);
            body.push(core::mem::take(&mut row));
            h_lines_before_row.push(get_hlines(parser)?);
        } else {
            return Err(ParseError::new(ParseErrorKind::ExpectedArrayDelimiter {
                found: next,
            }));
        }
    }

    parser.gullet.end_group()?;

    Ok(AnyParseNode::Array(Box::new(ParseNodeArray {
        mode: parser.mode,
        loc: None,
        col_separation_type: config.col_separation_type,
        hskip_before_and_after: config.hskip_before_and_after,
        add_jot: config.add_jot,
        cols: config.cols,
        arraystretch,
        body,
        row_gaps,
        h_lines_before_row,
    })))
}

/// Parse a column-spec group like `{lc|r}` into alignment specs.
fn parse_col_spec(arg: &AnyParseNode) -> Result<Vec<AlignSpec>, ParseError> {
    let nodes = match arg {
        AnyParseNode::OrdGroup(ord) => ord.body.as_slice(),
        single => core::slice::from_ref(single),
    };
    let mut cols = Vec::new();
    for node in nodes {
        let Some(text) = node.text() else { continue };
        match text {
            "c" | "l" | "r" => cols.push(AlignSpec::Align {
                align: text.to_owned(),
                pregap: None,
                postgap: None,
            }),
            "|" => cols.push(AlignSpec::Separator {
                separator: "|".to_owned(),
            }),
            ":" => cols.push(AlignSpec::Separator {
                separator: ":".to_owned(),
            }),
            other => {
                return Err(ParseError::new(ParseErrorKind::InvalidValue {
                    context: "column specification".to_owned(),
                    value: other.to_owned(),
                }));
            }
        }
    }
    Ok(cols)
}

struct Outrow {
    cells: Vec<HtmlDomNode>,
    pos: f64,
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Array(group) = node else {
        return Err(ParseError::new("Expected Array node"));
    };

    let pt = 1.0 / options.font_metrics().pt_per_em;
    let mut arraycolsep = 5.0 * pt;
    if group.col_separation_type == Some(ColSeparationType::Small) {
        // smallmatrix spacing from the amsmath definition.
        let local_multiplier = options.having_style(crate::style::SCRIPT).size_multiplier;
        arraycolsep = 0.2778 * (local_multiplier / options.size_multiplier);
    }

    let baselineskip = if group.col_separation_type == Some(ColSeparationType::AlignAt) {
        0.0
    } else {
        12.0 * pt
    };
    let jot = 3.0 * pt;
    let arstrut_height = 0.7 * group.arraystretch * baselineskip;
    let arstrut_depth = 0.3 * group.arraystretch * baselineskip;

    let mut total_height = 0.0;
    let mut nc = 0usize;
    let mut rows: Vec<Outrow> = Vec::with_capacity(group.body.len());

    // Heights of the horizontal lines above/below the rows.
    let mut hline_shifts: Vec<(f64, bool)> = Vec::new();
    let set_hlines =
        |hline_shifts: &mut Vec<(f64, bool)>, lines: &[bool], pos: f64| {
            for &dashed in lines {
                hline_shifts.push((pos, dashed));
            }
        };

    set_hlines(
        &mut hline_shifts,
        group.h_lines_before_row.first().map_or(&[], Vec::as_slice),
        -total_height,
    );

    for (r, inrow) in group.body.iter().enumerate() {
        let mut height = arstrut_height;
        let mut depth = arstrut_depth;
        nc = nc.max(inrow.len());

        let mut cells = Vec::with_capacity(inrow.len());
        for cell_node in inrow {
            let cell = build_html::build_group(ctx, cell_node, options, None)?;
            height = height.max(cell.height());
            depth = depth.max(cell.depth());
            cells.push(cell);
        }

        let mut gap = 0.0;
        if let Some(Some(row_gap)) = group.row_gaps.get(r) {
            gap = ctx.calculate_size(row_gap, options)?;
            if gap > 0.0 {
                gap += arstrut_depth;
                depth = depth.max(gap);
                gap = 0.0;
            }
        }
        // aligned environments add \jot between rows.
        if group.add_jot {
            depth += jot;
        }

        let pos = total_height + height;
        total_height += height + depth + gap;
        rows.push(Outrow { cells, pos });

        set_hlines(
            &mut hline_shifts,
            group
                .h_lines_before_row
                .get(r + 1)
                .map_or(&[], Vec::as_slice),
            -total_height,
        );
    }

    let offset = total_height / 2.0 + options.font_metrics().axis_height;

    // Assemble columns as individually shifted vlists.
    let mut cols: Vec<HtmlDomNode> = Vec::new();
    let mut col_index = 0usize;
    let default_cols: Vec<AlignSpec>;
    let col_descriptions: &[AlignSpec] = if let Some(cols) = &group.cols {
        cols
    } else {
        default_cols = (0..nc)
            .map(|_| AlignSpec::Align {
                align: "c".to_owned(),
                pregap: None,
                postgap: None,
            })
            .collect();
        &default_cols
    };

    let mut first_align = true;
    for col_description in col_descriptions {
        match col_description {
            AlignSpec::Separator { separator } => {
                let mut sep = make_span(
                    vec!["vertical-separator".to_owned()],
                    vec![],
                    Some(options),
                    None,
                );
                sep.style.insert(CssProperty::Height, make_em(total_height));
                sep.style.insert(
                    CssProperty::BorderRightWidth,
                    make_em(options.font_metrics().array_rule_width),
                );
                sep.style.insert(
                    CssProperty::BorderRightStyle,
                    if separator == ":" { "dashed" } else { "solid" },
                );
                sep.style
                    .insert(CssProperty::VerticalAlign, make_em(offset - total_height));
                cols.push(sep.into());
            }
            AlignSpec::Align {
                align,
                pregap,
                postgap,
            } => {
                let mut col_children = Vec::new();
                for row in &rows {
                    if let Some(cell) = row.cells.get(col_index) {
                        col_children.push(
                            VListElemAndShift::builder()
                                .elem(cell.clone())
                                .shift(row.pos - offset)
                                .build(),
                        );
                    }
                }
                if !col_children.is_empty() {
                    let col = make_v_list(
                        VListParam::IndividualShift {
                            children: col_children,
                        },
                        options,
                    )?;
                    let mut col = make_span(
                        vec![format!("col-align-{align}")],
                        vec![col.into()],
                        None,
                        None,
                    );

                    // Column gaps: arraycolsep outside and between columns.
                    let pregap = pregap.unwrap_or(if group.hskip_before_and_after {
                        arraycolsep
                    } else if first_align {
                        0.0
                    } else {
                        2.0 * arraycolsep
                    });
                    let postgap =
                        postgap.unwrap_or(if group.hskip_before_and_after {
                            arraycolsep
                        } else {
                            0.0
                        });
                    if pregap != 0.0 {
                        col.style.insert(CssProperty::MarginLeft, make_em(pregap));
                    }
                    if postgap != 0.0 {
                        col.style.insert(CssProperty::MarginRight, make_em(postgap));
                    }
                    cols.push(col.into());
                }
                col_index += 1;
                first_align = false;
            }
        }
    }

    let mut table = make_span(vec!["mtable".to_owned()], cols, Some(options), None);
    table.height = offset;
    table.depth = total_height - offset;

    if hline_shifts.is_empty() {
        return Ok(make_span(vec!["mord".to_owned()], vec![table.into()], Some(options), None).into());
    }

    // Overlay the horizontal lines at their recorded offsets.
    let mut vlist_children = vec![
        VListElemAndShift::builder()
            .elem(table.into())
            .shift(0.0)
            .build(),
    ];
    for (shift, dashed) in hline_shifts {
        let class = if dashed { "hdashline" } else { "hline" };
        let mut line = make_line_span(class, options, None);
        line.style.insert(CssProperty::Width, "100%");
        vlist_children.push(
            VListElemAndShift::builder()
                .elem(line.into())
                .shift(shift + offset)
                .build(),
        );
    }
    let vlist = make_v_list(
        VListParam::IndividualShift {
            children: vlist_children,
        },
        options,
    )?;
    Ok(make_span(vec!["mord".to_owned()], vec![vlist.into()], Some(options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Array(group) = node else {
        return Err(ParseError::new("Expected Array node"));
    };

    let mut table_rows = Vec::with_capacity(group.body.len());
    for row in &group.body {
        let mut cells = Vec::with_capacity(row.len());
        for cell in row {
            let content = build_mathml::build_group(ctx, cell, options)?;
            cells.push(MathNode::with_children(MathNodeType::Mtd, vec![content]).into());
        }
        table_rows.push(MathNode::with_children(MathNodeType::Mtr, cells).into());
    }
    let mut table = MathNode::with_children(MathNodeType::Mtable, table_rows);

    // Row spacing: 0.5em when stretched, else tighter per-environment gaps.
    let gap = if group.arraystretch == 0.5 {
        0.1
    } else {
        0.16 + group.arraystretch - 1.0 + if group.add_jot { 0.09 } else { 0.0 }
    };
    table.set_attribute("rowspacing", make_em(gap));
    if let Some(ColSeparationType::Align | ColSeparationType::AlignAt) = group.col_separation_type {
        table.set_attribute("columnspacing", "0em");
    } else if group.col_separation_type == Some(ColSeparationType::Small) {
        table.set_attribute("columnspacing", "0.2778em");
    } else {
        table.set_attribute("columnspacing", "1em");
    }

    // Column alignment from the specs.
    if let Some(cols) = &group.cols {
        let mut align = String::new();
        for col in cols {
            if let AlignSpec::Align { align: a, .. } = col {
                align.push_str(match a.as_str() {
                    "l" => "left ",
                    "r" => "right ",
                    _ => "center ",
                });
            }
        }
        table.set_attribute("columnalign", align.trim_end().to_owned());
    }
    Ok(table.into())
}

fn wrap_left_right(array: AnyParseNode, left: &str, right: &str, mode: Mode) -> AnyParseNode {
    AnyParseNode::LeftRight(ParseNodeLeftRight {
        mode,
        loc: None,
        body: vec![array],
        left: left.to_owned(),
        right: right.to_owned(),
        right_color: None,
    })
}

fn alternating_rl_cols(count: usize) -> Vec<AlignSpec> {
    let mut cols = Vec::with_capacity(2 * count);
    for i in 0..count {
        cols.push(AlignSpec::Align {
            align: "r".to_owned(),
            pregap: Some(if i == 0 { 0.0 } else { 1.0 }),
            postgap: Some(0.0),
        });
        cols.push(AlignSpec::Align {
            align: "l".to_owned(),
            pregap: Some(0.0),
            postgap: Some(0.0),
        });
    }
    cols
}

/// Number of column pairs from an `alignedat` argument.
fn parse_pair_count(arg: &AnyParseNode) -> Result<usize, ParseError> {
    let digits: String = match arg {
        AnyParseNode::OrdGroup(ord) => ord.body.iter().filter_map(AnyParseNode::text).collect(),
        other => other.text().unwrap_or_default().to_owned(),
    };
    digits.trim().parse::<usize>().map_err(|_| {
        ParseError::new(ParseErrorKind::InvalidValue {
            context: "alignedat argument".to_owned(),
            value: digits.clone(),
        })
    })
}

/// Register the array-family environments.
pub fn define_array(ctx: &mut MathTexContext) {
    // {array} / {darray} with an explicit column spec.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["array", "darray"],
        props: EnvProps {
            num_args: 1,
            ..EnvProps::default()
        },
        handler: |context, args, _opt_args| {
            let cols = parse_col_spec(&args[0])?;
            let style = if context.env_name.starts_with('d') {
                DISPLAY
            } else {
                TEXT
            };
            parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: true,
                    add_jot: false,
                    cols: Some(cols),
                    arraystretch: None,
                    col_separation_type: None,
                },
                style,
            )
        },
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    // The matrix family, with optional delimiters.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &[
            "matrix", "pmatrix", "bmatrix", "Bmatrix", "vmatrix", "Vmatrix",
        ],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let delimiters = match context.env_name.as_str() {
                "pmatrix" => Some(("(", ")")),
                "bmatrix" => Some(("[", "]")),
                "Bmatrix" => Some(("\\{", "\\}")),
                "vmatrix" => Some(("|", "|")),
                "Vmatrix" => Some(("\\Vert", "\\Vert")),
                _ => None,
            };
            let mode = context.parser.mode;
            let array = parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: false,
                    cols: None,
                    arraystretch: None,
                    col_separation_type: None,
                },
                TEXT,
            )?;
            Ok(match delimiters {
                Some((left, right)) => wrap_left_right(array, left, right, mode),
                None => array,
            })
        },
        html_builder: None,
        mathml_builder: None,
    });

    // {smallmatrix}: condensed script-size matrix.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["smallmatrix"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: false,
                    cols: None,
                    arraystretch: Some(0.5),
                    col_separation_type: Some(ColSeparationType::Small),
                },
                crate::style::SCRIPT,
            )
        },
        html_builder: None,
        mathml_builder: None,
    });

    // {subarray}: single column, for multi-line scripts.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["subarray"],
        props: EnvProps {
            num_args: 1,
            ..EnvProps::default()
        },
        handler: |context, args, _opt_args| {
            let cols = parse_col_spec(&args[0])?;
            if cols.len() > 1 {
                return Err(ParseError::new(ParseErrorKind::InvalidValue {
                    context: "subarray column specification".to_owned(),
                    value: "multiple columns".to_owned(),
                }));
            }
            parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: false,
                    cols: Some(cols),
                    arraystretch: Some(0.5),
                    col_separation_type: None,
                },
                crate::style::SCRIPT,
            )
        },
        html_builder: None,
        mathml_builder: None,
    });

    // {cases} / {rcases}.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["cases", "rcases"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let mode = context.parser.mode;
            let is_rcases = context.env_name == "rcases";
            let array = parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: false,
                    cols: Some(vec![
                        AlignSpec::Align {
                            align: "l".to_owned(),
                            pregap: Some(0.0),
                            postgap: Some(1.0),
                        },
                        AlignSpec::Align {
                            align: "l".to_owned(),
                            pregap: Some(0.0),
                            postgap: Some(0.0),
                        },
                    ]),
                    arraystretch: Some(1.2),
                    col_separation_type: None,
                },
                TEXT,
            )?;
            Ok(if is_rcases {
                wrap_left_right(array, ".", "\\}", mode)
            } else {
                wrap_left_right(array, "\\{", ".", mode)
            })
        },
        html_builder: None,
        mathml_builder: None,
    });

    // {aligned} / {split}: alternating right/left columns.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["aligned", "split"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            let array = parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: true,
                    cols: None,
                    arraystretch: None,
                    col_separation_type: Some(ColSeparationType::Align),
                },
                DISPLAY,
            )?;
            // Column count is known only after parsing.
            let AnyParseNode::Array(mut array) = array else {
                return Err(ParseError::new("Internal error: expected array node"));
            };
            let ncols = array.body.iter().map(Vec::len).max().unwrap_or(1);
            array.cols = Some(alternating_rl_cols(ncols.div_ceil(2)));
            Ok(AnyParseNode::Array(array))
        },
        html_builder: None,
        mathml_builder: None,
    });

    // {alignedat}{n}: exactly n column pairs.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["alignedat"],
        props: EnvProps {
            num_args: 1,
            ..EnvProps::default()
        },
        handler: |context, args, _opt_args| {
            let pairs = parse_pair_count(&args[0])?;
            let array = parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: true,
                    cols: Some(alternating_rl_cols(pairs)),
                    arraystretch: None,
                    col_separation_type: Some(ColSeparationType::AlignAt),
                },
                DISPLAY,
            )?;
            let AnyParseNode::Array(array_node) = &array else {
                return Err(ParseError::new("Internal error: expected array node"));
            };
            let ncols = array_node.body.iter().map(Vec::len).max().unwrap_or(0);
            if ncols > 2 * pairs {
                return Err(ParseError::new(ParseErrorKind::TooManyColumns {
                    expected: 2 * pairs,
                }));
            }
            Ok(array)
        },
        html_builder: None,
        mathml_builder: None,
    });

    // {gathered}: centered rows.
    ctx.define_environment(EnvDefSpec {
        node_type: NodeType::Array,
        names: &["gathered", "gather"],
        props: EnvProps::default(),
        handler: |context, _args, _opt_args| {
            parse_array(
                context.parser,
                ArrayOptions {
                    hskip_before_and_after: false,
                    add_jot: true,
                    cols: Some(vec![AlignSpec::Align {
                        align: "c".to_owned(),
                        pregap: None,
                        postgap: None,
                    }]),
                    arraystretch: None,
                    col_separation_type: Some(ColSeparationType::Gather),
                },
                DISPLAY,
            )
        },
        html_builder: None,
        mathml_builder: None,
    });

}
