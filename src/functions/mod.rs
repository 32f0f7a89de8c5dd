//! Control-sequence function families, one module per family.

mod accent;
mod accentunder;
mod arrow;
mod char;
mod color;
mod cr;
mod def;
mod delimsizing;
mod enclose;
mod environment;
mod font;
mod genfrac;
mod hbox;
mod horiz_brace;
mod href;
mod html;
mod htmlmathml;
mod includegraphics;
mod kern;
mod lap;
mod math;
mod mathchoice;
mod mclass;
mod op;
mod operatorname;
mod ordgroup;
mod overline;
mod phantom;
mod raisebox;
mod relax;
mod rule;
mod sizing;
mod smash;
mod spacing;
mod sqrt;
mod styling;
mod supsub;
mod symbols;
mod tag;
mod text;
mod underline;
mod vcenter;
mod verb;

pub use accent::define_accent;
pub use accentunder::define_accentunder;
pub use arrow::define_arrow;
pub use char::define_char;
pub use color::define_color;
pub use cr::define_cr;
pub use def::define_def;
pub use delimsizing::define_delimsizing;
pub use enclose::define_enclose;
pub use environment::define_environment;
pub use font::define_font;
pub use genfrac::define_genfrac;
pub use hbox::define_hbox;
pub use horiz_brace::define_horiz_brace;
pub use href::define_href;
pub use html::define_html;
pub use htmlmathml::define_htmlmathml;
pub use includegraphics::define_includegraphics;
pub use kern::define_kern;
pub use lap::define_lap;
pub use math::define_math;
pub use mathchoice::define_mathchoice;
pub use mclass::{binrel_class, define_mclass};
pub use op::define_op;
pub use operatorname::define_operatorname;
pub use ordgroup::define_ordgroup;
pub use overline::define_overline;
pub use phantom::define_phantom;
pub use raisebox::define_raisebox;
pub use relax::define_relax;
pub use rule::define_rule;
pub use sizing::define_sizing;
pub use smash::define_smash;
pub use spacing::define_spacing;
pub use sqrt::define_sqrt;
pub use styling::define_styling;
pub use supsub::define_supsub;
pub use symbols::define_symbols;
pub use tag::define_tag;
pub use text::define_text;
pub use underline::define_underline;
pub use vcenter::define_vcenter;
pub use verb::define_verb;
