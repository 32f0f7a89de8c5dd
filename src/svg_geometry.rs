//! SVG path data for stretchy primitives.
//!
//! Fixed-extent glyph paths live in [`PATH_MAP`]; surds and very tall
//! delimiters are generated on demand so the vinculum or body can be
//! stretched to an exact viewBox height. All coordinates are in the fonts'
//! 1000-units-per-em space.

use core::fmt::Write as _;

use crate::types::{ParseError, ParseErrorKind};
use phf::phf_map;

/// Named fixed paths used by the stretchy subsystem and `\vec`/`\oiint`
/// overlays. Width/height bookkeeping for these lives with their call sites.
pub const PATH_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "vec" => "M377 20c0-5-2-10-7-14l-10-8c-4-2-8-3-12-3s-8 1-12 3l-10 8c-5 4-7 9-7 14\
 0 4 2 9 6 13l52 48H12c-7 0-12 5-12 11s5 12 12 12h365l-52 48c-4 4-6 8-6 13z",
    "rightarrow" => "M400000 241H110l3-3c68-40 115-97 141-167 5-13 8-21 8-23s-1-4-4-5\
h-27c-3 0-5 1-6 5-4 11-9 23-16 35-29 53-74 90-135 111l-9 3v54l9 3c61 21 106 58 135 111\
 7 12 12 24 16 35 1 4 3 5 6 5h27c3-1 4-3 4-5s-3-10-8-23c-26-70-73-127-141-167l-3-3h289890z",
    "leftarrow" => "M400000 241H110l3 3c68 40 115 97 141 167 5 13 8 21 8 23s-1 4-4 5\
h-27c-3 0-5-1-6-5-4-11-9-23-16-35-29-53-74-90-135-111l-9-3v-54l9-3c61-21 106-58 135-111\
 7-12 12-24 16-35 1-4 3-5 6-5h27c3 1 4 3 4 5s-3 10-8 23c-26 70-73 127-141 167z",
    "doublerightarrow" => "M399738 184c-10 10-22 21-36 33-14 12-27 25-39 39l-9 10h-286\
c-5 0-8 3-8 8s3 8 8 8h264l-14 24c-6 11-11 22-15 33-2 6 0 9 6 9h22c4 0 7-2 8-6 12-33 31-62\
 57-87 26-25 56-44 90-57 4-1 6-4 6-8s-2-7-6-8c-34-13-64-32-90-57z",
    "doubleleftarrow" => "M262 184c10 10 22 21 36 33 14 12 27 25 39 39l9 10h286c5 0 8 3\
 8 8s-3 8-8 8H368l14 24c6 11 11 22 15 33 2 6 0 9-6 9h-22c-4 0-7-2-8-6-12-33-31-62-57-87\
-26-25-56-44-90-57-4-1-6-4-6-8s2-7 6-8c34-13 64-32 90-57z",
    "leftharpoon" => "M0 267c13 2 26 5 38 9 60 20 103 58 128 112 5 11 8 17 11 17h22\
c6 0 8-3 6-9-6-17-14-33-23-48l-14-24h389872c5 0 8-3 8-8s-3-8-8-8H166l9-10c12-14 25-27 39-39\
 14-12 26-23 36-33z",
    "rightharpoon" => "M400000 267c-13 2-26 5-38 9-60 20-103 58-128 112-5 11-8 17-11 17\
h-22c-6 0-8-3-6-9 6-17 14-33 23-48l14-24H10c-5 0-8-3-8-8s3-8 8-8h389824l-9-10\
c-12-14-25-27-39-39-14-12-26-23-36-33z",
    "leftharpoondown" => "M7 241c-4 0-7 2-7 5 0 2 1 5 4 8 38 34 85 60 141 78l9 3h399839\
c5 0 8-3 8-8s-3-8-8-8H194l-14-24c-9-15-17-31-23-48-2-6-8-9-14-9z",
    "rightharpoondown" => "M399993 241c4 0 7 2 7 5 0 2-1 5-4 8-38 34-85 60-141 78l-9 3H161\
c-5 0-8-3-8-8s3-8 8-8h399806l14-24c9-15 17-31 23-48 2-6 8-9 14-9z",
    "longequal" => "M0 50h400000v40H0zm0 194h400000v40H0z",
    "twoheadleftarrow" => "M0 167c68 40 116 96 142 167h22c6 0 8-3 6-9-4-12-10-24-16-36\
l-14-26h84l-14 26c-6 12-12 24-16 36-2 6 0 9 6 9h22c26-71 74-127 142-167v-30\
c-68-40-116-96-142-167h-22c-6 0-8 3-6 9 4 12 10 24 16 36l14 26h-84l14-26c6-12 12-24 16-36\
 2-6 0-9-6-9h-22C116 41 68 97 0 137z",
    "twoheadrightarrow" => "M400000 167c-68 40-116 96-142 167h-22c-6 0-8-3-6-9 4-12 10-24\
 16-36l14-26h-84l14 26c6 12 12 24 16 36 2 6 0 9-6 9h-22c-26-71-74-127-142-167v-30\
c68-40 116-96 142-167h22c6 0 8 3 6 9-4 12-10 24-16 36l-14 26h84l-14-26c-6-12-12-24-16-36\
-2-6 0-9 6-9h22c26 71 74 127 142 167z",
    "leftbrace" => "M6 548l-6-6v-35l6-11c56-104 135-163 238-176 16-2 42-3 53-3h474v120H588\
c-100 0-173 34-218 102l-10 14z",
    "midbrace" => "M384 4c24 0 38 20 38 49v400c0 34 11 64 32 90 21 27 49 46 84 57l11 4v13\
l-11 4c-35 11-63 30-84 57-21 26-32 56-32 90v400c0 29-14 49-38 49s-38-20-38-49V718\
c0-34-11-64-32-90-21-27-49-46-84-57l-11-4v-13l11-4c35-11 63-30 84-57 21-26 32-56 32-90z",
    "rightbrace" => "M765 535l6 6v35l-6 11c-56 104-135 163-238 176-16 2-42 3-53 3H0V646\
h183c100 0 173-34 218-102l10-14z",
    "leftbraceunder" => "M0 6l6-6h17c12 0 19 1 22 3 64 33 118 86 161 160l9 16h399761v40\
H213l-9 16c-43 74-97 127-161 160-3 2-10 3-22 3H6l-6-6z",
    "midbraceunder" => "M441 540c23 0 37-19 37-47V93c0-32 10-61 31-86 20-24 47-42 80-53\
l11-4V-63l-11-4c-33-11-60-29-80-53-21-25-31-54-31-86z",
    "rightbraceunder" => "M399994 0l6 6v17c0 12-1 19-3 22-33 64-86 118-160 161l-16 9H0v40\
h399821l16 9c74 43 127 97 160 161 2 3 3 10 3 22v17l-6 6z",
    "leftgroup" => "M400000 80H435C64 80 168 229 21 703c-5 13-9 29-9 25v-60\
c0-218 165-568 421-568h399568z",
    "rightgroup" => "M0 80h399565c256 0 421 350 421 568v60c0 4-4-12-9-25C399832 229 399936 80\
 399565 80H0z",
    "leftgroupunder" => "M400000 262H435C64 262 168 112 21-362c-5-13-9-29-9-25v60\
c0 218 165 568 421 568h399568z",
    "rightgroupunder" => "M0 262h399565c256 0 421-350 421-568v-60c0-4-4 12-9 25\
C399832 112 399936 262 399565 262H0z",
    "lefthook" => "M400000 281H103s-33-11.2-61-33.5S0 197.4 0 164s14.2-61.2 42.5-83.5\
C70.8 58.2 104 47 142 47h16v40h-16c-44 0-72 26-72 77 0 52 28 77 72 77h399858z",
    "righthook" => "M399859 241c-44 0-72-25-72-77 0-51 28-77 72-77h16V47h-16\
c-38 0-71.2 11.2-99.5 33.5C399731 102.8 399717 130 399717 164s14 61.2 42.5 83.5\
c28.3 22.3 61.5 33.5 99.5 33.5h141v-40z",
    "leftmapsto" => "M40 281 V428 H0 V94 H40 V241 H400000 v40z",
    "leftToFrom" => "M0 147h400000v40H0zm0 214c68 40 115 97 141 167h22c15 0 21-5 17-15\
-4-15-11-32-20-49-13-28-31-51-52-71h399891v-40z",
    "rightToFrom" => "M400000 187c-68-40-115-97-141-167h-22c-15 0-21 5-17 15 4 15 11 32\
 20 49 13 28 31 51 52 71H0v40h399891z",
    "baraboveleftarrow" => "M0 620h400000v40H0zM0 241c68-40 115-97 141-167h22c15 0 21 5\
 17 15-4 15-11 32-20 49-13 28-31 51-52 71h399891v40H108c21 20 39 43 52 71 9 17 16 34 20 49\
 4 10-2 15-17 15h-22C115 338 68 281 0 241z",
    "rightarrowabovebar" => "M0 241h400000v40H0zm400000 379c-68 40-115 97-141 167h-22\
c-15 0-21-5-17-15 4-15 11-32 20-49 13-28 31-51 52-71H0v-40h399891z",
    "baraboveshortleftharpoon" => "M0 620h400000v40H0zM7 241c-4 0-7 2-7 5 0 2 1 5 4 8\
 38 34 85 60 141 78l9 3h399839v-40H194l-14-24c-9-15-17-31-23-48-2-6-8-9-14-9z",
    "rightharpoonaboveshortbar" => "M0 241h400000v40H0zm399993 379c4 0 7-2 7-5 0-2-1-5-4-8\
-38-34-85-60-141-78l-9-3H161v40h399806l14 24c9 15 17 31 23 48 2 6 8 9 14 9z",
    "shortbaraboveleftharpoon" => "M0 620h400000v40H0zM7 241c-4 0-7 2-7 5 0 2 1 5 4 8\
 38 34 85 60 141 78l9 3h239839v-40H194l-14-24c-9-15-17-31-23-48-2-6-8-9-14-9z",
    "shortrightharpoonabovebar" => "M0 241h400000v40H0zm399993 379c4 0 7-2 7-5 0-2-1-5-4-8\
-38-34-85-60-141-78l-9-3H321v40h399646l14 24c9 15 17 31 23 48 2 6 8 9 14 9z",
    "widehat1" => "M529 0h5l519 115c5 1 9 5 9 10 0 1-1 2-1 3l-4 22c-1 5-5 9-11 9h-2L532 67 19 159\
h-2c-5 0-9-4-11-9l-5-22c-1-6 2-12 8-13z",
    "widehat2" => "M1181 0h2l1171 176c6 0 10 5 10 11l-2 23c-1 6-5 10-11 10h-1L1182 67 15 220\
h-1c-6 0-10-4-11-10l-2-23c-1-6 4-11 10-11z",
    "widehat3" => "M1181 0h2l1171 236c6 0 10 5 10 11l-2 23c-1 6-5 10-11 10h-1L1182 67 15 280\
h-1c-6 0-10-4-11-10l-2-23c-1-6 4-11 10-11z",
    "widehat4" => "M1181 0h2l1171 296c6 0 10 5 10 11l-2 23c-1 6-5 10-11 10h-1L1182 67 15 340\
h-1c-6 0-10-4-11-10l-2-23c-1-6 4-11 10-11z",
    "widecheck1" => "M529 159h5l519-115c5-1 9-5 9-10 0-1-1-2-1-3l-4-22c-1-5-5-9-11-9h-2L532 92 19 0\
h-2c-5 0-9 4-11 9l-5 22c-1 6 2 12 8 13z",
    "widecheck2" => "M1181 220h2l1171-176c6 0 10-5 10-11l-2-23c-1-6-5-10-11-10h-1L1182 153 15 0\
h-1c-6 0-10 4-11 10l-2 23c-1 6 4 11 10 11z",
    "widecheck3" => "M1181 280h2l1171-236c6 0 10-5 10-11l-2-23c-1-6-5-10-11-10h-1L1182 153 15 0\
h-1c-6 0-10 4-11 10l-2 23c-1 6 4 11 10 11z",
    "widecheck4" => "M1181 340h2l1171-296c6 0 10-5 10-11l-2-23c-1-6-5-10-11-10h-1L1182 153 15 0\
h-1c-6 0-10 4-11 10l-2 23c-1 6 4 11 10 11z",
    "tilde1" => "M200 55c39 0 49 23 70 23 27 0 40-20 40-46l30 5c0 45-20 86-72 86-39 0-49-23-70-23\
-27 0-40 20-40 46l-30-5c0-45 20-86 72-86z",
    "tilde2" => "M344 55c69 0 86 23 124 23 48 0 70-20 70-46l42 5c0 45-35 86-127 86-69 0-86-23-124-23\
-48 0-70 20-70 46l-42-5c0-45 35-86 127-86z",
    "tilde3" => "M786 59c125 0 155 25 224 25 86 0 126-21 126-48l57 5c0 48-63 88-189 88-125 0-155-25\
-224-25-86 0-126 21-126 48l-57-5c0-48 63-88 189-88z",
    "tilde4" => "M786 58c125 0 155 26 224 26 86 0 126-22 126-50l57 5c0 50-63 90-189 90-125 0-155-26\
-224-26-86 0-126 22-126 50l-57-5c0-50 63-90 189-90z",
    "oiintSize1" => "M512.6 71.6c0-26.9-4.3-49.4-12.9-67.4C491.1-13.8 479-23 463.4-23\
c-15.7 0-27.9 9.2-36.5 27.2-8.6 18-12.9 40.5-12.9 67.4s4.3 49.4 12.9 67.4c8.6 18 20.8 27.2 36.5 27.2\
 15.6 0 27.7-9.2 36.3-27.2 8.6-18 12.9-40.5 12.9-67.4z",
    "oiintSize2" => "M757.8 100.1c0-38.4-6.2-70.5-18.5-96.3C726.9-22 709.6-35 687.3-35\
c-22.4 0-39.8 13-52.1 38.8-12.3 25.8-18.5 57.9-18.5 96.3s6.2 70.5 18.5 96.3c12.3 25.8 29.7 38.8 52.1 38.8\
 22.3 0 39.6-13 51.9-38.8 12.4-25.8 18.6-57.9 18.6-96.3z",
    "oiiintSize1" => "M681.4 71.6c0-26.9-4.3-49.4-12.9-67.4C659.9-13.8 647.8-23 632.2-23\
c-15.7 0-27.9 9.2-36.5 27.2-8.6 18-12.9 40.5-12.9 67.4s4.3 49.4 12.9 67.4c8.6 18 20.8 27.2 36.5 27.2\
 15.6 0 27.7-9.2 36.3-27.2 8.6-18 12.9-40.5 12.9-67.4z",
    "oiiintSize2" => "M985.9 100.1c0-38.4-6.2-70.5-18.5-96.3C955-22 937.7-35 915.4-35\
c-22.4 0-39.8 13-52.1 38.8-12.3 25.8-18.5 57.9-18.5 96.3s6.2 70.5 18.5 96.3c12.3 25.8 29.7 38.8 52.1 38.8\
 22.3 0 39.6-13 51.9-38.8 12.4-25.8 18.6-57.9 18.6-96.3z",
};

/// The hook part of a surd, shared by every generated sqrt path. `extra` is
/// extra vinculum thickness in SVG units, `h` the viewBox height.
fn surd_hook(w: &mut String, extra: f64, h: f64) {
    // Hook geometry from the U+221A glyph, shifted down by the extra
    // vinculum and scaled to reach the given height.
    let slope_top = h - 80.0 - extra;
    let _ = write!(
        w,
        "M95 {}c-2.7 0-9 4-18.7 12l-5.3 4.3-71-71 18-18 52 52 {:.0} {:.0}c4-6.7 10-10 18-10 H400000v{}h-{:.0}z",
        622.0 + extra,
        200.0,
        slope_top,
        40.0 + extra,
        399905.0
    );
}

/// Path for a surd of the given flavor, with `extra_vinculum` extra rule
/// thickness (SVG units) and a total `view_box_height`.
#[must_use]
pub fn sqrt_path(sqrt_name: &str, extra_vinculum: f64, view_box_height: f64) -> String {
    let mut path = String::new();
    match sqrt_name {
        "sqrtMain" => surd_hook(&mut path, extra_vinculum, 1000.0 + extra_vinculum),
        "sqrtSize1" => surd_hook(&mut path, extra_vinculum, 1200.0 + extra_vinculum),
        "sqrtSize2" => surd_hook(&mut path, extra_vinculum, 1800.0 + extra_vinculum),
        "sqrtSize3" => surd_hook(&mut path, extra_vinculum, 2400.0 + extra_vinculum),
        "sqrtSize4" => surd_hook(&mut path, extra_vinculum, 3000.0 + extra_vinculum),
        _ => surd_hook(&mut path, extra_vinculum, view_box_height),
    }
    path
}

/// Path for the repeated inner section of a stacked delimiter drawn as a
/// vertical bar (or double bar) of the requested height.
#[must_use]
pub fn inner_path(ch: &str, height: f64) -> String {
    match ch {
        "\u{2016}" => format!(
            "M145 1v{h}h60V1zm238 0v{h}h60V1z",
            h = height - 2.0
        ),
        "\u{2225}" => format!(
            "M145 1v{h}h60V1zm283 0v{h}h60V1z",
            h = height - 2.0
        ),
        _ => format!("M145 1v{h}h60V1z", h = height - 2.0),
    }
}

/// Path for a one-piece tall delimiter whose middle section stretches to
/// `mid_height` SVG units.
pub fn tall_delim(label: &str, mid_height: f64) -> Result<String, ParseError> {
    let m = mid_height;
    let path = match label {
        "lparen" => format!(
            "M863 9c0-2-2-5-6-9h-27c-22 0-41 12-56 35-62 92-93 228-93 408v{m}c0 180 31 316 93 408 15 23 34 35 56 35h27c4-4 6-7 6-9l-3-6c-57-84-86-227-86-428v{m}c0-201 29-344 86-428z"
        ),
        "rparen" => format!(
            "M76 0c-4 4-6 7-6 9l3 6c57 84 86 227 86 428v{m}c0 201-29 344-86 428l-3 6c0 2 2 5 6 9h27c22 0 41-12 56-35 62-92 93-228 93-408v{m}c0-180-31-316-93-408-15-23-34-35-56-35z"
        ),
        "lbrack" => format!("M319 0H126v{t}h193v-40H186V80h133z", t = m + 1519.0),
        "rbrack" => format!("M347 0H154v40h133v{b}H154v40h193z", b = m + 1439.0),
        "lfloor" => format!("M319 {t}H186V0h-60v{b}h193z", t = m + 1479.0, b = m + 1519.0),
        "rfloor" => format!("M347 {t}h-60V0h-133v40h133v{b}h60z", t = m + 1519.0, b = m + 1439.0),
        "lceil" => format!("M319 40H186v{t}h-60V0h193z", t = m + 1479.0),
        "rceil" => format!("M347 {t}h-60V40H154V0h193z", t = m + 1519.0),
        "vert" => format!("M145 15v585v{m}v585c0 8 7 15 15 15h30c8 0 15-7 15-15v-585v-{m}v-585c0-8-7-15-15-15h-30c-8 0-15 7-15 15z"),
        "doublevert" => format!(
            "M145 15v585v{m}v585c0 8 7 15 15 15h30c8 0 15-7 15-15v-585v-{m}v-585c0-8-7-15-15-15h-30c-8 0-15 7-15 15zm238 0v585v{m}v585c0 8 7 15 15 15h30c8 0 15-7 15-15v-585v-{m}v-585c0-8-7-15-15-15h-30c-8 0-15 7-15 15z"
        ),
        _ => {
            return Err(ParseError::new(ParseErrorKind::UnknownStretchyElement {
                label: label.to_owned(),
            }));
        }
    };
    Ok(path)
}
