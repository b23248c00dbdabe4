//! Indented plain-text notation for TLV trees.
//!
//! A primitive renders as `tag value`, a constructed node as its bare tag
//! followed by its children one level deeper:
//!
//! ```text
//! 00 01
//! 29
//!    00 A000000677010111
//!    01 0066891234567
//! 58 TH
//! ```

use log::debug;

use crate::tlv::{Tlv, Value};

const INDENT: &str = "   ";
const TAB_WIDTH: usize = 4;

pub fn render(tlvs: &[Tlv]) -> String {
    let mut out = String::new();
    render_into(&mut out, tlvs, 0);
    out
}

fn render_into(out: &mut String, tlvs: &[Tlv], depth: usize) {
    for tlv in tlvs {
        for _ in 0..depth {
            out.push_str(INDENT);
        }

        match &tlv.value {
            Value::Primitive(v) => {
                out.push_str(&tlv.tag);
                out.push(' ');
                out.push_str(v);
                out.push('\n');
            }
            Value::Constructed(children) => {
                out.push_str(&tlv.tag);
                out.push('\n');
                render_into(out, children, depth + 1);
            }
        }
    }
}

/// Parses outline text back into a tree. Never fails, blank lines are skipped.
pub fn parse(outline: &str) -> Vec<Tlv> {
    let expanded = outline.replace('\t', &" ".repeat(TAB_WIDTH));
    let mut parser = Parser {
        lines: expanded.lines().collect(),
        pos: 0,
    };

    parser.block(0)
}

struct Parser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl Parser<'_> {
    fn block(&mut self, min_indent: usize) -> Vec<Tlv> {
        let mut out = Vec::new();

        while let Some(&raw) = self.lines.get(self.pos) {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                self.pos += 1;
                continue;
            }

            let indent = raw.chars().take_while(|c| c.is_whitespace()).count();
            if indent < min_indent {
                break;
            }

            self.pos += 1;

            match trimmed.split_once(' ') {
                Some((tag, value)) => out.push(Tlv::primitive(tag, value)),
                None => {
                    let children = self.block(indent + 1);
                    debug!("outline block {} with {} children", trimmed, children.len());
                    out.push(Tlv::constructed(trimmed, children));
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_renders_primitive() {
        let outline = "01 AB\n";
        let parsed = parse(outline);
        assert_eq!(parsed, vec![Tlv::primitive("01", "AB")]);
        assert_eq!(render(&parsed), outline);
    }

    #[test]
    fn parses_and_renders_nested() {
        let outline = "29\n   01 AB\n";
        let parsed = parse(outline);
        assert_eq!(
            parsed,
            vec![Tlv::constructed("29", vec![Tlv::primitive("01", "AB")])]
        );
        assert_eq!(render(&parsed), outline);
    }

    #[test]
    fn dedent_closes_block() {
        let parsed = parse("00 01\n29\n   00 X\n   01 Y\n58 TH\n");
        assert_eq!(
            parsed,
            vec![
                Tlv::primitive("00", "01"),
                Tlv::constructed(
                    "29",
                    vec![Tlv::primitive("00", "X"), Tlv::primitive("01", "Y")]
                ),
                Tlv::primitive("58", "TH"),
            ]
        );
    }

    #[test]
    fn tabs_and_blank_lines() {
        let parsed = parse("\n29\r\n\t01 AB\r\n\n\t02 CD\n\n");
        assert_eq!(
            parsed,
            vec![Tlv::constructed(
                "29",
                vec![Tlv::primitive("01", "AB"), Tlv::primitive("02", "CD")]
            )]
        );
    }

    #[test]
    fn any_deeper_indent_is_a_child() {
        let parsed = parse("29\n 01 AB\n        02 CD\n30\n");
        assert_eq!(
            parsed,
            vec![
                Tlv::constructed(
                    "29",
                    vec![Tlv::primitive("01", "AB"), Tlv::primitive("02", "CD")]
                ),
                Tlv::constructed("30", vec![]),
            ]
        );
    }

    #[test]
    fn value_kept_verbatim_after_first_space() {
        let parsed = parse("59 SOME  SHOP NAME\n");
        assert_eq!(parsed, vec![Tlv::primitive("59", "SOME  SHOP NAME")]);
    }

    #[test]
    fn render_indents_each_level() {
        let tree = vec![
            Tlv::constructed(
                "62",
                vec![Tlv::primitive("05", "REF"), Tlv::primitive("07", "T1")],
            ),
            Tlv::primitive("63", "ABCD"),
        ];
        let text = render(&tree);
        assert_eq!(text, "62\n   05 REF\n   07 T1\n63 ABCD\n");
        assert_eq!(parse(&text), tree);
    }

    #[test]
    fn trailing_whitespace_is_not_part_of_a_value() {
        assert_eq!(parse("59 SHOP  \n"), vec![Tlv::primitive("59", "SHOP")]);
    }

    #[test]
    fn empty_primitive_reads_back_as_empty_block() {
        let text = render(&[Tlv::primitive("01", "")]);
        assert_eq!(text, "01 \n");
        assert_eq!(parse(&text), vec![Tlv::constructed("01", vec![])]);
        assert_eq!(
            crate::tlv::encode(&parse(&text)),
            crate::tlv::encode(&[Tlv::primitive("01", "")])
        );
    }

    #[test]
    fn empty_outline() {
        assert!(parse("").is_empty());
        assert!(parse("\n  \n\t\n").is_empty());
        assert_eq!(render(&[]), "");
    }
}
