//! Property tests for the whole pipeline
//!
//! Generated call trees rendered to source must compile to the matching
//! C-style text.

use proptest::prelude::*;
use tinycall::language::compile;

/// A generated expression and the output it must compile to.
#[derive(Clone, Debug)]
struct Case {
    source: String,
    output: String,
}

fn expression() -> impl Strategy<Value = Case> {
    let leaf = prop_oneof![
        "[0-9]{1,4}".prop_map(|n| Case {
            source: n.clone(),
            output: n,
        }),
        "[a-z]{0,5}".prop_map(|s| Case {
            source: format!("\"{s}\""),
            output: format!("\"{s}\""),
        }),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        ("[a-z]{1,5}", prop::collection::vec(inner, 0..4)).prop_map(|(name, args)| {
            let sources: Vec<_> = args.iter().map(|a| a.source.as_str()).collect();
            let outputs: Vec<_> = args.iter().map(|a| a.output.as_str()).collect();
            Case {
                source: format!("({name} {})", sources.join(" ")),
                output: format!("{name}({})", outputs.join(", ")),
            }
        })
    })
}

proptest! {
    #[test]
    fn generated_programs_compile(cases in prop::collection::vec(expression(), 1..4)) {
        let source: Vec<_> = cases.iter().map(|c| c.source.as_str()).collect();
        let expected: Vec<_> = cases
            .iter()
            .map(|c| {
                if c.source.starts_with('(') {
                    format!("{};", c.output)
                } else {
                    c.output.clone()
                }
            })
            .collect();
        prop_assert_eq!(compile(&source.join("\n")).unwrap(), expected.join("\n"));
    }

    #[test]
    fn whitespace_is_insignificant(ws in "[ \t\n]{1,4}") {
        let source = format!("{ws}(add{ws}2{ws}(subtract{ws}4{ws}2){ws}){ws}");
        prop_assert_eq!(compile(&source).unwrap(), "add(2, subtract(4, 2));");
    }
}
