//! End-to-end pipeline tests: source text in, override text out

use rtlcss_core::{ExclusionTable, generate_override, parse_stylesheet, render};

#[test]
fn flat_stylesheet_round_trips_declarations() {
    let source = ".a { float: left; margin: 0; }\n.b { color: red }\n";
    let first = parse_stylesheet(source).unwrap();
    let mut first = first;
    first.normalize();

    let rendered = render(&first);
    let mut second = parse_stylesheet(&rendered).unwrap();
    second.normalize();

    assert_eq!(first.blocks().len(), second.blocks().len());
    for (a, b) in first.blocks().iter().zip(second.blocks()) {
        assert_eq!(a.selector, b.selector);
        let decls_a: Vec<_> = a.declarations().collect();
        let decls_b: Vec<_> = b.declarations().collect();
        assert_eq!(decls_a, decls_b);
    }
}

#[test]
fn generates_margin_swap_override() {
    let source = ".x { margin-left: 10px; margin-right: 20px; }";
    let out = generate_override(source, &ExclusionTable::new()).unwrap();
    assert_eq!(out, ".x{margin-left:20px;margin-right:10px}\n\n");
}

#[test]
fn non_directional_stylesheet_produces_empty_output() {
    let source = ".x { color: red; display: block }";
    let out = generate_override(source, &ExclusionTable::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn keyframes_override_only_contains_changed_steps() {
    let source = "@keyframes slide {\n  0% { margin-left: 0; transform: rotate(0deg); }\n  100% { margin-left: 100px; }\n}";
    let out = generate_override(source, &ExclusionTable::new()).unwrap();
    // the 0% step needs no mirroring and must not appear at all
    assert_eq!(
        out,
        "@keyframes slide{100%{margin-left:0;margin-right:100px}\n}\n\n"
    );
}

#[test]
fn keyframes_with_only_rotation_produce_nothing() {
    let source = "@keyframes spin {\n  0% { transform: rotate(0deg); }\n  100% { transform: rotate(359deg); }\n}";
    let out = generate_override(source, &ExclusionTable::new()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn exclusions_apply_per_selector() {
    let exclusions = ExclusionTable::parse("margin:.btn").unwrap();
    let source = ".btn { margin-left: 1px; margin-right: 2px; float: left }\n.other { margin-left: 1px; margin-right: 2px }";
    let out = generate_override(source, &exclusions).unwrap();
    assert_eq!(
        out,
        ".btn{float:right}\n\n\n.other{margin-left:2px;margin-right:1px}\n\n"
    );
}

#[test]
fn excluding_one_side_suppresses_both_sides_of_the_swap() {
    let exclusions = ExclusionTable::parse("margin-left:.x").unwrap();
    let source = ".x { margin-left: 1px; margin-right: 2px }";
    let out = generate_override(source, &exclusions).unwrap();
    assert!(out.is_empty());
}

#[test]
fn comments_do_not_reach_the_output() {
    let source = "/* header */ .x { float: left; /* inline */ }";
    let out = generate_override(source, &ExclusionTable::new()).unwrap();
    assert_eq!(out, ".x{float:right}\n\n");
}

#[test]
fn mirroring_is_an_involution_on_directional_pairs() {
    let source = ".x { margin-left: 10px; margin-right: 20px; float: left }";
    let once = generate_override(source, &ExclusionTable::new()).unwrap();
    let twice = generate_override(&once, &ExclusionTable::new()).unwrap();
    assert_eq!(twice, ".x{margin-left:10px;margin-right:20px;float:left}\n\n");
}

#[test]
fn background_shorthand_and_position() {
    let source = ".x { background: #fff url(i.png) no-repeat 20% center }";
    let out = generate_override(source, &ExclusionTable::new()).unwrap();
    assert_eq!(out, ".x{background-position:80% center}\n\n");
}

#[test]
fn unbalanced_close_brace_is_an_error() {
    assert!(generate_override("}", &ExclusionTable::new()).is_err());
}
