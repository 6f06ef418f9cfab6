mod common;

use common::{document, ellipsis, line, line_id, lit, Row, PRIMARY, SECONDARY};
use lproof::{
    Document, Emphasis, HighlightMode, LineId, NodeId, PointerEvent, ProofHighlighter,
};

const MODES: [HighlightMode; 2] = [HighlightMode::Inline, HighlightMode::Marker];

fn setup(proofs: &[&[Row]], mode: HighlightMode) -> (Document, ProofHighlighter) {
    let doc = document(proofs);
    let hl = ProofHighlighter::initialize(&doc, mode.strategy());
    (doc, hl)
}

#[test]
fn test_line_without_crossrefs_highlights_only_itself() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, ""), line(3, "")]], mode);
        let two = line_id(&hl, 0, 2);

        hl.on_pointer_enter(&mut doc, two);
        assert_eq!(lit(&hl, &doc), vec![(0, Some(2), PRIMARY)], "{mode:?}");

        hl.on_pointer_leave(&mut doc, two);
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");
    }
}

#[test]
fn test_enter_marks_cited_lines_secondary() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, ""), line(3, "1,2")]], mode);
        let three = line_id(&hl, 0, 3);

        hl.on_pointer_enter(&mut doc, three);
        assert_eq!(
            lit(&hl, &doc),
            vec![(0, Some(1), SECONDARY), (0, Some(2), SECONDARY), (0, Some(3), PRIMARY)],
            "{mode:?}"
        );

        hl.on_pointer_leave(&mut doc, three);
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");
    }
}

#[test]
fn test_two_citations_among_more_lines() {
    let (mut doc, mut hl) = setup(
        &[&[line(1, ""), line(2, ""), line(3, ""), line(4, "2,3")]],
        HighlightMode::Marker,
    );
    let four = line_id(&hl, 0, 4);

    hl.on_pointer_enter(&mut doc, four);
    assert_eq!(
        lit(&hl, &doc),
        vec![(0, Some(2), SECONDARY), (0, Some(3), SECONDARY), (0, Some(4), PRIMARY)]
    );
    hl.on_pointer_leave(&mut doc, four);
    assert!(lit(&hl, &doc).is_empty());
}

#[test]
fn test_enter_and_leave_are_idempotent() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, "1")]], mode);
        let two = line_id(&hl, 0, 2);

        hl.on_pointer_enter(&mut doc, two);
        let once = doc.clone();
        hl.on_pointer_enter(&mut doc, two);
        assert_eq!(doc, once, "{mode:?}");

        hl.on_pointer_leave(&mut doc, two);
        let left = doc.clone();
        hl.on_pointer_leave(&mut doc, two);
        assert_eq!(doc, left, "{mode:?}");
    }
}

#[test]
fn test_round_trip_restores_document() {
    for mode in MODES {
        for crossrefs in ["", "1", "1,2", "2,1,2"] {
            let (mut doc, mut hl) =
                setup(&[&[line(1, ""), line(2, ""), line(3, crossrefs)]], mode);
            let before = doc.clone();
            let three = line_id(&hl, 0, 3);

            hl.on_pointer_enter(&mut doc, three);
            hl.on_pointer_leave(&mut doc, three);
            assert_eq!(doc, before, "{mode:?} crossrefs={crossrefs:?}");
        }
    }
}

#[test]
fn test_unresolved_reference_is_ignored() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, "99")]], mode);
        let two = line_id(&hl, 0, 2);

        assert!(hl.resolve_crossrefs(two).is_empty());
        hl.on_pointer_enter(&mut doc, two);
        assert_eq!(lit(&hl, &doc), vec![(0, Some(2), PRIMARY)], "{mode:?}");
        hl.on_pointer_leave(&mut doc, two);
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");
    }
}

#[test]
fn test_resolution_is_scoped_to_own_proof() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(
            &[&[line(1, ""), line(2, "1")], &[line(1, ""), line(2, "")]],
            mode,
        );

        hl.on_pointer_enter(&mut doc, line_id(&hl, 0, 2));
        assert_eq!(
            lit(&hl, &doc),
            vec![(0, Some(1), SECONDARY), (0, Some(2), PRIMARY)],
            "{mode:?}"
        );
        hl.on_pointer_leave(&mut doc, line_id(&hl, 0, 2));

        hl.on_pointer_enter(&mut doc, line_id(&hl, 1, 1));
        assert_eq!(lit(&hl, &doc), vec![(1, Some(1), PRIMARY)], "{mode:?}");
    }
}

#[test]
fn test_ellipsis_lines_are_inert() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, ""), ellipsis(), line(2, "1")]], mode);
        let ellipsis_line = hl
            .index()
            .lines()
            .find(|(_, l)| l.is_ellipsis)
            .map(|(_, l)| l.node)
            .unwrap();

        assert!(!hl.is_registered(ellipsis_line));
        let before = doc.clone();
        assert!(!hl.dispatch(&mut doc, PointerEvent::enter(ellipsis_line)));
        assert!(!hl.dispatch(&mut doc, PointerEvent::leave(ellipsis_line)));
        assert_eq!(doc, before, "{mode:?}");
    }
}

#[test]
fn test_dispatch_routes_to_registered_lines() {
    let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, "1")]], HighlightMode::Marker);
    let node = hl.index().line(line_id(&hl, 0, 2)).unwrap().node;

    assert!(hl.dispatch(&mut doc, PointerEvent::enter(node)));
    assert_eq!(lit(&hl, &doc).len(), 2);
    assert!(hl.dispatch(&mut doc, PointerEvent::leave(node)));
    assert!(lit(&hl, &doc).is_empty());

    // The proof container itself has no handlers.
    assert!(!hl.dispatch(&mut doc, PointerEvent::enter(NodeId(1))));
}

#[test]
fn test_shared_target_not_stuck_after_moving_between_lines() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, "1"), line(3, "1")]], mode);
        let two = line_id(&hl, 0, 2);
        let three = line_id(&hl, 0, 3);

        hl.on_pointer_enter(&mut doc, two);
        hl.on_pointer_leave(&mut doc, two);
        hl.on_pointer_enter(&mut doc, three);
        assert_eq!(
            lit(&hl, &doc),
            vec![(0, Some(1), SECONDARY), (0, Some(3), PRIMARY)],
            "{mode:?}"
        );
        hl.on_pointer_leave(&mut doc, three);
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");
    }
}

#[test]
fn test_document_without_proofs_is_a_no_op() {
    let doc = Document::from_json(r#"{"children": [{"class": "proof-line"}]}"#).unwrap();
    let hl = ProofHighlighter::initialize(&doc, HighlightMode::Inline.strategy());
    assert!(hl.index().proofs().is_empty());
    assert!(!hl.is_registered(NodeId(1)));
}

#[test]
fn test_reinitialize_picks_up_new_content() {
    let (mut doc, mut hl) = setup(&[&[line(1, ""), line(2, "1")]], HighlightMode::Marker);
    hl.on_pointer_enter(&mut doc, line_id(&hl, 0, 2));

    let fresh = document(&[&[line(1, ""), line(2, ""), line(3, "1,2")]]);
    hl.reinitialize(&mut doc, &fresh);
    let mut doc = fresh;

    assert_eq!(hl.hovered(), None);
    assert_eq!(hl.index().lines().count(), 3);
    hl.on_pointer_enter(&mut doc, line_id(&hl, 0, 3));
    assert_eq!(lit(&hl, &doc).len(), 3);
}

#[test]
fn test_self_citation_stays_primary() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(&[&[line(1, "1")]], mode);
        let one = line_id(&hl, 0, 1);
        let before = doc.clone();

        hl.on_pointer_enter(&mut doc, one);
        let state = hl.state(&doc, hl.index().line(one).unwrap().node);
        assert!(state.primary, "{mode:?}: {state:?}");
        assert_eq!(state.emphasis(), Some(Emphasis::Primary), "{mode:?}");

        hl.on_pointer_leave(&mut doc, one);
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");
        assert_eq!(doc, before, "{mode:?}");
    }
}

#[test]
fn test_cited_ellipsis_row_is_highlighted_like_any_line() {
    for mode in MODES {
        let (mut doc, mut hl) = setup(
            &[&[line(1, ""), Row(Some(5), "", true), line(6, "1,5")]],
            mode,
        );
        let ellipsis_row = line_id(&hl, 0, 5);
        let six = line_id(&hl, 0, 6);
        assert!(hl.index().line(ellipsis_row).unwrap().is_ellipsis);
        assert!(!hl.is_registered(hl.index().line(ellipsis_row).unwrap().node));

        hl.on_pointer_enter(&mut doc, six);
        assert_eq!(
            lit(&hl, &doc),
            vec![(0, Some(1), SECONDARY), (0, Some(5), SECONDARY), (0, Some(6), PRIMARY)],
            "{mode:?}"
        );

        hl.on_pointer_leave(&mut doc, six);
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");
    }
}

#[test]
fn test_round_trip_keeps_authored_inline_style() {
    let json = r##"{"children": [{"class": "lproof", "children": [
        {"class": "proof-line", "data": {"number": "1"},
         "style": {"background-color": "yellow", "transition": "color 1s"}},
        {"class": "proof-line", "data": {"number": "2", "crossrefs": "1"},
         "style": {"background-color": "#ffeeee"}}
    ]}]}"##;
    for mode in MODES {
        let mut doc = Document::from_json(json).unwrap();
        let mut hl = ProofHighlighter::initialize(&doc, mode.strategy());
        let before = doc.clone();
        let two = line_id(&hl, 0, 2);

        // Authored backgrounds are not highlights.
        assert!(lit(&hl, &doc).is_empty(), "{mode:?}");

        hl.on_pointer_enter(&mut doc, two);
        assert_eq!(
            lit(&hl, &doc),
            vec![(0, Some(1), SECONDARY), (0, Some(2), PRIMARY)],
            "{mode:?}"
        );
        hl.on_pointer_enter(&mut doc, two);
        hl.on_pointer_leave(&mut doc, two);
        assert_eq!(doc, before, "{mode:?}");
    }
}

#[test]
fn test_resolve_crossrefs_returns_lines_in_citation_order() {
    let (_, hl) = setup(&[&[line(1, ""), line(2, ""), line(3, "2,1")]], HighlightMode::Inline);
    let numbers: Vec<Option<i64>> = hl
        .resolve_crossrefs(line_id(&hl, 0, 3))
        .into_iter()
        .map(|l| l.number.map(|n| n.0))
        .collect();
    assert_eq!(numbers, vec![Some(2), Some(1)]);
    assert!(hl.resolve_crossrefs(LineId(99)).is_empty());
}
