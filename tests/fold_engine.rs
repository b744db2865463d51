use cosmic_fold::{
    compute_fold, Attr, ClickAction, Color, FoldConfig, LayoutOracle, Padding, Search,
    StyledText, Wrap, ELLIPSIS,
};

mod common;
use common::{cells, line_count, LOREM, NINE_WORDS};

fn fold(text: &str, width: f32, config: &FoldConfig) -> cosmic_fold::FoldResult {
    compute_fold(&mut cells(), &StyledText::new(text), width, config)
}

// Five natural lines folded to three end in the ellipsis and the expand label
#[test]
fn folds_five_lines_into_three() {
    let text = StyledText::new(NINE_WORDS);
    assert_eq!(line_count(&text, 12.0), 5);

    let result = fold(NINE_WORDS, 12.0, &FoldConfig::new());
    assert!(result.expandable);
    assert_eq!(result.line_count, 5);
    assert_eq!(
        result.closed.text(),
        format!("one two three four five {}Expand", ELLIPSIS)
    );
    assert_eq!(line_count(&result.closed, 12.0), 3);
    assert_eq!(result.closed_height, 3.0);

    // The collapse label fits on the last line
    assert_eq!(result.open.text(), format!("{}Collapse", NINE_WORDS));
    assert_eq!(result.open_height, 5.0);
}

#[test]
fn short_text_is_not_expandable() {
    let text = "one two three four";
    assert_eq!(line_count(&StyledText::new(text), 12.0), 2);

    let result = fold(text, 12.0, &FoldConfig::new());
    assert!(!result.expandable);
    assert_eq!(result.closed.text(), text);
    assert_eq!(result.open, result.closed);
    assert_eq!(result.closed_height, 2.0);
    assert_eq!(result.open_height, 2.0);
    assert_eq!(result.line_count, 2);
}

#[test]
fn exact_fit_is_not_expandable() {
    let result = fold(NINE_WORDS, 12.0, &FoldConfig::new().max_lines(5));
    assert!(!result.expandable);
    assert_eq!(result.open.text(), NINE_WORDS);
}

#[test]
fn zero_max_lines_never_folds() {
    let config = FoldConfig::new().max_lines(0);
    for width in [4.0, 12.0, 40.0] {
        let result = fold(LOREM, width, &config);
        assert!(!result.expandable);
        assert_eq!(result.closed.text(), LOREM);
        assert_eq!(result.open.text(), LOREM);
    }
}

#[test]
fn empty_text_is_not_expandable() {
    let result = fold("", 12.0, &FoldConfig::new());
    assert!(!result.expandable);
    assert!(result.closed.is_empty());
    assert_eq!(result.closed_height, 1.0);
}

#[test]
fn measurement_failure_leaves_text_unfolded() {
    let config = FoldConfig::new().padding(Padding::new(0.0, 2.0, 0.0, 3.0));
    for width in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let result = fold(NINE_WORDS, width, &config);
        assert!(!result.expandable);
        assert_eq!(result.closed.text(), NINE_WORDS);
        assert_eq!(result.line_count, 0);
        assert_eq!(result.closed_height, 5.0);
        assert_eq!(result.open_height, 5.0);
    }
}

#[test]
fn close_in_new_line_adds_one_line() {
    let config = FoldConfig::new().close_in_new_line(true);
    let result = fold(NINE_WORDS, 12.0, &config);
    assert!(result.expandable);
    assert_eq!(result.open.text(), format!("{}\nCollapse", NINE_WORDS));
    assert_eq!(line_count(&result.open, 12.0), 6);
    assert_eq!(result.open_height, 6.0);

    let lines = cells().layout(&result.open, 12.0).unwrap();
    let last = lines.last().unwrap();
    assert_eq!(&result.open.text()[last.range.clone()], "Collapse");

    // Not aligned unless asked to
    let end = result.open.len() - 1;
    assert!(!result.open.attrs_at(end).any(|attr| *attr == Attr::AlignOpposite));
}

#[test]
fn close_in_new_line_and_align_right_marks_affordance() {
    let config = FoldConfig::new()
        .close_in_new_line(true)
        .close_align_right(true);
    let result = fold(NINE_WORDS, 12.0, &config);
    assert_eq!(result.open.text(), format!("{}\nCollapse", NINE_WORDS));
    let end = result.open.len() - 1;
    assert!(result.open.attrs_at(end).any(|attr| *attr == Attr::AlignOpposite));
    assert!(!result
        .open
        .attrs_at(0)
        .any(|attr| *attr == Attr::AlignOpposite));
}

// An inline label that would wrap onto an extra line moves to its own line
#[test]
fn inline_collapse_falls_back_to_new_line() {
    let text = format!("{} ten", NINE_WORDS);
    assert_eq!(line_count(&StyledText::new(text.as_str()), 12.0), 5);

    let result = fold(&text, 12.0, &FoldConfig::new());
    assert!(result.expandable);
    assert_eq!(result.open.text(), format!("{}\nCollapse", text));
    assert_eq!(result.open_height, 6.0);
}

#[test]
fn align_right_pads_until_the_edge() {
    let text = StyledText::new(NINE_WORDS);
    assert_eq!(line_count(&text, 20.0), 3);

    let config = FoldConfig::new().max_lines(2).close_align_right(true);
    let result = fold(NINE_WORDS, 20.0, &config);
    assert!(result.expandable);
    assert_eq!(
        result.open.text(),
        format!("{}{}Collapse", NINE_WORDS, " ".repeat(8))
    );
    assert_eq!(result.open_height, 3.0);

    // Padding is plain text, the label stays clickable
    assert_eq!(result.open.click_action_at(NINE_WORDS.len()), None);
    assert_eq!(
        result.open.click_action_at(result.open.len() - 1),
        Some(ClickAction::Toggle)
    );
    assert_eq!(
        result.open.click_action_at(NINE_WORDS.len() + 8),
        Some(ClickAction::Toggle)
    );
}

// A layout that never wraps has no edge to pad the label up to
#[test]
fn align_right_without_wrapping_stays_inline() {
    let text = StyledText::new("a\nb\nc\nd\ne");
    let config = FoldConfig::new().max_lines(2).close_align_right(true);
    let mut oracle = common::CountingOracle {
        inner: cells().with_wrap(Wrap::None),
        ..Default::default()
    };
    let result = compute_fold(&mut oracle, &text, 5.0, &config);
    assert!(result.expandable);
    assert_eq!(result.open.text(), "a\nb\nc\nd\neCollapse");
    assert_eq!(result.open_height, 5.0);
    assert_eq!(
        result.open.click_action_at(result.open.len() - 1),
        Some(ClickAction::Toggle)
    );
}

#[test]
fn empty_open_suffix_leaves_plain_ellipsis() {
    let config = FoldConfig::new().open_suffix("", Color::ACCENT);
    let result = fold(NINE_WORDS, 12.0, &config);
    assert!(result.expandable);
    assert_eq!(
        result.closed.text(),
        format!("one two three four five six {}", ELLIPSIS)
    );
    assert!(result.closed.spans().is_empty());
    assert_eq!(line_count(&result.closed, 12.0), 3);
}

#[test]
fn empty_close_suffix_appends_nothing() {
    let config = FoldConfig::new().close_suffix("", Color::ACCENT);
    let result = fold(NINE_WORDS, 12.0, &config);
    assert!(result.expandable);
    assert_eq!(result.open.text(), NINE_WORDS);
    assert!(result.open.spans().is_empty());
    assert_eq!(result.open_height, 5.0);
}

#[test]
fn affordances_carry_configured_style() {
    let blue = Color::rgb(0, 0, 0xFF);
    let green = Color::rgb(0, 0xFF, 0);
    let config = FoldConfig::new()
        .open_suffix("More", blue)
        .close_suffix("Less", green);
    let result = fold(LOREM, 20.0, &config);
    assert!(result.expandable);
    assert!(result.closed.text().ends_with("\u{2026}More"));
    assert!(result.open.text().ends_with("Less"));

    let end = result.closed.len() - 1;
    assert!(result.closed.attrs_at(end).any(|attr| *attr == Attr::Color(blue)));
    assert_eq!(result.closed.click_action_at(end), Some(ClickAction::Toggle));
    // The ellipsis is not part of the label
    let ellipsis = result.closed.len() - "More".len() - ELLIPSIS.len();
    assert_eq!(result.closed.click_action_at(ellipsis), None);

    let end = result.open.len() - 1;
    assert!(result.open.attrs_at(end).any(|attr| *attr == Attr::Color(green)));
}

#[test]
fn vertical_padding_is_added_to_heights() {
    let config = FoldConfig::new().padding(Padding::new(1.0, 2.0, 3.0, 4.0));
    let result = fold(NINE_WORDS, 12.0, &config);
    assert_eq!(result.closed_height, 9.0);
    assert_eq!(result.open_height, 11.0);
}

#[test]
fn linear_and_binary_search_agree_on_plain_words() {
    let linear = fold(NINE_WORDS, 12.0, &FoldConfig::new().search(Search::Linear));
    let binary = fold(NINE_WORDS, 12.0, &FoldConfig::new().search(Search::Binary));
    assert_eq!(linear, binary);
}

// Word wrap is not monotone in prefix length, so binary search may keep less
// text than linear search, but what it keeps must still fit
#[test]
fn binary_search_fits_and_never_keeps_more() {
    for wrap in [Wrap::Word, Wrap::WordOrGlyph, Wrap::Glyph] {
        for seed in 0..100 {
            let text = StyledText::new(common::random_words(seed, 14));
            for width in [8.0, 10.0, 13.0, 17.0] {
                for max_lines in 1..=3 {
                    let config = FoldConfig::new().max_lines(max_lines);
                    let mut oracle = cells().with_wrap(wrap);
                    let linear = compute_fold(&mut oracle, &text, width, &config);
                    let binary =
                        compute_fold(&mut oracle, &text, width, &config.search(Search::Binary));
                    assert_eq!(linear.expandable, binary.expandable);
                    assert_eq!(linear.open, binary.open);
                    if !binary.expandable {
                        continue;
                    }

                    let lines = oracle.measure(&binary.closed, width).unwrap().line_count;
                    assert!(
                        lines <= max_lines,
                        "{:?} at {} takes {} lines",
                        binary.closed.text(),
                        width,
                        lines
                    );
                    let linear_prefix = linear.closed.text().strip_suffix("\u{2026}Expand").unwrap();
                    let binary_prefix = binary.closed.text().strip_suffix("\u{2026}Expand").unwrap();
                    assert!(text.text().starts_with(binary_prefix));
                    assert!(binary_prefix.len() <= linear_prefix.len());
                }
            }
        }
    }
}

#[test]
fn binary_search_measures_less() {
    let text = StyledText::new(LOREM);
    let mut linear = common::CountingOracle::new();
    let mut binary = common::CountingOracle::new();
    // A long label forces the prefix to shrink by many characters
    let config = FoldConfig::new()
        .max_lines(1)
        .open_suffix("Read the whole thing", Color::ACCENT);
    let linear_result = compute_fold(&mut linear, &text, 30.0, &config);
    let binary_result = compute_fold(&mut binary, &text, 30.0, &config.search(Search::Binary));
    assert!(linear_result.expandable);
    assert_eq!(linear_result.closed, binary_result.closed);
    assert!(binary.measures < linear.measures);
}

// Closed content always fits, open content always holds the whole text
#[test]
fn folds_fit_their_line_budget() {
    let text = StyledText::new(LOREM);
    for search in [Search::Linear, Search::Binary] {
        for max_lines in 1..=4 {
            for width in 7..=40 {
                let width = width as f32;
                let config = FoldConfig::new().max_lines(max_lines).search(search);
                let result = compute_fold(&mut cells(), &text, width, &config);
                let natural = line_count(&text, width);
                assert_eq!(result.expandable, natural > max_lines);
                assert_eq!(result.line_count, natural);
                assert!(result.open.text().starts_with(LOREM));
                if !result.expandable {
                    continue;
                }

                let closed = cells().measure(&result.closed, width).unwrap();
                assert!(
                    closed.line_count <= max_lines,
                    "{:?} at {} takes {} lines",
                    result.closed.text(),
                    width,
                    closed.line_count
                );
                assert_eq!(result.closed_height, closed.height);

                let prefix = result
                    .closed
                    .text()
                    .strip_suffix("\u{2026}Expand")
                    .unwrap();
                assert!(LOREM.starts_with(prefix));
            }
        }
    }
}

#[test]
fn folds_wide_and_multibyte_text() {
    let text = "漢字かな交じり文の折りたたみ表示を試験します。éèê àâ ïî ôö ùûü ÿ ç 漢字かな交じり文の折りたたみ表示を試験します。";
    for width in 9..=24 {
        let width = width as f32;
        let result = fold(text, width, &FoldConfig::new().max_lines(2));
        assert!(result.expandable);
        assert!(line_count(&result.closed, width) <= 2);
        let prefix = result
            .closed
            .text()
            .strip_suffix("\u{2026}Expand")
            .unwrap();
        assert!(text.starts_with(prefix));
    }
}

#[test]
fn compute_fold_is_idempotent() {
    let config = FoldConfig::new().max_lines(2).close_align_right(true);
    let text = StyledText::new(LOREM).with_span(0..5, Attr::Clickable(ClickAction::Link(1)));
    let first = compute_fold(&mut cells(), &text, 25.0, &config);
    let second = compute_fold(&mut cells(), &text, 25.0, &config);
    assert_eq!(first, second);
    // Spans of the input survive in both renderings
    assert_eq!(first.closed.click_action_at(0), Some(ClickAction::Link(1)));
    assert_eq!(first.open.click_action_at(0), Some(ClickAction::Link(1)));
}
