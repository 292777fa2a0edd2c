#![cfg(target_arch = "wasm32")]

use gloo::utils::{body, document};
use tilecycle_core::{Animator, AnimatorConfig, AnimatorError, Direction, SeededRandom, TileBoard};
use tilecycle_web::{CONTAINER_SELECTOR, DomBoard};
use wasm_bindgen_test::*;
use web_sys::Element;

wasm_bindgen_test_configure!(run_in_browser);

/// Builds `count` containers holding one tile each, except the last one.
fn puzzle_root(count: usize) -> Element {
    let root = document().create_element("div").unwrap();
    let class = CONTAINER_SELECTOR.trim_start_matches('.');
    let markup: String = (0..count)
        .map(|index| {
            if index + 1 == count {
                format!(r#"<div class="{class}"></div>"#)
            } else {
                let tile = format!(r#"<span class="tile" data-id="{index}"></span>"#);
                format!(r#"<div class="{class}">{tile}</div>"#)
            }
        })
        .collect();
    root.set_inner_html(&markup);
    body().append_child(&root).unwrap();
    root
}

fn tile_ids(board: &DomBoard) -> Vec<Option<String>> {
    (0..board.container_count() as u16)
        .map(|index| {
            board
                .container(index)
                .and_then(|container| container.first_element_child())
                .and_then(|tile| tile.get_attribute("data-id"))
        })
        .collect()
}

#[wasm_bindgen_test]
fn binds_containers_in_document_order() {
    let root = puzzle_root(9);
    let board = DomBoard::from_root(&root).unwrap();

    assert_eq!(board.container_count(), 9);
    assert_eq!(board.is_empty(8), Some(true));
    assert_eq!(board.is_empty(0), Some(false));
    assert_eq!(tile_ids(&board)[3].as_deref(), Some("3"));

    root.remove();
}

#[wasm_bindgen_test]
fn slide_moves_element_and_keeps_single_class() {
    let root = puzzle_root(9);
    let mut board = DomBoard::from_root(&root).unwrap();

    board.slide(7, 8, Direction::Left).unwrap();
    board.slide(8, 7, Direction::Right).unwrap();

    let tile = board.container(7).unwrap().first_element_child().unwrap();
    let classes = tile.class_list();
    assert!(classes.contains("tile"));
    assert!(classes.contains("slide-left"));
    assert!(!classes.contains("slide-right"));
    assert_eq!(classes.length(), 2);
    assert_eq!(board.is_empty(8), Some(true));

    root.remove();
}

#[wasm_bindgen_test]
fn slide_from_empty_container_fails() {
    let root = puzzle_root(9);
    let mut board = DomBoard::from_root(&root).unwrap();

    assert_eq!(
        board.slide(8, 7, Direction::Right),
        Err(AnimatorError::EmptyContainer { index: 8 })
    );

    root.remove();
}

#[wasm_bindgen_test]
fn slide_into_occupied_container_leaves_tiles_alone() {
    let root = puzzle_root(9);
    let mut board = DomBoard::from_root(&root).unwrap();

    assert_eq!(
        board.slide(7, 4, Direction::Down),
        Err(AnimatorError::OccupiedContainer { index: 4 })
    );

    let tile = board.container(7).unwrap().first_element_child().unwrap();
    assert_eq!(tile.class_list().length(), 1);
    assert_eq!(board.container(4).unwrap().child_element_count(), 1);

    root.remove();
}

#[wasm_bindgen_test]
fn placeholder_in_start_container_fails_before_first_move() {
    let root = puzzle_root(9);
    let board = DomBoard::from_root(&root).unwrap();
    let placeholder = document().create_element("span").unwrap();
    board.container(8).unwrap().append_child(&placeholder).unwrap();

    let result = Animator::new(AnimatorConfig::default(), board, SeededRandom::new(1));

    assert_eq!(
        result.err(),
        Some(AnimatorError::OccupiedContainer { index: 8 })
    );
    assert_eq!(root.query_selector_all("span").unwrap().length(), 9);

    root.remove();
}

#[wasm_bindgen_test]
fn two_by_two_page_with_full_start_container_is_rejected() {
    // the first four containers of a 3x3 page, container 3 holds a tile
    let root = puzzle_root(9);
    let board = DomBoard::from_root(&root).unwrap();
    let config = AnimatorConfig::new(2, Default::default()).unwrap();

    let result = Animator::new(config, board, SeededRandom::new(1));

    assert_eq!(
        result.err(),
        Some(AnimatorError::OccupiedContainer { index: 3 })
    );

    root.remove();
}

#[wasm_bindgen_test]
fn short_markup_fails_before_first_move() {
    let root = puzzle_root(6);
    let board = DomBoard::from_root(&root).unwrap();

    let result = Animator::new(AnimatorConfig::default(), board, SeededRandom::new(1));

    assert_eq!(
        result.err(),
        Some(AnimatorError::MissingContainers {
            expected: 9,
            found: 6
        })
    );

    root.remove();
}

#[wasm_bindgen_test]
fn each_move_touches_one_tile() {
    let root = puzzle_root(9);
    let board = DomBoard::from_root(&root).unwrap();
    let mut animator =
        Animator::new(AnimatorConfig::default(), board, SeededRandom::new(9)).unwrap();

    for _ in 0..50 {
        let before = tile_ids(animator.board());
        let record = animator.step().unwrap();
        let after = tile_ids(animator.board());

        let changed: Vec<usize> = (0..9).filter(|&index| before[index] != after[index]).collect();
        let mut moved = [usize::from(record.from), usize::from(record.to)];
        moved.sort_unstable();
        assert_eq!(changed, moved);
        assert_eq!(after[usize::from(record.from)], None);

        let tile = animator
            .board()
            .container(record.to)
            .and_then(|container| container.first_element_child())
            .unwrap();
        let slide_classes = Direction::all_slide_classes()
            .into_iter()
            .filter(|class| tile.class_list().contains(class))
            .count();
        assert_eq!(slide_classes, 1);
        assert!(tile.class_list().contains(record.direction.slide_class()));
    }

    root.remove();
}
