//! Carousel bounds and sizing across card counts and viewport widths.

use vyse_site::carousel::{Breakpoint, Point, Swipe};
use vyse_site::{offset, CarouselState, Direction};

const WIDTHS: [u32; 9] = [0, 320, 480, 481, 600, 768, 1000, 1024, 1920];

#[test]
fn test_max_index_formula_holds_everywhere() {
    for total in 0..=12 {
        for width in WIDTHS {
            let state = CarouselState::new(total, width);
            let expected = (total as i64 - state.visible_cards().floor() as i64).max(0) as usize;
            assert_eq!(
                state.max_index(),
                expected,
                "total={} width={}",
                total,
                width
            );
            assert_eq!(state.current_index(), 0);
        }
    }
}

#[test]
fn test_sliding_never_leaves_bounds() {
    for total in 0..=8 {
        for width in WIDTHS {
            let mut state = CarouselState::new(total, width);

            for _ in 0..20 {
                let index = state.slide(Direction::Next);
                assert!(index <= state.max_index());
            }
            assert_eq!(state.current_index(), state.max_index());

            for _ in 0..20 {
                state.slide(Direction::Prev);
            }
            assert_eq!(state.current_index(), 0);
        }
    }
}

#[test]
fn test_resize_scenario() {
    let mut state = CarouselState::new(10, 1024);
    assert_eq!(state.max_index(), 8);
    while state.can_go_next() {
        state.slide(Direction::Next);
    }
    assert_eq!(state.current_index(), 8);

    state.configure(10, 400);
    assert_eq!(state.visible_cards(), 1.0);
    assert_eq!(state.max_index(), 9);
    assert_eq!(state.current_index(), 8);

    state.slide(Direction::Next);
    assert_eq!(state.current_index(), 9);

    state.configure(10, 1920);
    assert_eq!(state.max_index(), 7);
    assert_eq!(state.current_index(), 7);
}

#[test]
fn test_resize_across_every_width_keeps_invariant() {
    let mut state = CarouselState::new(9, 320);
    for _ in 0..8 {
        state.slide(Direction::Next);
    }
    for width in WIDTHS.iter().rev() {
        state.configure(9, *width);
        assert!(state.current_index() <= state.max_index());
    }
}

#[test]
fn test_offset_examples() {
    assert_eq!(offset(2, 304), -608);
    assert_eq!(offset(3, 244), -732);
    assert_eq!(offset(0, 274), 0);
}

#[test]
fn test_card_width_follows_breakpoint() {
    assert_eq!(Breakpoint::for_width(320).card_width(), 244);
    assert_eq!(Breakpoint::for_width(700).card_width(), 274);
    assert_eq!(Breakpoint::for_width(900).card_width(), 304);
    assert_eq!(Breakpoint::for_width(2560).card_width(), 304);
}

#[test]
fn test_swipe_drives_slide() {
    let mut state = CarouselState::new(6, 400);
    let left = Swipe::new(Point::new(300.0, 100.0), Point::new(150.0, 110.0));
    let right = Swipe::new(Point::new(150.0, 100.0), Point::new(300.0, 90.0));

    if let Some(direction) = left.direction() {
        state.slide(direction);
    }
    assert_eq!(state.current_index(), 1);

    if let Some(direction) = right.direction() {
        state.slide(direction);
    }
    assert_eq!(state.current_index(), 0);
}
