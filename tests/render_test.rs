//! Core frame to terminal framebuffer

use povtris::core::Game;
use povtris::term::{BoardView, Hud, Viewport};
use povtris::types::{Command, ShapeKind};

#[test]
fn test_spawned_piece_is_visible() {
    let mut game = Game::new(1);
    assert!(game.spawn(ShapeKind::O, 0));

    let view = BoardView::default();
    let viewport = Viewport::new(40, 26);
    let fb = view.render(&game.frame(0.0), &Hud::default(), viewport);

    // O blocks at board (4..=5, 1..=2); board origin at (9, 1) plus border
    for (x, y) in [(18, 3), (20, 3), (18, 4), (20, 4)] {
        assert_eq!(fb.get(x, y).unwrap().ch, '█', "({x}, {y})");
    }
}

#[test]
fn test_moving_piece_renders_in_flight() {
    let mut game = Game::new(1);
    assert!(game.spawn(ShapeKind::O, 0));
    assert!(game.apply(Command::HardDrop));

    let view = BoardView::default();
    let viewport = Viewport::new(40, 26);

    // Halfway through the drop the blocks are between spawn and floor
    game.frame(0.0);
    let cells = game.frame(0.05);
    let fb = view.render(&cells, &Hud::default(), viewport);
    let in_flight = (2..24u16)
        .filter(|&y| fb.get(18, y).map(|g| g.ch) == Some('▓'))
        .count();
    assert_eq!(in_flight, 2);

    let settled = view.render(&game.frame(1.0), &Hud::default(), viewport);
    assert_eq!(settled.get(18, 22).unwrap().ch, '█');
    assert_eq!(settled.get(18, 23).unwrap().ch, '█');
}
