//! View tests - framebuffer contents produced by LifeView

use tui_life::core::{Grid, Simulator};
use tui_life::term::{FrameBuffer, Hud, LifeView, Viewport, ALIVE_CH, DEAD_CH};
use tui_life::types::CellState;

fn single_cell_sim() -> Simulator {
    // 3x3 grid with one live cell at (1, 1).
    let grid = Grid::new(3, 3, |x, y| {
        if (x, y) == (1, 1) {
            CellState::Alive
        } else {
            CellState::Dead
        }
    })
    .unwrap();
    Simulator::new(grid)
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width())
        .map(|x| fb.get(x, y).map(|g| g.ch).unwrap_or('?'))
        .collect()
}

#[test]
fn test_alive_cell_renders_as_filled_block() {
    let sim = single_cell_sim();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(
        &sim,
        Viewport::new(20, 10),
        Hud {
            paused: false,
            step_ms: 1000,
        },
        &mut fb,
    );

    // Body is rows 0..9; the 3x3 grid plus border makes a 5x5 frame centered
    // at (7, 2). Cell (1, 1) therefore lands at (9, 4).
    let alive = fb.get(9, 4).unwrap();
    assert_eq!(alive.ch, ALIVE_CH);

    // A dead cell inside the frame stays blank.
    let dead = fb.get(8, 3).unwrap();
    assert_eq!(dead.ch, DEAD_CH);

    // Border corners.
    assert_eq!(fb.get(7, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(7, 6).unwrap().ch, '└');
    assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
}

#[test]
fn test_status_line_shows_generation_and_population() {
    let mut sim = single_cell_sim();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let hud = Hud {
        paused: false,
        step_ms: 1000,
    };

    view.render_into(&sim, Viewport::new(80, 24), hud, &mut fb);
    let status = row_text(&fb, 23);
    assert!(
        status.starts_with("gen 0  pop 1  1000 ms"),
        "unexpected status line: {status:?}"
    );
    assert!(status.contains("q quit"));

    // A lone cell dies; the status line follows the state.
    sim.step();
    view.render_into(&sim, Viewport::new(80, 24), hud, &mut fb);
    let status = row_text(&fb, 23);
    assert!(
        status.starts_with("gen 1  pop 0"),
        "unexpected status line: {status:?}"
    );
}

#[test]
fn test_paused_marker_appears() {
    let sim = single_cell_sim();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(
        &sim,
        Viewport::new(80, 24),
        Hud {
            paused: true,
            step_ms: 250,
        },
        &mut fb,
    );

    let status = row_text(&fb, 23);
    assert!(status.contains("250 ms"), "status: {status:?}");
    assert!(status.contains("[paused]"), "status: {status:?}");
}

#[test]
fn test_small_viewports_do_not_panic() {
    let sim = single_cell_sim();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let hud = Hud {
        paused: false,
        step_ms: 1000,
    };

    for (w, h) in [(0, 0), (1, 1), (2, 1), (3, 2), (5, 5), (4, 0)] {
        view.render_into(&sim, Viewport::new(w, h), hud, &mut fb);
        assert_eq!(fb.width(), w);
        assert_eq!(fb.height(), h);
    }
}

#[test]
fn test_viewport_smaller_than_grid_clips() {
    // 40x20 torus through a 12x8 window: only a clipped view is drawn, and
    // nothing outside the framebuffer is touched.
    let grid = Grid::new(40, 20, |_, _| CellState::Alive).unwrap();
    let sim = Simulator::new(grid);
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(
        &sim,
        Viewport::new(12, 8),
        Hud {
            paused: false,
            step_ms: 1000,
        },
        &mut fb,
    );

    // Visible window is 10x5 with a border hugging the full width.
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(1, 1).unwrap().ch, ALIVE_CH);
    assert_eq!(fb.get(10, 5).unwrap().ch, ALIVE_CH);
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
}

#[test]
fn test_render_reuses_and_resizes_buffer() {
    let sim = single_cell_sim();
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let hud = Hud {
        paused: false,
        step_ms: 1000,
    };

    view.render_into(&sim, Viewport::new(20, 10), hud, &mut fb);
    assert_eq!((fb.width(), fb.height()), (20, 10));

    view.render_into(&sim, Viewport::new(30, 5), hud, &mut fb);
    assert_eq!((fb.width(), fb.height()), (30, 5));
}
