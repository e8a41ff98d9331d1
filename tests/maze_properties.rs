use std::collections::{HashSet, VecDeque};

use maze_game::maze::{generate, CellKind, Grid, GridError};

const SIZES: [(usize, usize); 7] = [(5, 5), (7, 9), (11, 11), (31, 31), (3, 7), (21, 5), (41, 17)];

fn reachable_from_start(grid: &Grid) -> HashSet<(i32, i32)> {
    let mut seen = HashSet::from([(1, 1)]);
    let mut queue = VecDeque::from([(1, 1)]);
    while let Some((x, y)) = queue.pop_front() {
        for (dx, dy) in [(0, -1), (0, 1), (-1, 0), (1, 0)] {
            let next = (x + dx, y + dy);
            if grid.is_passable(next.0, next.1) == Ok(true) && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn rooms(width: usize, height: usize) -> usize {
    ((width - 1) / 2) * ((height - 1) / 2)
}

#[test]
fn every_room_is_reachable_from_start() {
    for (w, h) in SIZES {
        for seed in 0..8 {
            let grid = generate(w, h, Some(seed)).unwrap();
            let reached = reachable_from_start(&grid);
            for y in (1..h as i32 - 1).step_by(2) {
                for x in (1..w as i32 - 1).step_by(2) {
                    assert!(reached.contains(&(x, y)), "{w}x{h} seed {seed}: ({x},{y}) cut off");
                }
            }
        }
    }
}

#[test]
fn passages_form_a_spanning_tree() {
    for (w, h) in SIZES {
        for seed in 0..8 {
            let grid = generate(w, h, Some(seed)).unwrap();
            let mut open_rooms = 0;
            let mut open_walls = 0;
            for y in 0..h as i32 {
                for x in 0..w as i32 {
                    if !grid.is_passable(x, y).unwrap() {
                        continue;
                    }
                    match (x % 2, y % 2) {
                        (1, 1) => open_rooms += 1,
                        (0, 0) => panic!("{w}x{h} seed {seed}: lattice corner ({x},{y}) opened"),
                        _ => open_walls += 1,
                    }
                }
            }
            assert_eq!(open_rooms, rooms(w, h));
            // A connected graph with V - 1 edges has no cycles.
            assert_eq!(open_walls, open_rooms - 1, "{w}x{h} seed {seed}");
            assert_eq!(reachable_from_start(&grid).len(), open_rooms + open_walls);
        }
    }
}

#[test]
fn border_ring_stays_wall() {
    for (w, h) in SIZES {
        let grid = generate(w, h, Some(17)).unwrap();
        let (w, h) = (w as i32, h as i32);
        for x in 0..w {
            assert_eq!(grid.cell_kind(x, 0), Ok(CellKind::Wall));
            assert_eq!(grid.cell_kind(x, h - 1), Ok(CellKind::Wall));
        }
        for y in 0..h {
            assert_eq!(grid.cell_kind(0, y), Ok(CellKind::Wall));
            assert_eq!(grid.cell_kind(w - 1, y), Ok(CellKind::Wall));
        }
    }
}

#[test]
fn start_and_end_are_tagged() {
    for (w, h) in SIZES {
        for seed in [0, 1, u64::MAX] {
            let grid = generate(w, h, Some(seed)).unwrap();
            assert_eq!(grid.cell_kind(1, 1), Ok(CellKind::Start));
            assert_eq!(
                grid.cell_kind(w as i32 - 2, h as i32 - 2),
                Ok(CellKind::End)
            );
            let tagged = grid
                .rows()
                .flatten()
                .filter(|k| matches!(k, CellKind::Start | CellKind::End))
                .count();
            assert_eq!(tagged, 2);
        }
    }
}

#[test]
fn fixed_seed_is_deterministic() {
    let a = generate(31, 31, Some(2024)).unwrap();
    let b = generate(31, 31, Some(2024)).unwrap();
    assert_eq!(a, b);

    let c = generate(31, 31, Some(2025)).unwrap();
    assert_ne!(a, c);
}

#[test]
fn unseeded_generation_still_valid() {
    let grid = generate(15, 15, None).unwrap();
    assert_eq!(grid.cell_kind(1, 1), Ok(CellKind::Start));
    assert_eq!(grid.cell_kind(13, 13), Ok(CellKind::End));
    assert_eq!(reachable_from_start(&grid).len(), 2 * rooms(15, 15) - 1);
}

#[test]
fn five_by_five_connects_all_four_rooms() {
    let grid = generate(5, 5, Some(1)).unwrap();
    assert_eq!(grid.cell_kind(1, 1), Ok(CellKind::Start));
    assert_eq!(grid.cell_kind(3, 3), Ok(CellKind::End));
    for (x, y) in [(3, 1), (1, 3)] {
        assert_eq!(grid.cell_kind(x, y), Ok(CellKind::Passage));
    }
    let opened: Vec<(i32, i32)> = [(2, 1), (1, 2), (3, 2), (2, 3)]
        .into_iter()
        .filter(|&(x, y)| grid.is_passable(x, y) == Ok(true))
        .collect();
    assert_eq!(opened.len(), 3);
    assert_eq!(grid.cell_kind(2, 2), Ok(CellKind::Wall));
    assert_eq!(reachable_from_start(&grid).len(), 7);
}

#[test]
fn out_of_range_queries_are_rejected() {
    let grid = generate(7, 7, Some(9)).unwrap();
    assert!(matches!(grid.cell_kind(-1, 0), Err(GridError::OutOfBounds { .. })));
    assert!(matches!(grid.cell_kind(7, 0), Err(GridError::OutOfBounds { .. })));
    assert!(matches!(grid.is_passable(0, 7), Err(GridError::OutOfBounds { .. })));
}

#[test]
fn even_sides_are_rejected() {
    assert!(matches!(Grid::new(4, 7), Err(GridError::InvalidDimension { .. })));
    assert!(matches!(generate(30, 30, Some(1)), Err(GridError::InvalidDimension { .. })));
}
