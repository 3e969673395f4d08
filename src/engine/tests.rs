use super::{Cell, ColorField, Rgb};

const SEED: u64 = 42;

fn live_cells(field: &ColorField) -> Vec<(usize, usize)> {
    let size = field.size();
    (0..size * size)
        .filter(|&i| field.cells()[i].is_alive())
        .map(|i| (i / size, i % size))
        .collect()
}

#[test]
fn l_tromino_becomes_block() {
    let (c1, c2, c3) = (
        Rgb::new(100, 0, 0),
        Rgb::new(0, 100, 0),
        Rgb::new(0, 0, 100),
    );
    let mut field = ColorField::new(5, Some(SEED));
    field.set(1, 2, Cell::Alive(c1));
    field.set(2, 1, Cell::Alive(c2));
    field.set(2, 2, Cell::Alive(c3));

    field.step_rule();

    assert_eq!(live_cells(&field), [(1, 1), (1, 2), (2, 1), (2, 2)]);
    // newborn corner inherits the mean of all three prior cells
    assert_eq!(field.get(1, 1), Cell::Alive(Rgb::new(33, 33, 33)));
    // survivors keep their exact colors
    assert_eq!(field.get(1, 2), Cell::Alive(c1));
    assert_eq!(field.get(2, 1), Cell::Alive(c2));
    assert_eq!(field.get(2, 2), Cell::Alive(c3));
}

#[test]
fn birth_color_is_truncated_mean() {
    let mut field = ColorField::new(5, Some(SEED));
    field.set(0, 0, Cell::Alive(Rgb::new(10, 20, 30)));
    field.set(0, 1, Cell::Alive(Rgb::new(11, 21, 31)));
    field.set(0, 2, Cell::Alive(Rgb::new(13, 23, 33)));

    field.step_rule();

    // sums are 34, 64, 94; division by 3 truncates
    assert_eq!(field.get(1, 1), Cell::Alive(Rgb::new(11, 21, 31)));
}

#[test]
fn block_is_still_life() {
    let mut field = ColorField::new(5, Some(SEED));
    for (row, col) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        field.set(row, col, Cell::Alive(Rgb::new(row as u8, col as u8, 50)));
    }
    let before = field.cells().to_vec();

    field.step_rule();
    assert_eq!(field.cells(), before);
    field.step_rule();
    assert_eq!(field.cells(), before);
}

#[test]
fn blinker_oscillates_and_survivor_keeps_color() {
    let center = Rgb::new(7, 8, 9);
    let mut field = ColorField::new(5, Some(SEED));
    field.set(2, 1, Cell::Alive(Rgb::new(90, 0, 0)));
    field.set(2, 2, Cell::Alive(center));
    field.set(2, 3, Cell::Alive(Rgb::new(0, 0, 90)));

    field.step_rule();

    assert_eq!(live_cells(&field), [(1, 2), (2, 2), (3, 2)]);
    // two neighbors: survives without a recolor
    assert_eq!(field.get(2, 2), Cell::Alive(center));
    // the newborn arms average the whole prior row
    assert_eq!(field.get(1, 2), Cell::Alive(Rgb::new(32, 2, 33)));
    assert_eq!(field.get(3, 2), Cell::Alive(Rgb::new(32, 2, 33)));
}

#[test]
fn full_grid_collapses_to_corners() {
    let mut field = ColorField::new(5, Some(SEED));
    for row in 0..5 {
        for col in 0..5 {
            let color = Rgb::new(row as u8 * 10, col as u8 * 10, 100);
            field.set(row, col, Cell::Alive(color));
        }
    }

    field.step_rule();

    // corners see 3 neighbors, edges 5, interior 8
    assert_eq!(live_cells(&field), [(0, 0), (0, 4), (4, 0), (4, 4)]);
    assert_eq!(field.get(0, 0), Cell::Alive(Rgb::new(0, 0, 100)));
    assert_eq!(field.get(4, 4), Cell::Alive(Rgb::new(40, 40, 100)));
}

#[test]
fn underpopulated_cells_die() {
    let mut field = ColorField::new(5, Some(SEED));
    field.set(0, 0, Cell::Alive(Rgb::new(1, 2, 3)));
    field.set(4, 4, Cell::Alive(Rgb::new(4, 5, 6)));
    field.set(4, 3, Cell::Alive(Rgb::new(7, 8, 9)));

    field.step_rule();

    assert!(live_cells(&field).is_empty());
}

#[test]
fn overcrowded_cell_dies() {
    let mut field = ColorField::new(5, Some(SEED));
    // plus shape: the center has 4 neighbors
    for (row, col) in [(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)] {
        field.set(row, col, Cell::Alive(Rgb::new(10, 10, 10)));
    }

    field.step_rule();

    assert_eq!(field.get(2, 2), Cell::Dead);
}

#[test]
fn corners_do_not_wrap_around() {
    let mut field = ColorField::new(5, Some(SEED));
    for (row, col) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
        field.set(row, col, Cell::Alive(Rgb::new(60, 60, 60)));
    }

    field.step_rule();

    // with a toroidal field every corner would have 3 neighbors
    assert!(live_cells(&field).is_empty());
}

#[test]
fn mutation_recolors_exactly_one_cell() {
    let mut field = ColorField::new(5, Some(SEED));
    field.set(2, 2, Cell::Alive(Rgb::new(1, 2, 3)));
    let before = field.cells().to_vec();

    field.mutate_random_cell();

    let changed = (0..before.len())
        .filter(|&i| field.cells()[i] != before[i])
        .collect::<Vec<_>>();
    assert!(changed.len() <= 1);
    let alive = (0..before.len()).filter(|&i| field.cells()[i].is_alive());
    assert!(alive.count() >= 1);
    for (row, col) in live_cells(&field) {
        let [r, g, b] = field.get(row, col).rgb8();
        assert!(r <= ColorField::CHANNEL_MAX);
        assert!(g <= ColorField::CHANNEL_MAX);
        assert!(b <= ColorField::CHANNEL_MAX);
    }
}
