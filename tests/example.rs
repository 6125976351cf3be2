use toboggan::{part_one, part_two, walk, Map, PART_TWO_SLOPES};

const EXAMPLE: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

fn example() -> Map {
    EXAMPLE.parse().unwrap()
}

#[test]
fn stage1_example() {
    let map = example();
    assert_eq!(walk(&map, 3, 1), Ok(7));
    assert_eq!(part_one(&map), 7);
}

#[test]
fn stage2_example() {
    let map = example();

    let expected: [usize; 5] = [2, 7, 3, 4, 2];

    let counts = PART_TWO_SLOPES
        .iter()
        .map(|slope| walk(&map, slope.right(), slope.down()).unwrap())
        .collect::<Vec<_>>();

    assert_eq!(&counts[..], &expected[..]);
    assert_eq!(part_two(&map), 336);
}

#[test]
fn slope_order_does_not_change_the_product() {
    let map = example();

    let reversed = PART_TWO_SLOPES
        .iter()
        .rev()
        .map(|&slope| map.trees_along(slope) as u64)
        .product::<u64>();

    assert_eq!(reversed, part_two(&map));
}

#[test]
fn walking_does_not_change_the_map() {
    let map = example();
    let before = map.clone();

    let first = (walk(&map, 5, 1), part_one(&map), part_two(&map));
    let second = (walk(&map, 5, 1), part_one(&map), part_two(&map));

    assert_eq!(first, second);
    assert_eq!(map, before);
}

#[test]
fn counts_are_bounded_by_steps() {
    let map = example();

    for down in 1..=map.height() + 1 {
        for right in 0..2 * map.width() {
            let steps = (map.height() + down - 1) / down;
            let trees = walk(&map, right, down).unwrap();
            assert!(trees <= steps, "{} > {} for ({}, {})", trees, steps, right, down);
        }
    }
}

#[test]
fn right_steps_are_periodic_in_width() {
    let map = example();
    let width = map.width();

    for right in 0..width {
        for down in 1..=3 {
            assert_eq!(walk(&map, right, down), walk(&map, right + width, down));
            assert_eq!(walk(&map, right, down), walk(&map, right + 3 * width, down));
        }
    }
}

#[test]
fn read_from_lines() {
    let map = toboggan::io::read_map(EXAMPLE.as_bytes()).unwrap();
    assert_eq!(map, example());
    assert_eq!(map.to_string(), EXAMPLE);
}
