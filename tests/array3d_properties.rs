use grid3::Array3D;
use proptest::prelude::*;

type Grid = Array3D<i16, 2, 3, 4>;

fn grid() -> impl Strategy<Value = Grid> {
    prop::collection::vec(any::<i16>(), Grid::LEN).prop_map(|values| {
        let mut grid = Grid::new();
        grid.data_mut().copy_from_slice(&values);
        grid
    })
}

proptest! {
    #[test]
    fn checked_matches_unchecked(g in grid(), i in 0usize..2, j in 0usize..3, k in 0usize..4) {
        // SAFETY: the strategy keeps coordinates within 2x3x4.
        let unchecked = unsafe { g.get_unchecked((i, j, k)) };
        prop_assert_eq!(g.at((i, j, k)), Ok(unchecked));
        prop_assert_eq!(g.data()[Grid::offset((i, j, k))], *unchecked);
    }

    #[test]
    fn checked_rejects_outside(g in grid(), i in 0usize..8, j in 0usize..8, k in 0usize..8) {
        let inside = i < 2 && j < 3 && k < 4;
        prop_assert_eq!(g.at((i, j, k)).is_ok(), inside);
        prop_assert_eq!(g.get((i, j, k)).is_some(), inside);
    }

    #[test]
    fn swap_is_an_involution(a in grid(), b in grid()) {
        let (mut x, mut y) = (a, b);
        x.swap(&mut y);
        prop_assert_eq!(x, b);
        prop_assert_eq!(y, a);
        x.swap(&mut y);
        prop_assert_eq!(x, a);
        prop_assert_eq!(y, b);
    }

    #[test]
    fn fill_round_trips(mut g in grid(), v in any::<i16>()) {
        g.fill(v);
        prop_assert!(g.iter().all(|&x| x == v));
        prop_assert_eq!(*g.front(), v);
        prop_assert_eq!(*g.back(), v);
    }

    #[test]
    fn ordering_matches_flattened_sequence(a in grid(), b in grid()) {
        prop_assert_eq!(a.cmp(&b), a.data().cmp(b.data()));
        prop_assert_eq!(a == b, a.data() == b.data());
        prop_assert_eq!(a > b, b < a);
        prop_assert_eq!(a <= b, !(b < a));
        prop_assert_eq!(a >= b, !(a < b));
    }

    #[test]
    fn converting_assignment_widens_each_element(g in grid()) {
        let mut wide = Array3D::<i64, 2, 3, 4>::new();
        wide.assign_from(&g);
        for (w, n) in wide.iter().zip(g.iter()) {
            prop_assert_eq!(*w, i64::from(*n));
        }
    }

    #[test]
    fn coords_invert_offset(offset in 0usize..Grid::LEN) {
        let (i, j, k) = Grid::coords(offset);
        prop_assert!(i < 2 && j < 3 && k < 4);
        prop_assert_eq!(Grid::offset((i, j, k)), offset);
    }
}
