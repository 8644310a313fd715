use fib_clock::{
    decompose, map_to_instructions, Catalog, Decomposition, DisplayState, SiteColor, SiteId,
};

fn sites(decomposition: &Decomposition) -> Vec<char> {
    decomposition.sites.iter().map(|id| id.0).collect()
}

fn size_sum(decomposition: &Decomposition, catalog: &Catalog) -> u32 {
    decomposition
        .sites
        .iter()
        .map(|id| catalog.get(*id).expect("site in catalog").size)
        .sum()
}

#[test]
fn test_every_hour_and_bucket_is_covered_exactly() {
    let catalog = Catalog::standard();
    for target in 0..=12 {
        let decomposition = decompose(target, &catalog);
        assert_eq!(size_sum(&decomposition, &catalog), target, "target {}", target);
        assert_eq!(decomposition.residual, 0, "target {}", target);
    }
}

#[test]
fn test_decomposition_is_deterministic() {
    let catalog = Catalog::standard();
    for target in 0..=12 {
        assert_eq!(decompose(target, &catalog), decompose(target, &catalog));
    }
}

#[test]
fn test_known_decompositions() {
    let catalog = Catalog::standard();
    assert!(decompose(0, &catalog).is_empty());
    assert_eq!(sites(&decompose(4, &catalog)), vec!['a', 'd']);
    assert_eq!(sites(&decompose(6, &catalog)), vec!['a', 'e']);
    assert_eq!(sites(&decompose(12, &catalog)), vec!['a', 'b', 'c', 'd', 'e']);
    assert_eq!(sites(&decompose(2, &catalog)), vec!['c']);
    assert_eq!(sites(&decompose(7, &catalog)), vec!['c', 'e']);
    assert_eq!(sites(&decompose(11, &catalog)), vec!['a', 'c', 'd', 'e']);
}

#[test]
fn test_overflow_is_silent() {
    let catalog = Catalog::standard();
    let decomposition = decompose(20, &catalog);
    assert_eq!(decomposition.len(), 5);
    assert_eq!(decomposition.residual, 8);
}

#[test]
fn test_shared_site_maps_to_hour_and_minute() {
    let catalog = Catalog::standard();
    let hour = decompose(2, &catalog);
    let minute = decompose(2, &catalog);
    let remainder = decompose(0, &catalog);

    let instructions =
        map_to_instructions(&catalog, &hour, &minute, &remainder, &DisplayState::default());
    for instruction in instructions {
        if instruction.site == SiteId('c') {
            assert_eq!(instruction.color, SiteColor::HourAndMinute);
        } else {
            assert_eq!(instruction.color, SiteColor::Empty);
        }
        assert!(!instruction.center_marker);
    }
}
