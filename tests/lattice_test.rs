use ising_model::{Model, Shape, Spin};

#[test]
fn test_model_shape_and_spins() {
    let model = Model::new(Shape::new(10, 5).unwrap(), 1).unwrap();

    assert_eq!(model.shape().rows(), 10);
    assert_eq!(model.shape().cols(), 5);
    assert_eq!(model.site_count(), 50);
    assert!(!model.lattice().iter().any(|&s| -1 < s && s < 1));
    assert!(!model.lattice().iter().any(|&s| s > 1));
    assert!(!model.lattice().iter().any(|&s| s < -1));
}

#[test]
fn test_global_flip_preserves_observables() {
    let shape = Shape::new(9, 7).unwrap();
    let model = Model::seeded(shape, 1, 1234).unwrap();

    let mut flipped = model.clone();
    for row in 0..shape.rows() {
        for col in 0..shape.cols() {
            flipped.flip(row, col).unwrap();
        }
    }

    assert_ne!(flipped, model);
    assert_eq!(flipped.magnetism(), model.magnetism());
    assert_eq!(flipped.energy(), model.energy());
}

#[test]
fn test_different_seeds_give_different_lattices() {
    let shape = Shape::new(20, 20).unwrap();
    assert_ne!(Model::seeded(shape, 1, 1).unwrap(), Model::seeded(shape, 1, 2).unwrap());
}

#[test]
fn test_ferromagnet_is_lowest_energy() {
    let shape = Shape::new(6, 6).unwrap();
    let ground = Model::uniform(shape, Spin::Up, 1).unwrap().energy();

    for seed in 0..10 {
        assert!(Model::seeded(shape, 1, seed).unwrap().energy() >= ground);
    }
}
