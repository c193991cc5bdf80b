use verlet_sandbox_engine::systems::reactions::{Consumes, PairRule, Transform};
use verlet_sandbox_engine::{Material, Solver, SpawnerKind, Vec2};

fn count(solver: &Solver, material: Material) -> usize {
    solver.particles().iter().filter(|p| p.material == material).count()
}

#[test]
fn sand_settles_on_the_floor() {
    let mut solver = Solver::with_seed(1);
    solver.add_cluster(Material::Sand, Vec2::new(480.0, 200.0), 40, 60.0);

    for _ in 0..240 {
        solver.update();
    }

    let floor = solver.settings().bounds.max.y;
    for p in solver.particles() {
        // integration runs after the last clamp, so allow a little overshoot
        assert!(p.pos.y <= floor - p.radius + 1.0);
        assert!(p.pos.is_finite());
    }
    assert!(solver.particles().iter().any(|p| p.grounded));
}

#[test]
fn obsidian_pins_when_it_lands() {
    let mut solver = Solver::with_seed(2);
    solver.add_particle(Material::Obsidian, Vec2::new(300.0, 900.0));

    for _ in 0..60 {
        solver.update();
    }

    let p = &solver.particles()[0];
    assert!(p.pinned);
    let rest = p.pos;
    solver.update();
    assert_eq!(solver.particles()[0].pos, rest);
}

#[test]
fn burning_wood_makes_fire_and_smoke() {
    let mut solver = Solver::with_seed(7);
    solver.set_gravity_enabled(false);
    // ignite on first touch so the outcome does not hinge on the burn roll
    solver.reactions_mut().set(
        Material::Wood,
        Material::Fire,
        PairRule::Transform(Transform {
            consumes: Consumes::Only(Material::Wood),
            products: &[(Material::Fire, 1), (Material::Smoke, 3)],
            spread: 3.0,
            chance: None,
            cooldown: 0,
        }),
    );
    solver.add_rect(Material::Wood, Vec2::new(400.0, 400.0), Vec2::new(460.0, 440.0));
    solver.add_cluster(Material::Fire, Vec2::new(430.0, 420.0), 6, 4.0);
    let wood_before = count(&solver, Material::Wood);

    let mut saw_smoke = false;
    for _ in 0..30 {
        solver.update();
        saw_smoke |= count(&solver, Material::Smoke) > 0;
    }

    assert!(count(&solver, Material::Wood) < wood_before);
    assert!(saw_smoke);
}

#[test]
fn black_hole_gathers_particles() {
    let mut solver = Solver::with_seed(4);
    solver.set_gravity_enabled(false);
    let center = Vec2::new(480.0, 480.0);
    solver.add_spawner(center, SpawnerKind::BlackHole { radius: 300.0, power: 4000.0 });
    for (x, y) in [(380.0, 480.0), (580.0, 480.0), (480.0, 380.0), (480.0, 580.0)] {
        solver.add_particle(Material::Stone, Vec2::new(x, y));
    }
    let spread = |s: &Solver| -> f32 {
        s.particles()
            .iter()
            .filter(|p| !p.is_spawner())
            .map(|p| p.pos.distance(center))
            .sum()
    };
    let before = spread(&solver);

    for _ in 0..10 {
        solver.update();
    }

    assert!(spread(&solver) < before);
}

#[test]
fn hanging_rope_stays_connected() {
    let mut solver = Solver::with_seed(9);
    solver.add_particle(Material::Stone, Vec2::new(480.0, 100.0)).pin();
    for i in 1..6 {
        solver.add_particle(Material::Stone, Vec2::new(480.0 + i as f32 * 12.0, 100.0));
        solver.add_link(i - 1, i).unwrap();
    }

    for _ in 0..120 {
        solver.update();
    }

    assert_eq!(solver.link_count(), 5);
    assert_eq!(solver.particles()[0].pos, Vec2::new(480.0, 100.0));
    let tip = solver.particles()[5].pos;
    assert!(tip.y > 100.0);
    assert!(tip.distance(Vec2::new(480.0, 100.0)) < 5.0 * 12.0 * 2.0);
}
