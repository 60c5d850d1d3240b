//! Volley resolution benchmarks.
//!
//! Run with: cargo bench --bench volley_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hexfire::board::{Board, Coords, Facing, FacingArc, Terrain};
use hexfire::combat::{resolve_volley, AttackDeclaration, CombatContext, Combatant, Target, UnitKind};
use hexfire::core::types::{PlayerId, Teams};
use hexfire::effects::FieldTracker;
use hexfire::equipment::{AmmoBin, EquipmentCatalog, WeaponMount};
use hexfire::GameOptions;

/// Two opposing lines of meks across a wooded board
fn battle_line(catalog: &EquipmentCatalog, per_side: i32) -> (Vec<Combatant>, Vec<Combatant>) {
    let laser = catalog.weapon("Medium Laser").unwrap();
    let lrm = catalog.weapon("LRM 10").unwrap();
    let lrm_ammo = catalog.ammo("LRM 10 Ammo").unwrap();

    let shooters = (0..per_side)
        .map(|i| {
            Combatant::new(format!("Attacker {}", i), PlayerId(1), UnitKind::Mek, Coords::new(i, 30))
                .facing(Facing::North)
                .arm(WeaponMount::new(laser.clone(), FacingArc::Forward))
                .arm(
                    WeaponMount::new(lrm.clone(), FacingArc::Forward)
                        .with_ammo(AmmoBin::full(lrm_ammo.clone())),
                )
        })
        .collect();
    let targets = (0..per_side)
        .map(|i| Combatant::new(format!("Defender {}", i), PlayerId(2), UnitKind::Mek, Coords::new(i, 20)))
        .collect();
    (shooters, targets)
}

fn bench_volley(c: &mut Criterion) {
    let catalog = EquipmentCatalog::standard();
    let mut board = Board::new(64, 40);
    for x in (0..64).step_by(3) {
        board.set_terrain(Coords::new(x, 25), Terrain::LightWoods);
    }
    let fields = FieldTracker::new();
    let options = GameOptions::default();
    let teams = Teams::new();
    let ctx = CombatContext::new(&board, &fields, &options, &teams);

    let mut group = c.benchmark_group("volley");
    for per_side in [4, 16, 64].iter() {
        let (shooters, targets) = battle_line(&catalog, *per_side);
        let attacks: Vec<_> = shooters
            .iter()
            .zip(&targets)
            .flat_map(|(s, t)| {
                (0..s.weapons.len())
                    .map(move |w| AttackDeclaration { attacker: s, target: Target::Unit(t), weapon: w })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_attacks", attacks.len())),
            &attacks,
            |b, attacks| {
                b.iter(|| black_box(resolve_volley(&ctx, black_box(attacks))));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_volley);
criterion_main!(benches);
