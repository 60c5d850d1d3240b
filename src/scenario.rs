//! Scenario files: a board, the units on it and the attacks they declare
//!
//! Scenarios are TOML. Units reference catalog equipment by name; attacks
//! reference units by name and weapons by name on the attacking unit.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::arc::FacingArc;
use crate::board::hex::{Coords, Facing};
use crate::board::map::{Board, BoardHex};
use crate::board::terrain::Terrain;
use crate::combat::outcome::{interpret_roll, AttackResult};
use crate::combat::to_hit::CombatContext;
use crate::combat::unit::{Combatant, MovementMode, Target, UnitKind};
use crate::combat::volley::{resolve_volley, AttackDeclaration};
use crate::core::config::GameOptions;
use crate::core::error::{CombatError, Result};
use crate::core::types::{Phase, PlayerId, Round, TeamId, Teams};
use crate::effects::ecm::{FieldTracker, TemporaryEcmField};
use crate::equipment::ammo::{AmmoBin, WeaponMount};
use crate::equipment::catalog::EquipmentCatalog;
use crate::roll::dice::Dice;

#[derive(Debug, Deserialize)]
struct ScenarioFile {
    #[serde(default = "default_round")]
    round: Round,
    #[serde(default = "default_phase")]
    phase: Phase,
    board: BoardSpec,
    #[serde(default)]
    teams: Vec<TeamSpec>,
    #[serde(default)]
    units: Vec<UnitSpec>,
    #[serde(default)]
    fields: Vec<FieldSpec>,
    #[serde(default)]
    attacks: Vec<AttackSpec>,
}

fn default_round() -> Round {
    1
}

fn default_phase() -> Phase {
    Phase::Firing
}

#[derive(Debug, Deserialize)]
struct BoardSpec {
    width: u32,
    height: u32,
    #[serde(default)]
    hexes: Vec<HexSpec>,
}

#[derive(Debug, Deserialize)]
struct HexSpec {
    x: i32,
    y: i32,
    #[serde(default)]
    terrain: Terrain,
    #[serde(default)]
    elevation: i32,
}

#[derive(Debug, Deserialize)]
struct TeamSpec {
    player: u32,
    team: u32,
}

#[derive(Debug, Deserialize)]
struct UnitSpec {
    name: String,
    owner: u32,
    #[serde(default)]
    kind: UnitKind,
    position: Coords,
    #[serde(default)]
    previous_position: Option<Coords>,
    #[serde(default)]
    facing: Facing,
    #[serde(default)]
    movement: MovementMode,
    #[serde(default)]
    hexes_moved: u32,
    #[serde(default)]
    altitude: i32,
    #[serde(default = "default_gunnery")]
    gunnery: i32,
    #[serde(default)]
    immobile: bool,
    #[serde(default)]
    prone: bool,
    #[serde(default)]
    weapons: Vec<MountSpec>,
}

fn default_gunnery() -> i32 {
    4
}

#[derive(Debug, Deserialize)]
struct MountSpec {
    name: String,
    #[serde(default)]
    arc: FacingArc,
    #[serde(default)]
    ammo: Option<String>,
    #[serde(default)]
    shots: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct FieldSpec {
    position: Coords,
    #[serde(default)]
    range: u32,
    round: Round,
    owner: u32,
    #[serde(default)]
    expiration_round: Option<Round>,
    #[serde(default)]
    expiration_phase: Option<Phase>,
    #[serde(default)]
    source: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TargetSpec {
    Unit(String),
    Hex(Coords),
    Building(Coords),
}

#[derive(Debug, Deserialize)]
struct AttackSpec {
    attacker: String,
    weapon: String,
    target: TargetSpec,
}

/// Where a planned attack is aimed, by index into the scenario's units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetRef {
    Unit(usize),
    Hex(Coords),
    Building(Coords),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttackPlan {
    pub attacker: usize,
    pub weapon: usize,
    pub target: TargetRef,
}

/// One resolved attack, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct AttackReport {
    pub attacker: String,
    pub weapon: String,
    pub target: String,
    pub to_hit: String,
    pub result: AttackResult,
}

/// A loaded scenario
#[derive(Debug, Clone)]
pub struct Scenario {
    pub round: Round,
    pub phase: Phase,
    pub board: Board,
    pub teams: Teams,
    pub fields: FieldTracker,
    pub units: Vec<Combatant>,
    pub attacks: Vec<AttackPlan>,
}

impl Scenario {
    /// Parse a scenario, resolving equipment names against `catalog`
    pub fn from_toml_str(content: &str, catalog: &EquipmentCatalog) -> Result<Self> {
        let file: ScenarioFile = toml::from_str(content)?;

        let mut board = Board::new(file.board.width, file.board.height);
        for spec in file.board.hexes {
            let coords = Coords::new(spec.x, spec.y);
            ensure_on_board(&board, coords, "terrain hex")?;
            board.set_hex(coords, BoardHex::new(spec.terrain, spec.elevation));
        }

        let mut teams = Teams::new();
        for spec in file.teams {
            teams.assign(PlayerId(spec.player), TeamId(spec.team));
        }

        let units = file
            .units
            .into_iter()
            .map(|spec| {
                ensure_on_board(&board, spec.position, &spec.name)?;
                build_unit(spec, catalog)
            })
            .collect::<Result<Vec<_>>>()?;

        let mut fields = FieldTracker::new();
        for spec in file.fields {
            ensure_on_board(&board, spec.position, "ECM field")?;
            fields.insert(build_field(spec)?);
        }
        fields.prune(file.round, file.phase);

        let attacks = file
            .attacks
            .iter()
            .map(|spec| plan_attack(spec, &units, &board))
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            units = units.len(),
            attacks = attacks.len(),
            fields = fields.len(),
            "Loaded scenario"
        );

        Ok(Self { round: file.round, phase: file.phase, board, teams, fields, units, attacks })
    }

    pub fn load(path: impl AsRef<Path>, catalog: &EquipmentCatalog) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content, catalog)
    }

    pub fn context<'a>(&'a self, options: &'a GameOptions) -> CombatContext<'a> {
        CombatContext::new(&self.board, &self.fields, options, &self.teams)
            .at(self.round, self.phase)
    }

    pub fn unit(&self, name: &str) -> Option<&Combatant> {
        self.units.iter().find(|u| u.name == name)
    }

    pub fn declarations(&self) -> Vec<AttackDeclaration<'_>> {
        self.attacks
            .iter()
            .map(|plan| AttackDeclaration {
                attacker: &self.units[plan.attacker],
                target: match plan.target {
                    TargetRef::Unit(i) => Target::Unit(&self.units[i]),
                    TargetRef::Hex(c) => Target::Hex(c),
                    TargetRef::Building(c) => Target::Building(c),
                },
                weapon: plan.weapon,
            })
            .collect()
    }

    /// Compute every to-hit roll, then roll dice in declaration order
    pub fn resolve(&self, options: &GameOptions, dice: &mut Dice) -> Result<Vec<AttackReport>> {
        let ctx = self.context(options);
        let declarations = self.declarations();
        let rolls = resolve_volley(&ctx, &declarations);

        declarations
            .iter()
            .zip(rolls)
            .map(|(declaration, to_hit)| {
                let rolled = to_hit.needs_roll().then(|| dice.roll_2d6());
                let result = interpret_roll(&to_hit, rolled)?;
                let weapon = declaration
                    .attacker
                    .weapon(declaration.weapon)
                    .map_or_else(String::new, |m| m.weapon.name.clone());
                Ok(AttackReport {
                    attacker: declaration.attacker.name.clone(),
                    weapon,
                    target: declaration.target.label(),
                    to_hit: to_hit.value_as_string(),
                    result,
                })
            })
            .collect()
    }
}

fn build_unit(spec: UnitSpec, catalog: &EquipmentCatalog) -> Result<Combatant> {
    let mut unit = Combatant::new(spec.name, PlayerId(spec.owner), spec.kind, spec.position)
        .facing(spec.facing)
        .gunnery(spec.gunnery)
        .moved(spec.movement, spec.hexes_moved);
    unit.previous_position = spec.previous_position;
    unit.altitude = spec.altitude;
    unit.immobile = spec.immobile;
    unit.prone = spec.prone;

    for mount in spec.weapons {
        let weapon = catalog.weapon(&mount.name)?;
        let mut installed = WeaponMount::new(weapon, mount.arc);
        if let Some(ammo) = mount.ammo {
            let ammo = catalog.ammo(&ammo)?;
            let bin = match mount.shots {
                Some(shots) => AmmoBin::with_shots(ammo, shots),
                None => AmmoBin::full(ammo),
            };
            installed = installed.with_ammo(bin);
        }
        unit = unit.arm(installed);
    }
    Ok(unit)
}

fn build_field(spec: FieldSpec) -> Result<TemporaryEcmField> {
    let owner = PlayerId(spec.owner);
    let field = match (spec.expiration_round, spec.expiration_phase) {
        (None, None) => {
            TemporaryEcmField::from_point_source(spec.position, spec.round, owner)
                .with_range(spec.range)
        }
        (round, phase) => TemporaryEcmField::new(
            spec.position,
            spec.range,
            spec.round,
            round.unwrap_or(spec.round + 1),
            phase.unwrap_or(Phase::End),
            owner,
            "ecm",
        )?,
    };
    Ok(match spec.source {
        Some(source) => field.with_source(source),
        None => field,
    })
}

fn ensure_on_board(board: &Board, coords: Coords, what: &str) -> Result<()> {
    if board.in_bounds(coords) {
        return Ok(());
    }
    Err(CombatError::InvalidConfig(format!(
        "{} at {} is off the {}x{} board",
        what, coords, board.width, board.height
    )))
}

fn unit_index(units: &[Combatant], name: &str) -> Result<usize> {
    units
        .iter()
        .position(|u| u.name == name)
        .ok_or_else(|| CombatError::UnknownUnit(name.to_string()))
}

fn plan_attack(spec: &AttackSpec, units: &[Combatant], board: &Board) -> Result<AttackPlan> {
    let attacker = unit_index(units, &spec.attacker)?;
    let weapon = units[attacker]
        .weapons
        .iter()
        .position(|m| m.weapon.name == spec.weapon)
        .ok_or_else(|| CombatError::UnknownWeapon(format!("{} on {}", spec.weapon, spec.attacker)))?;
    let target = match &spec.target {
        TargetSpec::Unit(name) => TargetRef::Unit(unit_index(units, name)?),
        TargetSpec::Hex(c) => {
            ensure_on_board(board, *c, "target hex")?;
            TargetRef::Hex(*c)
        }
        TargetSpec::Building(c) => {
            ensure_on_board(board, *c, "target building")?;
            TargetRef::Building(*c)
        }
    };
    Ok(AttackPlan { attacker, weapon, target })
}
