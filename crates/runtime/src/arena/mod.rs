//! Reference simulation hosting behavior-tree controlled units.
//!
//! The [`Arena`] owns every unit and drives them with a single entry point,
//! [`Arena::step`]. Each step:
//!
//! 1. Ticks every living unit's [`Controller`] once, in spawn order, against a
//!    fresh [`WorldSnapshot`]; the unit's attack then recharges
//! 2. Moves units toward their destinations
//! 3. Asks the [`Referee`] for a verdict and, on the first one, swaps every
//!    controller for [`Controller::Celebrate`]
//!
//! Everything that happened is returned in a [`StepReport`].

mod agent;
mod controller;
mod event;
mod motion;
mod referee;
mod sight;
mod world;

pub use agent::UnitAgent;
pub use controller::Controller;
pub use event::{ArenaEvent, StepReport};
pub use referee::{Referee, RoundResult};
pub use sight::{Hit, first_hit};
pub use world::WorldSnapshot;

use std::f32::consts::PI;

use game_content::UnitCatalog;
use game_core::{ArenaLayout, EnemyWaves, GameConfig, Team, Unit, UnitData, UnitId, Vec3};
use rand::{SeedableRng, rngs::StdRng};

use crate::error::{Result, RuntimeError};
use crate::providers::ai::{BehaviorTree, Clock};

/// A self-contained round of combat.
pub struct Arena {
    config: GameConfig,
    layout: ArenaLayout,
    units: Vec<Unit>,
    controllers: Vec<Controller>,
    referee: Referee,
    rng: StdRng,
    tick: u64,
    elapsed: f32,
    next_id: u32,
}

impl Arena {
    pub fn new(config: GameConfig, layout: ArenaLayout, seed: u64) -> Self {
        Self {
            referee: Referee::new(layout.finish_area),
            config,
            layout,
            units: Vec::new(),
            controllers: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
            elapsed: 0.0,
            next_id: 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &ArenaLayout {
        &self.layout
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    /// Direct access for scripted setups.
    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    pub fn controller(&self, id: UnitId) -> Option<&Controller> {
        let index = self.units.iter().position(|unit| unit.id == id)?;
        self.controllers.get(index)
    }

    pub fn living(&self, team: Team) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(move |unit| unit.team == team && unit.is_alive())
    }

    pub fn result(&self) -> Option<RoundResult> {
        self.referee.result()
    }

    pub fn clock(&self) -> Clock {
        Clock::new(self.tick, self.elapsed, 0.0)
    }

    /// Places a unit built from a template, controlled by its archetype tree.
    pub fn spawn(&mut self, data: &UnitData, team: Team, position: Vec3) -> Result<UnitId> {
        let tree = BehaviorTree::for_kind(data.behavior, &self.config);
        self.spawn_with(data, team, position, Controller::Tree(tree))
    }

    /// Places a unit with an explicit controller.
    pub fn spawn_with(
        &mut self,
        data: &UnitData,
        team: Team,
        position: Vec3,
        controller: Controller,
    ) -> Result<UnitId> {
        if !self.layout.is_reachable(position) {
            return Err(RuntimeError::UnreachableSpawn {
                unit: data.name.clone(),
                position,
            });
        }

        let id = UnitId(self.next_id);
        self.next_id += 1;

        let heading = match team {
            Team::Player => 0.0,
            Team::Enemies => PI,
        };
        let unit = Unit::spawn(id, data, team, position).facing(heading);
        tracing::info!(unit = %id, name = %unit.name, %team, ?position, "unit spawned");

        self.units.push(unit);
        self.controllers.push(controller);
        Ok(id)
    }

    /// Spawns the layout's player squad and the enemy wave for `round`.
    ///
    /// Wave units take the layout's enemy spawn points in order; when a wave
    /// outnumbers the points, later units are offset sideways.
    pub fn spawn_round(
        &mut self,
        catalog: &UnitCatalog,
        waves: &EnemyWaves,
        round: usize,
    ) -> Result<Vec<UnitId>> {
        let mut spawned = Vec::new();

        let players = self.layout.players.clone();
        for spawn in &players {
            let data = lookup(catalog, &spawn.unit)?;
            spawned.push(self.spawn(data, Team::Player, spawn.position)?);
        }

        let Some(wave) = waves.wave(round) else {
            tracing::warn!(round, "no enemy waves defined");
            return Ok(spawned);
        };
        let points = self.layout.enemy_spawns.len().max(1);
        for (index, name) in wave.units.iter().enumerate() {
            let data = lookup(catalog, name)?;
            let base = self
                .layout
                .enemy_spawn(index)
                .ok_or_else(|| RuntimeError::UnreachableSpawn {
                    unit: name.clone(),
                    position: Vec3::ZERO,
                })?;
            let offset = (index / points) as f32 * 2.0 * self.config.unit_radius;
            spawned.push(self.spawn(data, Team::Enemies, base + Vec3::ground(offset, 0.0))?);
        }

        tracing::info!(round, units = spawned.len(), "round spawned");
        Ok(spawned)
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) -> StepReport {
        let clock = Clock::new(self.tick, self.elapsed, dt);
        let mut events = Vec::new();

        for index in 0..self.units.len() {
            if !self.units[index].is_alive() {
                continue;
            }

            let snapshot = WorldSnapshot::capture(&self.units, &self.layout, &self.config);
            let Self {
                config,
                layout,
                units,
                controllers,
                rng,
                ..
            } = self;
            let mut agent = UnitAgent::new(units, index, layout, config, rng, &mut events, dt);
            controllers[index].run(&mut agent, &snapshot, clock);

            units[index].recharge_attack(dt);
        }

        for unit in self.units.iter_mut().filter(|unit| unit.is_alive()) {
            motion::advance(unit, &self.layout, dt);
        }

        if let Some(result) = self.referee.judge(&self.units) {
            tracing::info!(%result, tick = self.tick, elapsed = self.elapsed + dt, "round ended");
            for controller in &mut self.controllers {
                *controller = Controller::Celebrate;
            }
            events.push(ArenaEvent::RoundEnded(result));
        }

        self.tick += 1;
        self.elapsed += dt;

        StepReport {
            tick: clock.tick,
            elapsed: self.elapsed,
            events,
            result: self.referee.result(),
        }
    }
}

fn lookup<'c>(catalog: &'c UnitCatalog, name: &str) -> Result<&'c UnitData> {
    catalog
        .get(name)
        .ok_or_else(|| RuntimeError::UnknownTemplate(name.to_string()))
}
