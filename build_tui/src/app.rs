//! Application state

use crate::scenario;
use crate::simulation::{simulate_survival, SurvivalSummary};
use anyhow::Result;
use build_core::config::BuffKind;
use build_core::{
    calculate_build, tables, AttackBuff, BuildError, BuildReport, CharacterState, EquipmentSlot,
    Item, Job, MonsterSnapshot, MonsterState, PrimaryStat, SkillKind,
};
use std::path::Path;

/// Duels per survival simulation
pub const SIMULATION_TRIALS: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Stats,
    Build,
    Equip,
    Damage,
    Rates,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Stats,
            Tab::Build,
            Tab::Equip,
            Tab::Damage,
            Tab::Rates,
            Tab::Help,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Stats => "Stats",
            Tab::Build => "Build",
            Tab::Equip => "Equip",
            Tab::Damage => "Damage",
            Tab::Rates => "Rates",
            Tab::Help => "Help",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EquipFocus {
    Slots,
    Inventory,
}

/// Flat defensive buff typed in on the Build tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefensiveField {
    Pdef,
    Mdef,
    Acc,
    Eva,
    Speed,
    Jump,
}

impl DefensiveField {
    pub fn all() -> &'static [DefensiveField] {
        &[
            DefensiveField::Pdef,
            DefensiveField::Mdef,
            DefensiveField::Acc,
            DefensiveField::Eva,
            DefensiveField::Speed,
            DefensiveField::Jump,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            DefensiveField::Pdef => "W.Def buff",
            DefensiveField::Mdef => "M.Def buff",
            DefensiveField::Acc => "Acc buff",
            DefensiveField::Eva => "Avoid buff",
            DefensiveField::Speed => "Speed buff",
            DefensiveField::Jump => "Jump buff",
        }
    }
}

/// One editable row on the Build tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildRow {
    Level,
    Job,
    Pure(PrimaryStat),
    BaseHp,
    BaseMp,
    SelfBuff,
    SelfBuffLevel,
    AttackBuff(u8),
    Echo,
    Mastery,
    MasteryAttack,
    Absorption,
    Defensive(DefensiveField),
    Skill(SkillKind, String),
    Monster,
}

pub struct App {
    pub current_tab: Tab,
    pub character: CharacterState,
    /// Character as loaded, restored by `reset`
    initial: CharacterState,
    pub inventory: Vec<Item>,
    pub monsters: Vec<MonsterState>,
    pub monster_index: Option<usize>,
    pub report: BuildReport,

    // Selection state
    pub build_selected: usize,
    pub selected_slot: usize,
    pub selected_inventory: usize,
    pub equip_focus: EquipFocus,
    pub scroll: u16,

    pub simulation: Option<SurvivalSummary>,
    simulation_runs: u64,
    /// Last error or notice, shown in the footer
    pub status: Option<String>,
}

impl App {
    pub fn new(character: CharacterState, inventory: Vec<Item>, monsters: Vec<MonsterState>) -> Self {
        let report = calculate_build(&character, None, tables());
        let mut app = App {
            current_tab: Tab::Stats,
            initial: character.clone(),
            character,
            inventory,
            monsters,
            monster_index: None,
            report,
            build_selected: 0,
            selected_slot: 0,
            selected_inventory: 0,
            equip_focus: EquipFocus::Slots,
            scroll: 0,
            simulation: None,
            simulation_runs: 0,
            status: None,
        };
        app.recalculate();
        app
    }

    /// Load items, monsters and the scenario from disk
    pub fn load(data_dir: &Path, scenario_path: Option<&Path>) -> Result<Self> {
        let inventory = scenario::load_items(&data_dir.join(scenario::ITEMS_FILE))?;
        let monsters = scenario::load_monsters(&data_dir.join(scenario::MONSTERS_FILE))?;
        let scenario_path = scenario_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| data_dir.join(scenario::SCENARIO_FILE));
        let scenario = scenario::load_scenario(&scenario_path)?;
        let character = scenario.build_character(&inventory, tables())?;

        tracing::info!(
            "loaded {} items and {} monsters from {}",
            inventory.len(),
            monsters.len(),
            data_dir.display()
        );

        let mut app = App::new(character, inventory, monsters);
        if let Some(id) = &scenario.monster {
            match app.monsters.iter().position(|m| &m.id == id) {
                Some(index) => app.select_monster(Some(index)),
                None => tracing::warn!("scenario names unknown monster '{}'", id),
            }
        }
        Ok(app)
    }

    // === Tabs ===

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + 1) % tabs.len()];
        self.scroll = 0;
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let current_idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(current_idx + tabs.len() - 1) % tabs.len()];
        self.scroll = 0;
    }

    pub fn set_tab(&mut self, index: usize) {
        if let Some(tab) = Tab::all().get(index) {
            self.current_tab = *tab;
            self.scroll = 0;
        }
    }

    // === Key handling ===

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Build => self.build_selected = self.build_selected.saturating_sub(1),
            Tab::Equip => match self.equip_focus {
                EquipFocus::Slots => {
                    self.selected_slot = self.selected_slot.saturating_sub(1);
                    self.selected_inventory = 0;
                }
                EquipFocus::Inventory => {
                    self.selected_inventory = self.selected_inventory.saturating_sub(1)
                }
            },
            _ => self.scroll = self.scroll.saturating_sub(1),
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Build => {
                let rows = self.build_rows().len();
                if self.build_selected + 1 < rows {
                    self.build_selected += 1;
                }
            }
            Tab::Equip => match self.equip_focus {
                EquipFocus::Slots => {
                    if self.selected_slot + 1 < EquipmentSlot::all().len() {
                        self.selected_slot += 1;
                        self.selected_inventory = 0;
                    }
                }
                EquipFocus::Inventory => {
                    if self.selected_inventory + 1 < self.filtered_inventory().len() {
                        self.selected_inventory += 1;
                    }
                }
            },
            _ => self.scroll = self.scroll.saturating_add(1),
        }
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Build => self.adjust_selected(-1),
            Tab::Equip => self.equip_focus = EquipFocus::Slots,
            _ => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Build => self.adjust_selected(1),
            Tab::Equip => {
                self.equip_focus = EquipFocus::Inventory;
                self.selected_inventory = 0;
            }
            _ => {}
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Build => self.adjust_selected(1),
            Tab::Equip => self.equip_selected(),
            Tab::Damage | Tab::Rates => self.run_simulation(),
            _ => {}
        }
    }

    pub fn on_space(&mut self) {
        self.on_enter();
    }

    /// Undo every edit since loading
    pub fn reset(&mut self) {
        self.character = self.initial.clone();
        self.build_selected = 0;
        self.status = Some("Build reset".to_string());
        self.recalculate();
    }

    // === Monster ===

    pub fn selected_monster(&self) -> Option<&MonsterState> {
        self.monster_index.and_then(|i| self.monsters.get(i))
    }

    fn monster_snapshot(&self) -> Option<MonsterSnapshot> {
        self.selected_monster().map(MonsterState::snapshot)
    }

    pub fn select_monster(&mut self, index: Option<usize>) {
        self.monster_index = index.filter(|&i| i < self.monsters.len());
        if let Some(monster) = self.selected_monster() {
            tracing::info!("target: {}", monster.name);
        }
        self.recalculate();
    }

    /// Cycle through the monster list, passing through "no target"
    pub fn cycle_monster(&mut self, delta: i32) {
        let count = self.monsters.len() as i32 + 1;
        let current = self.monster_index.map(|i| i as i32 + 1).unwrap_or(0);
        let next = (current + delta).rem_euclid(count);
        self.select_monster(if next == 0 { None } else { Some(next as usize - 1) });
    }

    // === Derived ===

    fn recalculate(&mut self) {
        let monster = self.monster_snapshot();
        self.report = calculate_build(&self.character, monster.as_ref(), tables());
        self.simulation = None;
    }

    /// Run the survival simulation against the selected monster
    pub fn run_simulation(&mut self) {
        let Some(monster) = self.monster_snapshot() else {
            self.status = Some("Select a monster first (m)".to_string());
            return;
        };
        self.simulation_runs += 1;
        self.simulation =
            simulate_survival(&self.report, &monster, SIMULATION_TRIALS, self.simulation_runs);
    }

    fn apply(&mut self, result: Result<(), BuildError>) {
        match result {
            Ok(()) => {
                self.status = None;
                self.recalculate();
            }
            Err(e) => {
                tracing::warn!("rejected edit: {}", e);
                self.status = Some(e.to_string());
            }
        }
    }

    // === Build tab ===

    /// Editable rows for the current job
    pub fn build_rows(&self) -> Vec<BuildRow> {
        let mut rows = vec![BuildRow::Level, BuildRow::Job];
        rows.extend(PrimaryStat::all().iter().map(|s| BuildRow::Pure(*s)));
        rows.extend([
            BuildRow::BaseHp,
            BuildRow::BaseMp,
            BuildRow::SelfBuff,
            BuildRow::SelfBuffLevel,
            BuildRow::AttackBuff(1),
            BuildRow::AttackBuff(2),
            BuildRow::Echo,
            BuildRow::Mastery,
            BuildRow::MasteryAttack,
            BuildRow::Absorption,
        ]);
        rows.extend(DefensiveField::all().iter().map(|f| BuildRow::Defensive(*f)));

        let job = self.character.job();
        let tables = tables();
        rows.extend(
            tables
                .passives
                .iter()
                .filter(|s| s.job == job)
                .map(|s| BuildRow::Skill(SkillKind::Passive, s.id.clone())),
        );
        rows.extend(
            tables
                .reduction_skills
                .iter()
                .filter(|s| s.job == job)
                .map(|s| BuildRow::Skill(SkillKind::Reduction, s.id.clone())),
        );
        rows.extend(
            tables
                .evasion_skills
                .iter()
                .filter(|s| s.job == job)
                .map(|s| BuildRow::Skill(SkillKind::Evasion, s.id.clone())),
        );
        rows.push(BuildRow::Monster);
        rows
    }

    pub fn adjust_selected(&mut self, delta: i32) {
        let rows = self.build_rows();
        if let Some(row) = rows.get(self.build_selected) {
            self.adjust(row.clone(), delta);
        }
    }

    /// Step one Build row by `delta`; toggles flip on any step
    pub fn adjust(&mut self, row: BuildRow, delta: i32) {
        let result = match row {
            BuildRow::Level => {
                let level = self.character.level() as i64 + delta as i64;
                self.character.set_level(level.max(0) as u32)
            }
            BuildRow::Job => {
                let jobs = Job::all();
                let current = jobs
                    .iter()
                    .position(|j| *j == self.character.job())
                    .unwrap_or(0) as i32;
                let next = (current + delta).rem_euclid(jobs.len() as i32) as usize;
                self.character.set_job(jobs[next]);
                self.build_selected = self.build_selected.min(self.build_rows().len() - 1);
                Ok(())
            }
            BuildRow::Pure(stat) => {
                let value = self.character.pure().get(stat) + delta;
                self.character.set_pure_stat(stat, value)
            }
            BuildRow::BaseHp => {
                self.character.base_hp = (self.character.base_hp + delta * 10).max(1);
                Ok(())
            }
            BuildRow::BaseMp => {
                self.character.base_mp = (self.character.base_mp + delta * 10).max(0);
                Ok(())
            }
            BuildRow::SelfBuff => {
                let buff = &mut self.character.buffs_mut().self_buff;
                buff.enabled = !buff.enabled;
                Ok(())
            }
            BuildRow::SelfBuffLevel => {
                let max = tables().self_buff.bonus_percent.len() as i64;
                let buff = &mut self.character.buffs_mut().self_buff;
                buff.level = (buff.level as i64 + delta as i64).clamp(0, max) as u32;
                Ok(())
            }
            BuildRow::AttackBuff(slot) => {
                let next = self.next_attack_buff(slot, delta);
                self.character.set_attack_buff(slot, next, tables())
            }
            BuildRow::Echo => {
                let buffs = self.character.buffs_mut();
                buffs.echo = !buffs.echo;
                Ok(())
            }
            BuildRow::Mastery => {
                let buffs = self.character.buffs_mut();
                buffs.mastery = if delta < 0 {
                    buffs.mastery.prev()
                } else {
                    buffs.mastery.next()
                };
                Ok(())
            }
            BuildRow::MasteryAttack => {
                let buffs = self.character.buffs_mut();
                buffs.mastery_flat_attack = (buffs.mastery_flat_attack + delta).max(0);
                Ok(())
            }
            BuildRow::Absorption => {
                let buffs = self.character.buffs_mut();
                buffs.absorption = !buffs.absorption;
                Ok(())
            }
            BuildRow::Defensive(field) => {
                let buffs = &mut self.character.buffs_mut().defensive;
                let value = match field {
                    DefensiveField::Pdef => &mut buffs.pdef,
                    DefensiveField::Mdef => &mut buffs.mdef,
                    DefensiveField::Acc => &mut buffs.acc,
                    DefensiveField::Eva => &mut buffs.eva,
                    DefensiveField::Speed => &mut buffs.speed,
                    DefensiveField::Jump => &mut buffs.jump,
                };
                *value = (*value + delta).max(0);
                Ok(())
            }
            BuildRow::Skill(kind, id) => {
                let level = self.character.skill_level(kind, &id) as i64 + delta as i64;
                self.character
                    .set_skill_level(kind, &id, level.max(0) as u32, tables())
                    .map(|_| ())
            }
            BuildRow::Monster => {
                self.cycle_monster(delta);
                return;
            }
        };
        self.apply(result);
    }

    /// Attack buff choices for the current job: none, then matching presets
    pub fn attack_buff_options(&self) -> Vec<AttackBuff> {
        let wanted = if self.character.job().is_magician() {
            BuffKind::Magic
        } else {
            BuffKind::Attack
        };
        std::iter::once(AttackBuff::None)
            .chain(
                tables()
                    .buff_presets
                    .iter()
                    .filter(|p| p.kind == wanted)
                    .map(|p| AttackBuff::Preset(p.id.clone())),
            )
            .collect()
    }

    fn next_attack_buff(&self, slot: u8, delta: i32) -> AttackBuff {
        let options = self.attack_buff_options();
        let buffs = self.character.buffs();
        let current = if slot == 1 { &buffs.buff1 } else { &buffs.buff2 };
        let index = options.iter().position(|o| o == current).unwrap_or(0) as i32;
        let next = (index + delta).rem_euclid(options.len() as i32) as usize;
        options[next].clone()
    }

    // === Equip tab ===

    pub fn current_slot(&self) -> EquipmentSlot {
        EquipmentSlot::all()
            .get(self.selected_slot)
            .copied()
            .unwrap_or(EquipmentSlot::Weapon)
    }

    /// Inventory items that fit the selected slot
    pub fn filtered_inventory(&self) -> Vec<&Item> {
        let slot = self.current_slot();
        self.inventory.iter().filter(|item| item.fits(slot)).collect()
    }

    pub fn equip_selected(&mut self) {
        match self.equip_focus {
            EquipFocus::Slots => self.unequip_current_slot(),
            EquipFocus::Inventory => {
                let slot = self.current_slot();
                let selected = self.filtered_inventory().get(self.selected_inventory).cloned();
                let Some(item) = selected.cloned() else {
                    return;
                };
                let name = item.name.clone();
                let result = self.character.equip(slot, item).map(|displaced| {
                    for old in displaced {
                        tracing::debug!("{} replaced {}", name, old.name);
                    }
                });
                self.apply(result);
            }
        }
    }

    pub fn unequip_current_slot(&mut self) {
        let slot = self.current_slot();
        if self.character.unequip(slot).is_some() {
            self.recalculate();
        }
    }

    /// Key numbers before and after wearing `item` in the selected slot
    pub fn preview_equip_diff(&self, item: &Item) -> Vec<(String, i64, i64)> {
        let mut preview = self.character.clone();
        if preview.equip(self.current_slot(), item.clone()).is_err() {
            return Vec::new();
        }
        let monster = self.monster_snapshot();
        let after = calculate_build(&preview, monster.as_ref(), tables());
        let before = &self.report;

        let pairs = [
            ("Attack", before.stats.total_attack as i64, after.stats.total_attack as i64),
            ("Magic", before.stats.total_mad as i64, after.stats.total_mad as i64),
            ("Main stat", before.stats.main_stat as i64, after.stats.main_stat as i64),
            ("Sub stat", before.stats.sub_stat as i64, after.stats.sub_stat as i64),
            ("Max damage", before.outgoing.max, after.outgoing.max),
            ("Min damage", before.outgoing.min, after.outgoing.min),
            ("Accuracy", before.stats.acc as i64, after.stats.acc as i64),
            ("Avoid", before.stats.eva as i64, after.stats.eva as i64),
            ("W.Def", before.stats.pdef as i64, after.stats.pdef as i64),
            ("M.Def", before.stats.mdef as i64, after.stats.mdef as i64),
            ("HP", before.stats.hp as i64, after.stats.hp as i64),
        ];
        pairs
            .into_iter()
            .filter(|(_, old, new)| old != new)
            .map(|(name, old, new)| (name.to_string(), old, new))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use build_core::{StatsSummary, WeaponType};

    fn equip_by_id(app: &mut App, id: &str) {
        let item = app.inventory.iter().find(|item| item.id == id).cloned().unwrap();
        let slot = scenario::free_slot(&app.character, &item);
        let result = app.character.equip(slot, item).map(|_| ());
        app.apply(result);
    }

    fn item(id: &str, slot: EquipmentSlot, stats: StatsSummary) -> Item {
        Item {
            id: id.to_string(),
            name: id.to_string(),
            slot,
            full_body: false,
            weapon_type: None,
            stats,
        }
    }

    fn app() -> App {
        let character = CharacterState::new(50, Job::Warrior).unwrap();
        let mut sword = item(
            "sword",
            EquipmentSlot::Weapon,
            StatsSummary {
                attack: 60,
                ..Default::default()
            },
        );
        sword.weapon_type = Some(WeaponType::OneHandedSword);
        let inventory = vec![
            sword,
            item(
                "helm",
                EquipmentSlot::Hat,
                StatsSummary {
                    pdef: 40,
                    ..Default::default()
                },
            ),
        ];
        let monsters = vec![MonsterState {
            id: "slime".to_string(),
            name: "Slime".to_string(),
            stats: MonsterSnapshot {
                level: 10,
                pad: 40,
                acc: 20,
                eva: 5,
                max_hp: 500,
                ..Default::default()
            },
        }];
        App::new(character, inventory, monsters)
    }

    fn row_index(app: &App, row: &BuildRow) -> usize {
        app.build_rows().iter().position(|r| r == row).unwrap()
    }

    #[test]
    fn test_tab_cycle() {
        let mut app = app();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Build);
        app.set_tab(4);
        assert_eq!(app.current_tab, Tab::Rates);
        app.set_tab(42);
        assert_eq!(app.current_tab, Tab::Rates);
    }

    #[test]
    fn test_level_edit_recalculates() {
        let mut app = app();
        let before = app.report.stats.main_stat;
        app.adjust(BuildRow::Level, 1);
        assert_eq!(app.character.level(), 51);
        assert_eq!(app.report.stats.main_stat, before + 5);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_rejected_edit_sets_status() {
        let mut app = app();
        app.adjust(BuildRow::Pure(PrimaryStat::Str), 1);
        assert!(app.status.is_some());

        app.adjust(BuildRow::Pure(PrimaryStat::Dex), -1);
        assert_eq!(app.character.pure().dex, 4);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_equip_from_inventory() {
        let mut app = app();
        app.set_tab(2);
        app.on_right();
        assert_eq!(app.filtered_inventory().len(), 1);

        let preview = app.preview_equip_diff(app.filtered_inventory()[0]);
        assert!(preview.iter().any(|(name, _, new)| name == "Attack" && *new == 60));

        app.on_enter();
        assert_eq!(app.report.stats.total_attack, 60);
        assert!(app.report.outgoing.max > 0);

        app.on_left();
        app.unequip_current_slot();
        assert_eq!(app.report.stats.total_attack, 0);
    }

    #[test]
    fn test_attack_buff_cycles_presets() {
        let mut app = app();
        let options = app.attack_buff_options();
        assert_eq!(options[0], AttackBuff::None);
        assert!(options.contains(&AttackBuff::Preset("rage".to_string())));
        assert!(!options.contains(&AttackBuff::Preset("meditation".to_string())));

        app.adjust(BuildRow::AttackBuff(1), 1);
        assert_eq!(app.character.buffs().buff1, options[1]);
        app.adjust(BuildRow::AttackBuff(1), -1);
        assert_eq!(app.character.buffs().buff1, AttackBuff::None);
    }

    #[test]
    fn test_skill_rows_follow_job() {
        let mut app = app();
        let power_guard = BuildRow::Skill(SkillKind::Reduction, "power_guard".to_string());
        assert!(app.build_rows().contains(&power_guard));

        app.adjust(power_guard.clone(), 3);
        assert_eq!(app.character.skill_level(SkillKind::Reduction, "power_guard"), 3);

        app.adjust(BuildRow::Job, 1);
        assert_eq!(app.character.job(), Job::Archer);
        assert!(!app.build_rows().contains(&power_guard));
    }

    #[test]
    fn test_monster_cycle_passes_through_none() {
        let mut app = app();
        assert!(app.report.target.is_none());

        app.cycle_monster(1);
        assert_eq!(app.selected_monster().map(|m| m.id.as_str()), Some("slime"));
        assert!(app.report.target.is_some());

        app.cycle_monster(1);
        assert!(app.selected_monster().is_none());
        app.cycle_monster(-1);
        assert!(app.selected_monster().is_some());
    }

    #[test]
    fn test_simulation_needs_monster() {
        let mut app = app();
        app.run_simulation();
        assert!(app.simulation.is_none());
        assert!(app.status.is_some());

        equip_by_id(&mut app, "sword");
        app.cycle_monster(1);
        app.run_simulation();
        assert!(app.simulation.is_some());

        // Any edit invalidates the last run
        app.adjust(BuildRow::Echo, 1);
        assert!(app.simulation.is_none());
    }

    #[test]
    fn test_reset_restores_loaded_build() {
        let mut app = app();
        app.adjust(BuildRow::Level, 10);
        equip_by_id(&mut app, "helm");
        app.reset();
        assert_eq!(app.character.level(), 50);
        assert!(app.character.equipment().is_empty());
    }

    #[test]
    fn test_build_navigation_stays_in_range() {
        let mut app = app();
        app.set_tab(1);
        for _ in 0..200 {
            app.on_down();
        }
        assert_eq!(app.build_selected, app.build_rows().len() - 1);
        assert_eq!(app.build_selected, row_index(&app, &BuildRow::Monster));
    }
}
