//! Complete AI definitions for unit archetypes.
//!
//! Each preset is a ready-to-use tree that handles every situation with an
//! unconditional fallback at the end.
//!
//! # Architecture
//!
//! ```text
//! enemy()
//!   └─ Selector
//!       ├─ Sequence(IsCloseToAttackUnit(Player), Attack(Player))
//!       ├─ MoveTo(ClosestUnit(Player))
//!       └─ DoNothing
//!
//! player(flee_duration)
//!   └─ Selector
//!       ├─ Sequence(IsReadyToUsePower, Selector(
//!       │     Sequence(IsCloseToSkillTarget, UseSkill),
//!       │     Sequence(IsSkillTargetExist, MoveTo(SkillTarget))))
//!       ├─ Sequence(IsReadyToAttack, Selector(
//!       │     Sequence(IsCloseToAttackUnit(Enemies), Attack(Enemies)),
//!       │     Sequence(IsCloseToGetScared(Enemies), MoveTo(ClosestUnit(Enemies)))))
//!       ├─ Sequence(IsCloseToGetScared(Enemies), MoveToSafety(Enemies, flee_duration))
//!       └─ MoveTo(FinishArea)
//! ```

use behavior_tree::Root;
use behavior_tree::builder::{leaf, root_selector, selector, sequence};
use game_core::{BehaviorKind, GameConfig, Team};

use super::nodes::{Action, Attack, Condition, Leaf, MoveTo, MoveToSafety, UseSkill};

/// Aggressor: attack a player unit in range, otherwise close in, otherwise
/// idle.
pub fn enemy() -> Root<Leaf> {
    let foe = Team::Enemies.opponent();

    root_selector(vec![
        sequence(vec![
            leaf(Condition::IsCloseToAttackUnit(foe)),
            leaf(Attack::new(foe)),
        ]),
        leaf(MoveTo::closest_unit(foe)),
        leaf(Action::DoNothing),
    ])
}

/// Defender and support: cast the skill when charged, fight when recharged,
/// back off when threatened, otherwise advance to the finish area.
///
/// # Arguments
///
/// * `flee_duration` - Seconds spent running to safety once scared.
pub fn player(flee_duration: f32) -> Root<Leaf> {
    let foe = Team::Player.opponent();

    root_selector(vec![
        sequence(vec![
            leaf(Condition::IsReadyToUsePower),
            selector(vec![
                sequence(vec![
                    leaf(Condition::IsCloseToSkillTarget),
                    leaf(UseSkill::new()),
                ]),
                sequence(vec![
                    leaf(Condition::IsSkillTargetExist),
                    leaf(MoveTo::skill_target()),
                ]),
            ]),
        ]),
        sequence(vec![
            leaf(Condition::IsReadyToAttack),
            selector(vec![
                sequence(vec![
                    leaf(Condition::IsCloseToAttackUnit(foe)),
                    leaf(Attack::new(foe)),
                ]),
                sequence(vec![
                    leaf(Condition::IsCloseToGetScared(foe)),
                    leaf(MoveTo::closest_unit(foe)),
                ]),
            ]),
        ]),
        sequence(vec![
            leaf(Condition::IsCloseToGetScared(foe)),
            leaf(MoveToSafety::new(foe, flee_duration)),
        ]),
        leaf(MoveTo::finish_area()),
    ])
}

/// Builds the tree for an archetype tag.
pub fn build(kind: BehaviorKind, config: &GameConfig) -> Root<Leaf> {
    match kind {
        BehaviorKind::Enemy => enemy(),
        BehaviorKind::Player => player(config.flee_duration),
    }
}
