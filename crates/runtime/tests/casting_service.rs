use std::sync::Arc;

use spell_content::ContentFactory;
use spell_core::{
    CasterClass, Effect, EffectBlock, EffectQueue, EffectTarget, EntityId, ErrorSeverity,
    OracleError, Position, Projectile, ProjectileId, RulesConfig, Scriptable, ScriptableKind,
    Spell, SpellError, SpellFlags, SpellHeader, SpellType, StatId, TimingMode,
};
use spell_runtime::{
    ActorRegistry, ActorSheet, CastingService, ClockOracleImpl, ConfigOracleImpl,
    EffectTemplateOracleImpl, OracleManager, ProjectileOracleImpl, RuntimeError,
};

const MAGE: EntityId = EntityId(1);

fn oracles(round_length: u32) -> OracleManager {
    let mut templates = EffectTemplateOracleImpl::default();
    templates.add_template(
        RulesConfig::CASTING_GLOW,
        Effect::new(140, EffectTarget::SelfTarget, TimingMode::InstantLimited),
    );
    let projectiles: ProjectileOracleImpl = [
        Projectile::new(ProjectileId(2), "SPMAGMIS", 30),
        Projectile::new(ProjectileId(3), "SPFIREBL", 20),
    ]
    .into_iter()
    .collect();

    OracleManager::new(
        Arc::new(templates),
        Arc::new(projectiles),
        Arc::new(ClockOracleImpl::default()),
        Arc::new(ConfigOracleImpl::new(RulesConfig::with_round_length(round_length))),
    )
}

fn magic_missile() -> Spell {
    let damage = Effect::new(12, EffectTarget::Preset, TimingMode::InstantPermanent)
        .with_parameters(4, 0);
    let shield = Effect::new(83, EffectTarget::SelfTarget, TimingMode::InstantLimited)
        .with_duration(30);

    Spell::new(SpellType::Wizard, SpellFlags::HOSTILE)
        .with_casting_graphics(2)
        .with_headers(vec![
            SpellHeader::new(0, ProjectileId(2), 25).with_features(vec![damage.clone()]),
            SpellHeader::new(3, ProjectileId(2), 25)
                .with_features(vec![damage.clone(), damage.clone(), shield]),
            SpellHeader::new(7, ProjectileId(3), 40).with_features(vec![damage; 3]),
        ])
}

fn mage_registry() -> ActorRegistry {
    let mut actors = ActorRegistry::new();
    actors.insert(
        MAGE,
        ActorSheet::new()
            .with_class(CasterClass::Mage, 4)
            .with_stat(StatId::CastingLevelBonusMage, 3),
    );
    actors
}

#[test]
fn caster_level_drives_header_and_projectile() {
    let service = CastingService::new(oracles(6));
    let spell = magic_missile();
    let mut actors = mage_registry();
    let caster = Scriptable::actor(MAGE, Position::new(5, 5));

    let level = spell.casting_level(actors.get(MAGE).expect("mage registered"));
    assert_eq!(level, 7);

    let index = service.header_index(&spell, level).expect("level is valid");
    assert_eq!(index, 2);

    let projectile = service
        .projectile(&spell, &caster, index, Position::new(20, 5), &mut actors)
        .expect("header 2 uses projectile 3");
    assert_eq!(projectile.id, ProjectileId(3));
    assert_eq!(projectile.effects().map(EffectQueue::len), Some(3));

    let distance = service
        .casting_distance(&spell, actors.stats(MAGE))
        .expect("header resolves");
    assert_eq!(distance, 40);
}

#[test]
fn self_effects_land_on_the_casting_actor() {
    let service = CastingService::new(oracles(6));
    let spell = magic_missile();
    let mut actors = mage_registry();
    let caster = Scriptable::actor(MAGE, Position::new(5, 5));
    let target = Position::new(9, 9);

    let projectile = service
        .projectile(&spell, &caster, 1, target, &mut actors)
        .expect("header 1 exists");
    assert_eq!(projectile.effects().map(EffectQueue::len), Some(2));

    let applied = actors.get(MAGE).expect("mage registered").applied();
    assert_eq!(applied.len(), 1);
    assert_eq!(applied[0].source, MAGE);
    assert_eq!(applied[0].effect.opcode, 83);
    assert_eq!(applied[0].effect.position, Some(target));
    assert_eq!(applied[0].effect.source_flags, SpellFlags::HOSTILE);

    // the spell's own data is untouched
    assert_eq!(spell, magic_missile());
}

#[test]
fn door_casting_a_spell_gets_no_self_effects() {
    let service = CastingService::new(oracles(6));
    let spell = magic_missile();
    let mut actors = mage_registry();
    let door = Scriptable::new(EntityId(40), ScriptableKind::Door, Position::ORIGIN);

    let queue = service
        .effect_block(
            &spell,
            &door,
            Position::ORIGIN,
            EffectBlock::Header(1),
            ProjectileId(2),
            &mut actors,
        )
        .expect("header 1 exists");

    assert_eq!(queue.len(), 2);
    assert!(actors.get(MAGE).expect("mage registered").applied().is_empty());
}

#[test]
fn out_of_range_header_is_a_validation_error() {
    let service = CastingService::new(oracles(6));
    let mut actors = mage_registry();
    let caster = Scriptable::actor(MAGE, Position::ORIGIN);

    let err = service
        .projectile(&magic_missile(), &caster, 9, Position::ORIGIN, &mut actors)
        .expect_err("only three headers");

    assert!(matches!(
        err,
        RuntimeError::Spell(SpellError::HeaderNotFound {
            requested: 9,
            available: 3
        })
    ));
    assert_eq!(err.severity(), ErrorSeverity::Validation);
}

#[test]
fn simplified_duration_spell_scales_payload() {
    let service = CastingService::new(oracles(1));
    let mut actors = mage_registry();
    let caster = Scriptable::actor(MAGE, Position::ORIGIN);
    let slow = Effect::new(40, EffectTarget::Preset, TimingMode::InstantLimited).with_duration(5);
    let spell = Spell::new(SpellType::Priest, SpellFlags::empty())
        .with_headers(vec![
            SpellHeader::new(0, ProjectileId(2), 10).with_features(vec![slow]),
            SpellHeader::new(0, ProjectileId(2), 10),
            SpellHeader::new(0, ProjectileId(2), 10),
        ])
        .with_simplified_duration(600, 0);

    let index = service.header_index(&spell, 2).expect("identity index");
    let projectile = service
        .projectile(&spell, &caster, index, Position::ORIGIN, &mut actors)
        .expect("header 2 exists");

    // header 2 has no features of its own, so no payload is attached
    assert!(projectile.effects().is_none());

    let queue = service
        .effect_block(
            &spell,
            &caster,
            Position::ORIGIN,
            EffectBlock::Header(index),
            ProjectileId(2),
            &mut actors,
        )
        .expect("simplified blocks read header 0");
    assert_eq!(queue.effects()[0].duration, 1200);
    assert_eq!(spell.headers[0].features[0].duration, 5);
}

#[test]
fn casting_glow_follows_the_clock() {
    let oracles = oracles(6);
    oracles.clock().advance(300);
    let service = CastingService::new(oracles);

    let mut queue = EffectQueue::new();
    service
        .add_casting_glow(&magic_missile(), &mut queue, 18)
        .expect("glow template registered");

    let glow = &queue.effects()[0];
    assert_eq!(glow.timing, TimingMode::Absolute);
    assert_eq!(glow.duration, 318);
    assert_eq!(glow.parameter2, 2);
}

#[test]
fn missing_glow_template_is_reported() {
    let service = CastingService::new(OracleManager::new(
        Arc::new(EffectTemplateOracleImpl::default()),
        Arc::new(ProjectileOracleImpl::default()),
        Arc::new(ClockOracleImpl::default()),
        Arc::new(ConfigOracleImpl::new(RulesConfig::default())),
    ));

    let err = service
        .add_casting_glow(&magic_missile(), &mut EffectQueue::new(), 18)
        .expect_err("no templates registered");
    assert!(matches!(
        err,
        RuntimeError::Spell(SpellError::Oracle(OracleError::EffectTemplateNotFound(_)))
    ));
}

#[test]
fn oracles_load_from_content_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("rules.toml"), "round_length = 1\n").expect("write rules");
    std::fs::write(
        dir.path().join("effects.ron"),
        r#"(templates: { "CastingGlow": (opcode: 140, target: SelfTarget,
            timing: InstantLimited, duration: 0, parameter1: 0, parameter2: 0) })"#,
    )
    .expect("write effects");
    std::fs::write(
        dir.path().join("projectiles.ron"),
        r#"(projectiles: [(id: (2), animation: "SPMAGMIS", speed: 30)])"#,
    )
    .expect("write projectiles");

    let oracles =
        OracleManager::from_content(&ContentFactory::new(dir.path())).expect("content loads");
    let service = CastingService::new(oracles);
    let mut actors = mage_registry();

    let projectile = service
        .projectile(
            &magic_missile(),
            &Scriptable::actor(MAGE, Position::ORIGIN),
            0,
            Position::ORIGIN,
            &mut actors,
        )
        .expect("projectile 2 loaded");
    assert_eq!(projectile.animation, "SPMAGMIS");
}

#[test]
fn missing_content_is_fatal() {
    let err = OracleManager::from_content(&ContentFactory::new("/nonexistent/spells"))
        .err()
        .expect("directory does not exist");
    assert!(matches!(err, RuntimeError::Content(_)));
    assert_eq!(err.severity(), ErrorSeverity::Fatal);
}
