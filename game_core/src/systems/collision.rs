use glam::Vec2;
use hecs::World;

use crate::bullets::BulletPool;
use crate::components::Enemy;
use crate::config::Config;

/// A bullet struck a drone this tick.
#[derive(Debug, Clone, Copy)]
pub struct BulletHit {
    pub entity: hecs::Entity,
    /// Impact point, midway between bullet and drone centers.
    pub point: Vec2,
    pub enemy_pos: Vec2,
    pub killed: bool,
}

/// A drone reached the core this tick.
#[derive(Debug, Clone, Copy)]
pub struct CoreContact {
    pub enemy_pos: Vec2,
}

/// Bullet-vs-enemy circle tests, O(active bullets × live enemies).
///
/// Each bullet is consumed by its first hit; damage lands inside the loop,
/// so a drone killed by one bullet is invisible to every later bullet in
/// the same tick.
pub fn resolve_bullet_hits(world: &mut World, bullets: &mut BulletPool) -> Vec<BulletHit> {
    let mut hits = Vec::new();

    for bullet in bullets.iter_active_mut() {
        for (entity, enemy) in world.query_mut::<&mut Enemy>() {
            if !enemy.alive {
                continue;
            }
            let radius_sum = bullet.radius + enemy.radius;
            if bullet.pos.distance_squared(enemy.pos) < radius_sum * radius_sum {
                bullet.active = false;
                let killed = enemy.hit(1);
                hits.push(BulletHit {
                    entity,
                    point: (bullet.pos + enemy.pos) / 2.0,
                    enemy_pos: enemy.pos,
                    killed,
                });
                break; // bullet consumed
            }
        }
    }

    hits
}

/// Enemy-vs-core sum-of-radii test. A contacting drone is always consumed;
/// whether the hit costs health is the shield's business, not ours.
pub fn resolve_core_contacts(world: &mut World, config: &Config) -> Vec<CoreContact> {
    let core = config.core_pos();
    let mut contacts = Vec::new();

    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if !enemy.alive {
            continue;
        }
        let radius_sum = enemy.radius + config.core_radius;
        if enemy.pos.distance_squared(core) < radius_sum * radius_sum {
            enemy.alive = false;
            contacts.push(CoreContact {
                enemy_pos: enemy.pos,
            });
        }
    }

    contacts
}

/// Despawn every dead drone.
pub fn prune_dead(world: &mut World) {
    let dead: Vec<hecs::Entity> = world
        .query::<&Enemy>()
        .iter()
        .filter(|(_e, enemy)| !enemy.alive)
        .map(|(e, _)| e)
        .collect();
    for entity in dead {
        let _ = world.despawn(entity);
    }
}
