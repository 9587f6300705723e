//! Meteor meshes
//!
//! Simulation spawns bare `Meteor` records; this attaches the shared sphere
//! mesh and material to each new one.

use bevy::prelude::*;

use crate::meteors::Meteor;

/// Mesh and material shared by every meteor
#[derive(Resource)]
pub struct MeteorAssets {
    pub mesh: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

pub fn prepare_meteor_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(MeteorAssets {
        mesh: meshes.add(Sphere::new(0.05).mesh().uv(6, 6)),
        material: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        }),
    });
}

/// System to give newly spawned meteors their visuals
pub fn dress_new_meteors(
    mut commands: Commands,
    assets: Option<Res<MeteorAssets>>,
    new_meteors: Query<Entity, Added<Meteor>>,
) {
    let Some(assets) = assets else { return };
    for entity in new_meteors.iter() {
        commands.entity(entity).insert((
            Mesh3d(assets.mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
        ));
    }
}
