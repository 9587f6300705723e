//! Star field

use bevy::prelude::*;
use rand::Rng;

use crate::scene::{SceneConfig, SceneRng};

/// Component marker for star quads
#[derive(Component)]
pub struct Star;

/// Scatter textured quads through a cube, each facing the initial camera position
pub fn spawn_star_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    mut rng: ResMut<SceneRng>,
    config: Res<SceneConfig>,
) {
    let cfg = &config.stars;
    let camera_position = Vec3::from_array(config.camera.position);

    // The texture streams in later; the material picks it up when ready.
    let texture: Handle<Image> = asset_server.load(config.assets.star_texture.clone());
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(texture),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let mesh = meshes.add(Plane3d::new(Vec3::Z, Vec2::splat(cfg.size * 0.5)));

    for _ in 0..cfg.count {
        let position = scatter_point(&mut **rng, cfg.spread);
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            facing(position, camera_position),
            Star,
        ));
    }
}

/// Uniform point in a cube of edge `spread` centred on the origin
pub fn scatter_point<R: Rng + ?Sized>(rng: &mut R, spread: f32) -> Vec3 {
    Vec3::new(
        (rng.gen_range(0.0..1.0) - 0.5) * spread,
        (rng.gen_range(0.0..1.0) - 0.5) * spread,
        (rng.gen_range(0.0..1.0) - 0.5) * spread,
    )
}

/// Transform at `position` whose +Z face (the quad's front) points at `viewer`
fn facing(position: Vec3, viewer: Vec3) -> Transform {
    Transform::from_translation(position).looking_to(position - viewer, Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter_stays_in_cube() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = scatter_point(&mut rng, 100.0);
            assert!(p.abs().max_element() <= 50.0);
        }
    }

    #[test]
    fn test_star_faces_viewer() {
        let viewer = Vec3::new(0.0, 5.0, 10.0);
        let t = facing(Vec3::new(20.0, -3.0, 7.0), viewer);
        let front = t.rotation * Vec3::Z;
        let to_viewer = (viewer - t.translation).normalize();
        assert!(front.dot(to_viewer) > 0.999);
    }
}
