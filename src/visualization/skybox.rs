use bevy::asset::{LoadState, RenderAssetUsages};
use bevy::core_pipeline::Skybox;
use bevy::prelude::*;
use bevy::render::render_resource::{
    Extent3d, TextureDimension, TextureViewDescriptor, TextureViewDimension,
};

use crate::scene::{SceneConfig, SceneSet};
use crate::visualization::MainCamera;

pub struct SkyboxPlugin;

impl Plugin for SkyboxPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, request_skybox_faces)
            .add_systems(Update, assemble_skybox.in_set(SceneSet::Load));
    }
}

/// Six face images waiting to be stacked into a cube texture
#[derive(Resource)]
pub struct SkyboxFaces {
    /// +X, -X, +Y, -Y, +Z, -Z
    pub handles: [Handle<Image>; 6],
    /// Set once the cube was attached or assembly was abandoned
    pub done: bool,
}

fn request_skybox_faces(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SceneConfig>,
) {
    let handles = config
        .assets
        .skybox_faces
        .clone()
        .map(|path| asset_server.load(path));
    commands.insert_resource(SkyboxFaces {
        handles,
        done: false,
    });
}

fn assemble_skybox(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut images: ResMut<Assets<Image>>,
    mut faces: ResMut<SkyboxFaces>,
    camera_query: Query<Entity, With<MainCamera>>,
) {
    if faces.done {
        return;
    }

    let failure = faces
        .handles
        .iter()
        .find_map(|h| match asset_server.get_load_state(h.id()) {
            Some(LoadState::Failed(err)) => Some(err),
            _ => None,
        });
    if let Some(err) = failure {
        warn!("Skybox face failed to load: {}", err);
        faces.done = true;
        return;
    }
    if !faces
        .handles
        .iter()
        .all(|h| asset_server.is_loaded_with_dependencies(h.id()))
    {
        return;
    }

    let stacked = {
        let mut loaded = Vec::with_capacity(6);
        for handle in &faces.handles {
            let Some(image) = images.get(handle) else {
                return;
            };
            loaded.push(image);
        }
        stack_cube_faces(&loaded)
    };
    faces.done = true;

    let cube = match stacked {
        Ok(cube) => cube,
        Err(err) => {
            warn!("Failed to assemble skybox cubemap: {}", err);
            return;
        }
    };
    let cube_handle = images.add(cube);

    if let Ok(camera_entity) = camera_query.single() {
        commands.entity(camera_entity).insert(Skybox {
            image: cube_handle,
            brightness: 1000.0,
            ..default()
        });
        info!("Skybox attached");
    }
}

/// Stack six equally sized square faces into one cube texture
pub fn stack_cube_faces(faces: &[&Image]) -> Result<Image, anyhow::Error> {
    let [first, ..] = faces else {
        anyhow::bail!("no skybox faces");
    };
    if faces.len() != 6 {
        anyhow::bail!("expected 6 skybox faces, got {}", faces.len());
    }

    let size = first.texture_descriptor.size;
    let format = first.texture_descriptor.format;
    if size.width != size.height {
        anyhow::bail!("skybox faces must be square, got {}x{}", size.width, size.height);
    }

    let mut data = Vec::new();
    for (i, face) in faces.iter().enumerate() {
        let face_size = face.texture_descriptor.size;
        if face_size.width != size.width || face_size.height != size.height {
            anyhow::bail!(
                "skybox face {} is {}x{}, expected {}x{}",
                i,
                face_size.width,
                face_size.height,
                size.width,
                size.height
            );
        }
        if face.texture_descriptor.format != format {
            anyhow::bail!("skybox face {} has a different texture format", i);
        }
        let Some(bytes) = face.data.as_deref() else {
            anyhow::bail!("skybox face {} has no CPU-side pixel data", i);
        };
        data.extend_from_slice(bytes);
    }

    let mut cube = Image::new(
        Extent3d {
            width: size.width,
            height: size.height,
            depth_or_array_layers: 6,
        },
        TextureDimension::D2,
        data,
        format,
        RenderAssetUsages::RENDER_WORLD,
    );
    cube.texture_view_descriptor = Some(TextureViewDescriptor {
        dimension: Some(TextureViewDimension::Cube),
        ..default()
    });
    Ok(cube)
}
