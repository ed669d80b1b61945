//! platformkit main entry point.
//!
//! Loads physics tuning and a JSON scene into a `bevy_ecs` world, logs what
//! was spawned, and optionally writes the captured world back out.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --scene assets/scenes/level1.json --dump out.json
//! ```

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};

use platformkit::components::physics::Physics;
use platformkit::components::sprite::Sprite;
use platformkit::components::transform::Transform;
use platformkit::resources::physicsconfig::PhysicsConfig;
use platformkit::resources::texturestore::TextureStore;
use platformkit::scene::Scene;

/// Load a component scene into an ECS world and inspect it.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Physics tuning INI file.
    #[arg(long, value_name = "PATH", default_value = "./physics.ini")]
    config: PathBuf,

    /// Scene JSON file to load.
    #[arg(long, value_name = "PATH")]
    scene: PathBuf,

    /// Write the captured world to this JSON file.
    #[arg(long, value_name = "PATH")]
    dump: Option<PathBuf>,

    /// Detach the Sprite component from every entity before capturing.
    #[arg(long)]
    detach_sprites: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = PhysicsConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using default physics tuning", e);
    }

    let mut world = World::new();
    world.insert_resource(config);
    world.insert_resource(TextureStore::new());

    let scene = match Scene::load(&cli.scene) {
        Ok(scene) => scene,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let entities = scene.spawn_into(&mut world);

    for entity in &entities {
        let transform = world.get::<Transform>(*entity);
        let sprite = world.get::<Sprite>(*entity);
        let physics = world.get::<Physics>(*entity);
        info!(
            "{:?}: position={:?} texture={:?} velocity={:?} moving_down={}",
            entity,
            transform.map(|t| t.position),
            sprite.map(|s| s.texture.key()),
            physics.map(|p| p.velocity),
            physics.is_some_and(Physics::is_moving_downwards)
        );
    }

    if cli.detach_sprites {
        for entity in &entities {
            world.entity_mut(*entity).remove::<Sprite>();
        }
        info!("Detached sprites from {} entities", entities.len());
    }

    if let Some(path) = cli.dump {
        let snapshot = Scene::capture(&mut world);
        if let Err(e) = snapshot.save(&path) {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
