use clap::Parser;
use hero_core::ScenePreset;

#[derive(Parser, Debug, Clone)]
#[command(name = "hero-native")]
#[command(about = "Desktop preview of the hero scene", long_about = None)]
pub struct Cli {
    /// Scene preset: hero or particles
    #[arg(long, default_value_t = ScenePreset::Hero)]
    pub scene: ScenePreset,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 720)]
    pub height: u32,
}
