// config.rs
use std::path::PathBuf;

use clap::Parser;

use crate::logging::LoggingConfig;
use crate::pipeline::PipelineConfig;
use crate::shaders::ShadingMode;
use crate::triangle::InterpolationMode;

/// Renders object-space positions as colors.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Config {
    /// Window width in pixels
    #[arg(short, long, default_value = "800")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "600")]
    pub height: u32,

    /// OBJ model to draw instead of the built-in triangle
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Fragment output strategy
    #[arg(short, long, value_enum, default_value_t = ShadingMode::DebugPosition)]
    pub shading: ShadingMode,

    /// How varyings are interpolated across triangles
    #[arg(short, long, value_enum, default_value_t = InterpolationMode::Perspective)]
    pub interpolation: InterpolationMode,

    /// Log filter, env_logger syntax; overrides RUST_LOG
    #[arg(long)]
    pub log: Option<String>,
}

impl Config {
    pub fn pipeline(&self) -> PipelineConfig {
        PipelineConfig {
            shading_mode: self.shading,
            interpolation_mode: self.interpolation,
        }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            filter: self.log.clone(),
        }
    }
}
