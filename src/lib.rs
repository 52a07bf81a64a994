pub mod background;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod logo;
pub mod persist;
pub mod placement;

pub use background::{BackgroundGenerator, Canvas, IridescentGenerator, SolidGenerator};
pub use config::LogoConfig;
pub use error::LogoError;
pub use font::{load_font, LoadedFont, TextPainter};
pub use logo::{compose, generate_logo, RenderedLogo};
pub use placement::{center, resolve, Placement, PlacementMode, TextMetrics};
