use clap::Parser;

use glyphpad::app::App;
use glyphpad::config::Config;

#[derive(Parser, Debug)]
#[command(name = "glyphpad")]
#[command(
    version,
    about = "Sticker sketchpad with marker strokes, undo/redo, and PNG export"
)]
struct Cli {
    /// Window title
    #[arg(long, default_value = "Glyphpad")]
    title: String,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    width: Option<u32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    height: Option<u32>,

    /// Directory exported PNGs are written to (overrides the config file)
    #[arg(long, value_name = "DIR")]
    export_dir: Option<String>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    config.apply_overrides(cli.width, cli.height, cli.export_dir);

    log::info!("Starting glyphpad");
    log::info!("Controls:");
    log::info!("  - Draw: drag with the left mouse button");
    log::info!("  - Thin/thick marker: 1 / 2");
    log::info!("  - Palette stickers: 3-9");
    log::info!("  - Custom sticker: T, type the glyph, press Enter");
    log::info!("  - Undo / redo: Z / Y");
    log::info!("  - Clear: E");
    log::info!("  - Export PNG: S");
    log::info!("  - Exit: Escape");

    let mut app = App::new(&cli.title, &config)?;
    app.run()
}
